//! Session-based authentication
//!
//! Sessions are opaque rows in Postgres; the session id itself is the
//! bearer credential. A user holds at most one live session: a login for a
//! user who already has one refreshes it in place instead of minting a
//! second id (the recycling contract). Expiry is a passive timestamp
//! comparison; nothing sweeps stale rows.

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use chrono::{Duration, Utc};
use tracing::info;
use uuid::Uuid;

use crate::color::DEFAULT_COLOR;
use crate::error::{ApiError, ApiResult};
use crate::models::{Session, User};
use crate::repositories::{DeckRepository, SessionRepository, UserRepository};
use crate::validation;

/// Session lifetime: 30 minutes
const SESSION_TTL_MINUTES: i64 = 30;

/// Name of the deck every new user starts with
const DEFAULT_DECK_NAME: &str = "First Deck!";

/// Authenticated request context
///
/// Produced once per request by the auth middleware and threaded into
/// handlers through request extensions; handlers never re-parse the
/// Authorization header themselves.
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user: User,
    pub session_id: Uuid,
}

/// Credential validation and session lifecycle
#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    sessions: SessionRepository,
    decks: DeckRepository,
    session_ttl: Duration,
}

impl AuthService {
    /// Create a new auth service
    ///
    /// The session TTL defaults to 30 minutes and can be overridden with
    /// the `SESSION_TTL_MINUTES` environment variable.
    pub fn new(users: UserRepository, sessions: SessionRepository, decks: DeckRepository) -> Self {
        Self {
            users,
            sessions,
            decks,
            session_ttl: session_ttl_from_env(),
        }
    }

    /// Validate credentials and issue (or recycle) a session
    pub async fn authenticate(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> ApiResult<(User, Session)> {
        let email = validation::require_email(email)?;
        info!("Login attempt for: {}", email);

        let user = self
            .users
            .find_by_email(email)
            .await?
            .ok_or(ApiError::UserNotFound)?;

        if !verify_password(&user.password_hash, password.unwrap_or_default())? {
            return Err(ApiError::IncorrectPassword);
        }

        let session = self.issue_session(user.id).await?;
        Ok((user, session))
    }

    /// Register a new user and log them in
    ///
    /// Creates the user, their default deck (owned and set as current),
    /// and a fresh session.
    pub async fn register(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        is_admin: bool,
    ) -> ApiResult<(User, Session)> {
        let email = validation::require_email(email)?;
        let password = validation::validate_password(password)?;

        // Pre-emptive check; the unique constraint below is the
        // authoritative guard against the check/write race.
        if self.users.find_by_email(email).await?.is_some() {
            return Err(ApiError::AlreadyRegistered);
        }

        let password_hash = hash_password(password)?;
        let mut user = match self.users.create(email, &password_hash, is_admin).await {
            Ok(user) => user,
            Err(e) if is_unique_violation(&e) => return Err(ApiError::AlreadyRegistered),
            Err(e) => return Err(e.into()),
        };

        let deck = self.decks.create(DEFAULT_DECK_NAME, DEFAULT_COLOR).await?;
        self.users.append_deck(user.id, deck.id).await?;
        self.users
            .update_preferences(user.id, Some(deck.id), None)
            .await?;
        user.decks.push(deck.id);
        user.current_deck = Some(deck.id);

        info!("User registered: {}", email);

        // A brand-new user never has a prior session, so this always
        // creates one.
        let session = self.issue_session(user.id).await?;
        Ok((user, session))
    }

    /// Delete the presented session
    ///
    /// A token that no longer maps to a session is a successful no-op;
    /// only a missing token is an error.
    pub async fn end_session(&self, token: Option<&str>) -> ApiResult<()> {
        let token = token.ok_or(ApiError::NotLoggedIn)?;

        if let Ok(id) = token.parse::<Uuid>() {
            self.sessions.delete(id).await?;
        }

        Ok(())
    }

    /// Resolve a presented token into an authenticated context
    ///
    /// Missing, unknown and expired tokens are all `Unauthorized`.
    /// Validation never refreshes expiry; only login does.
    pub async fn validate(&self, token: Option<&str>) -> ApiResult<AuthContext> {
        let token = token.ok_or(ApiError::Unauthorized)?;
        let id = token.parse::<Uuid>().map_err(|_| ApiError::Unauthorized)?;

        let session = self
            .sessions
            .find_by_id(id)
            .await?
            .ok_or(ApiError::Unauthorized)?;

        if session.is_expired(Utc::now()) {
            return Err(ApiError::Unauthorized);
        }

        let user = self
            .users
            .find_by_id(session.user_id)
            .await?
            .ok_or(ApiError::Unauthorized)?;

        Ok(AuthContext {
            user,
            session_id: session.id,
        })
    }

    /// Refresh the user's existing session or create a new one
    ///
    /// The id stays stable across repeated logins; only the expiry moves.
    async fn issue_session(&self, user_id: Uuid) -> ApiResult<Session> {
        let expires_at = Utc::now() + self.session_ttl;

        let session = match self.sessions.find_by_user(user_id).await? {
            Some(existing) => self.sessions.refresh(existing.id, expires_at).await?,
            None => self.sessions.create(user_id, expires_at).await?,
        };

        Ok(session)
    }
}

/// Session TTL from `SESSION_TTL_MINUTES`, defaulting to 30 minutes
///
/// An unset or unparseable value falls back to the default.
fn session_ttl_from_env() -> Duration {
    let ttl_minutes = std::env::var("SESSION_TTL_MINUTES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(SESSION_TTL_MINUTES);

    Duration::minutes(ttl_minutes)
}

/// Hash a plaintext password with a salted adaptive hash
pub fn hash_password(password: &str) -> ApiResult<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!("Failed to hash password: {}", e))?;

    Ok(hash.to_string())
}

/// Compare a plaintext password against a stored hash
pub fn verify_password(hash: &str, password: &str) -> ApiResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| anyhow::anyhow!("Failed to parse password hash: {}", e))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}

/// Whether a storage error is a uniqueness-constraint violation
fn is_unique_violation(err: &anyhow::Error) -> bool {
    err.downcast_ref::<sqlx::Error>()
        .and_then(|e| match e {
            sqlx::Error::Database(db) => db.code().map(|code| code == "23505"),
            _ => None,
        })
        .unwrap_or(false)
}
