//! User repository for database operations

use anyhow::Result;
use sqlx::postgres::PgRow;
use sqlx::types::Json;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use crate::models::{StudyMode, User};

const USER_COLUMNS: &str = "id, email, password_hash, is_admin, email_confirmed, decks, \
                            current_deck, current_mode, created_at, updated_at";

/// User repository
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn from_row(row: &PgRow) -> Result<User> {
        let mode: String = row.get("current_mode");
        let current_mode = mode
            .parse::<StudyMode>()
            .map_err(|_| anyhow::anyhow!("Unknown study mode in storage: {}", mode))?;

        Ok(User {
            id: row.get("id"),
            email: row.get("email"),
            password_hash: row.get("password_hash"),
            is_admin: row.get("is_admin"),
            email_confirmed: row.get("email_confirmed"),
            decks: row.get::<Json<Vec<Uuid>>, _>("decks").0,
            current_deck: row.get("current_deck"),
            current_mode,
            created_at: row.get("created_at"),
            updated_at: row.get("updated_at"),
        })
    }

    /// Create a new user with an already-hashed password
    pub async fn create(&self, email: &str, password_hash: &str, is_admin: bool) -> Result<User> {
        info!("Creating new user: {}", email);

        let row = sqlx::query(&format!(
            r#"
            INSERT INTO users (email, password_hash, is_admin)
            VALUES ($1, $2, $3)
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(email)
        .bind(password_hash)
        .bind(is_admin)
        .fetch_one(&self.pool)
        .await?;

        Self::from_row(&row)
    }

    /// Find a user by email
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE email = $1
            "#
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let row = sqlx::query(&format!(
            r#"
            SELECT {USER_COLUMNS}
            FROM users
            WHERE id = $1
            "#
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(Self::from_row).transpose()
    }

    /// Append a deck id to the user's ordered deck list
    pub async fn append_deck(&self, user_id: Uuid, deck_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET decks = decks || to_jsonb($2::uuid), updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(deck_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove a deck id from the user's deck list, clearing `current_deck`
    /// when it pointed at the removed deck
    pub async fn remove_deck(&self, user_id: Uuid, deck_id: Uuid) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET decks = decks - $2,
                current_deck = CASE WHEN current_deck = $3 THEN NULL ELSE current_deck END,
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(deck_id.to_string())
        .bind(deck_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Update study preferences; unsupplied fields are left unchanged
    pub async fn update_preferences(
        &self,
        user_id: Uuid,
        current_deck: Option<Uuid>,
        current_mode: Option<StudyMode>,
    ) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET current_deck = COALESCE($2, current_deck),
                current_mode = COALESCE($3, current_mode),
                updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .bind(current_deck)
        .bind(current_mode.map(|m| m.as_str()))
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Mark the user's email address as confirmed
    pub async fn set_email_confirmed(&self, user_id: Uuid) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET email_confirmed = true, updated_at = now()
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
