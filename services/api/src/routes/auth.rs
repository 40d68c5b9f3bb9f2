//! Authentication routes

use axum::{
    Json,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ApiError, ApiResult};
use crate::middleware::session_token;
use crate::models::{Session, UserView};
use crate::state::AppState;

/// Request for user signup
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    #[serde(default)]
    pub is_admin: bool,
}

/// Request for user login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response for signup and login
#[derive(Serialize)]
pub struct AuthResponse {
    pub user: UserView,
    pub session: Session,
}

/// User signup endpoint
///
/// Rejected outright when the request already carries a session; the
/// client should log out first.
pub async fn signup(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<SignupRequest>,
) -> ApiResult<impl IntoResponse> {
    if session_token(&headers).is_some() {
        return Err(ApiError::AlreadyLoggedIn);
    }

    let (user, session) = state
        .auth_service
        .register(
            payload.email.as_deref(),
            payload.password.as_deref(),
            payload.is_admin,
        )
        .await?;

    let response = AuthResponse {
        user: user.into(),
        session,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// User login endpoint
///
/// Recycles the user's existing session when one is live: the returned
/// session id is stable across repeated logins.
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<impl IntoResponse> {
    let (user, session) = state
        .auth_service
        .authenticate(payload.email.as_deref(), payload.password.as_deref())
        .await?;

    let response = AuthResponse {
        user: user.into(),
        session,
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Logout endpoint
///
/// Idempotent: a token for an already-deleted session still succeeds.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> ApiResult<impl IntoResponse> {
    state.auth_service.end_session(session_token(&headers)).await?;

    Ok((
        StatusCode::OK,
        Json(json!({"message": "Logged out successfully"})),
    ))
}
