//! User routes

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::HeaderMap,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::auth::AuthContext;
use crate::error::{ApiError, ApiResult};
use crate::middleware::session_token;
use crate::models::{StudyMode, UserView};
use crate::state::AppState;

/// Patch for study preferences; either field may come alone
#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub current_deck: Option<Uuid>,
    pub current_mode: Option<String>,
}

/// Query string for user retrieval
#[derive(Deserialize, Default)]
pub struct GetUserQuery {
    #[serde(default)]
    pub confirmation: bool,
}

/// Get a user record, or confirm their email address
///
/// `?confirmation=true` is the unauthenticated email-confirmation
/// callback; the plain read requires the caller's own session. This route
/// does its own validation instead of sitting behind the auth layer so
/// the confirmation path stays reachable from an email link.
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
    Query(query): Query<GetUserQuery>,
) -> ApiResult<impl IntoResponse> {
    if query.confirmation {
        if !state.user_repository.set_email_confirmed(id).await? {
            return Err(ApiError::UserNotFound);
        }
        return Ok(Json(json!({"message": "Email confirmed"})).into_response());
    }

    let ctx = state.auth_service.validate(session_token(&headers)).await?;
    if ctx.user.id != id {
        return Err(ApiError::InvalidUserId);
    }

    Ok(Json(UserView::from(ctx.user)).into_response())
}

/// Update the caller's study preferences
///
/// The caller may only touch their own record; both fields are validated
/// before anything is written, so a bad mode rejects the deck change too.
pub async fn update_user(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserRequest>,
) -> ApiResult<impl IntoResponse> {
    if ctx.user.id != id {
        return Err(ApiError::InvalidUserId);
    }

    let current_mode = payload
        .current_mode
        .as_deref()
        .map(|mode| mode.parse::<StudyMode>().map_err(|_| ApiError::InvalidMode))
        .transpose()?;

    if let Some(deck_id) = payload.current_deck {
        if !ctx.user.decks.contains(&deck_id) {
            return Err(ApiError::InvalidCurrentDeck);
        }
    }

    state
        .user_repository
        .update_preferences(id, payload.current_deck, current_mode)
        .await?;

    let mut user = ctx.user;
    if let Some(deck_id) = payload.current_deck {
        user.current_deck = Some(deck_id);
    }
    if let Some(mode) = current_mode {
        user.current_mode = mode;
    }

    Ok(Json(UserView::from(user)))
}
