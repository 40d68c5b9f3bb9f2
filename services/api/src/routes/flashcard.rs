//! Flashcard routes
//!
//! Cards are a shared, unowned pool: any logged-in user can read them,
//! mutation is admin-gated by the router layering.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use crate::validation;

/// Request for flashcard creation
#[derive(Deserialize)]
pub struct CreateFlashcardRequest {
    pub gloss: Option<String>,
    pub gif: Option<String>,
}

/// Patch for flashcard updates
#[derive(Deserialize, Default)]
pub struct UpdateFlashcardRequest {
    pub gloss: Option<String>,
    pub gif: Option<String>,
}

/// Paging parameters for the card listing
#[derive(Deserialize, Default)]
pub struct ListQuery {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Create a new flashcard; responds with the new card's id
pub async fn create_flashcard(
    State(state): State<AppState>,
    Json(payload): Json<CreateFlashcardRequest>,
) -> ApiResult<impl IntoResponse> {
    let gloss = validation::require_text(payload.gloss.as_deref(), ApiError::MissingGloss)?;
    let gif = validation::require_text(payload.gif.as_deref(), ApiError::MissingGif)?;

    let card = state.flashcard_repository.create(gloss, gif).await?;

    Ok((StatusCode::CREATED, Json(card.id)))
}

/// List flashcards, oldest first
pub async fn list_flashcards(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<impl IntoResponse> {
    let cards = state
        .flashcard_repository
        .list(query.skip, query.limit)
        .await?;

    Ok(Json(cards))
}

/// Apply a flashcard patch
pub async fn update_flashcard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateFlashcardRequest>,
) -> ApiResult<impl IntoResponse> {
    let card = state
        .flashcard_repository
        .update(id, payload.gloss.as_deref(), payload.gif.as_deref())
        .await?
        .ok_or(ApiError::CardNotFound)?;

    Ok(Json(card))
}

/// Delete a flashcard; a nonexistent id is an error, not a no-op
pub async fn delete_flashcard(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    if !state.flashcard_repository.delete(id).await? {
        return Err(ApiError::CardNotFound);
    }

    Ok(Json(json!({"message": "Flashcard deleted successfully"})))
}
