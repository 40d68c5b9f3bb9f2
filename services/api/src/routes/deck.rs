//! Deck routes
//!
//! All deck routes require a session. Ownership is resolved through the
//! authenticated user's deck list; a deck that exists but belongs to
//! someone else answers exactly like one that does not exist.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::auth::AuthContext;
use crate::error::{ApiError, ApiResult};
use crate::models::{Deck, DeckView};
use crate::reconcile::reconcile;
use crate::state::AppState;
use crate::validation;

/// Request for deck creation
#[derive(Deserialize)]
pub struct CreateDeckRequest {
    pub name: Option<String>,
}

/// Patch for deck updates; every field is independent
#[derive(Deserialize, Default)]
pub struct UpdateDeckRequest {
    pub name: Option<String>,
    pub color: Option<String>,
    /// Card ids to append, in order
    pub add: Option<Vec<Uuid>>,
    /// Card ids to remove
    pub remove: Option<Vec<Uuid>>,
}

/// Create a new deck owned by the caller
pub async fn create_deck(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Json(payload): Json<CreateDeckRequest>,
) -> ApiResult<impl IntoResponse> {
    let name = validation::require_text(payload.name.as_deref(), ApiError::MissingName)?;

    let color = state.color_picker.next();
    let deck = state.deck_repository.create(name, color).await?;
    state
        .user_repository
        .append_deck(ctx.user.id, deck.id)
        .await?;

    Ok((StatusCode::CREATED, Json(deck)))
}

/// Get a deck with its card data populated
pub async fn get_deck(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    let deck = owned_deck(&state, &ctx, id).await?;

    let cards = state.flashcard_repository.find_by_ids(&deck.cards).await?;

    Ok(Json(DeckView::new(deck, cards)))
}

/// Apply a deck patch: rename, recolor, and reconcile card membership
pub async fn update_deck(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateDeckRequest>,
) -> ApiResult<impl IntoResponse> {
    // Snapshot taken once; every membership check below runs against it.
    let deck = owned_deck(&state, &ctx, id).await?;

    let new_cards = match (&payload.add, &payload.remove) {
        (None, None) => None,
        (add, remove) => {
            let add = add.as_deref().unwrap_or_default();
            let remove = remove.as_deref().unwrap_or_default();
            let known = state.flashcard_repository.existing_ids(add).await?;
            Some(reconcile(&deck.cards, add, remove, &known)?)
        }
    };

    let updated = state
        .deck_repository
        .update(
            id,
            payload.name.as_deref(),
            payload.color.as_deref(),
            new_cards.as_deref(),
        )
        .await?
        .ok_or(ApiError::DeckNotFound)?;

    Ok(Json(updated))
}

/// Delete a deck and detach it from its owner
pub async fn delete_deck(
    State(state): State<AppState>,
    Extension(ctx): Extension<AuthContext>,
    Path(id): Path<Uuid>,
) -> ApiResult<impl IntoResponse> {
    owned_deck(&state, &ctx, id).await?;

    if !state.deck_repository.delete(id).await? {
        return Err(ApiError::DeckNotFound);
    }
    state.user_repository.remove_deck(ctx.user.id, id).await?;

    Ok(Json(json!({"message": "Deck deleted successfully"})))
}

/// Fetch a deck the caller owns, folding "absent" and "not owned"
/// into the same error
async fn owned_deck(state: &AppState, ctx: &AuthContext, id: Uuid) -> ApiResult<Deck> {
    if !ctx.user.decks.contains(&id) {
        return Err(ApiError::DeckNotFound);
    }

    state
        .deck_repository
        .find_by_id(id)
        .await?
        .ok_or(ApiError::DeckNotFound)
}
