//! HTTP routes for the flashcard backend

use axum::{
    Json, Router, middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;

use crate::middleware::{require_admin, require_auth};
use crate::state::AppState;

pub mod auth;
pub mod deck;
pub mod flashcard;
pub mod user;

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    let auth_routes = Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout));

    let deck_routes = Router::new()
        .route("/create", post(deck::create_deck))
        .route("/:id", get(deck::get_deck))
        .route("/:id/update", post(deck::update_deck))
        .route("/:id/delete", post(deck::delete_deck))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    // Card mutation is admin-only; the listing just needs a login.
    let flashcard_admin_routes = Router::new()
        .route("/create", post(flashcard::create_flashcard))
        .route("/:id/update", post(flashcard::update_flashcard))
        .route("/:id/delete", post(flashcard::delete_flashcard))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth));

    let flashcard_routes = Router::new()
        .route("/index", get(flashcard::list_flashcards))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .merge(flashcard_admin_routes);

    // GET /user/:id stays outside the auth layer: with ?confirmation=true
    // it serves unauthenticated email-confirmation callbacks.
    let user_routes = Router::new()
        .route("/:id/update", post(user::update_user))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .route("/:id", get(user::get_user));

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/auth", auth_routes)
        .nest("/deck", deck_routes)
        .nest("/flashcard", flashcard_routes)
        .nest("/user", user_routes)
        .with_state(state)
}

/// Liveness text for the bare root
pub async fn root() -> impl IntoResponse {
    "👋 Signdeck flashcards backend is live"
}

/// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "service": "flashcard-api"
    }))
}
