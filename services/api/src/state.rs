//! Application state shared across handlers

use sqlx::PgPool;
use std::sync::Arc;

use crate::auth::AuthService;
use crate::color::ColorPicker;
use crate::repositories::{DeckRepository, FlashcardRepository, SessionRepository, UserRepository};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub user_repository: UserRepository,
    pub session_repository: SessionRepository,
    pub deck_repository: DeckRepository,
    pub flashcard_repository: FlashcardRepository,
    pub auth_service: AuthService,
    pub color_picker: Arc<ColorPicker>,
}

impl AppState {
    /// Build the full state graph over one connection pool
    pub fn new(db_pool: PgPool) -> Self {
        let user_repository = UserRepository::new(db_pool.clone());
        let session_repository = SessionRepository::new(db_pool.clone());
        let deck_repository = DeckRepository::new(db_pool.clone());
        let flashcard_repository = FlashcardRepository::new(db_pool.clone());
        let auth_service = AuthService::new(
            user_repository.clone(),
            session_repository.clone(),
            deck_repository.clone(),
        );

        AppState {
            db_pool,
            user_repository,
            session_repository,
            deck_repository,
            flashcard_repository,
            auth_service,
            color_picker: Arc::new(ColorPicker::new()),
        }
    }
}
