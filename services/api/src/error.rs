//! Error taxonomy for the flashcard backend
//!
//! Every domain failure maps to a fixed error kind with a fixed client
//! message. The `#[error]` strings are the whole message catalog; handlers
//! never hand storage-layer error text to the client outside the
//! internal-error fallback.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// All errors surfaced by the API
#[derive(Error, Debug)]
pub enum ApiError {
    // Validation (400)
    #[error("Please provide your email.")]
    MissingEmail,
    #[error(
        "Password needs to have at least 8 chars and must contain at least one number, one lowercase and one uppercase letter."
    )]
    InvalidPassword,
    #[error("Please provide a name for this deck.")]
    MissingName,
    #[error("Please provide a gloss for this card.")]
    MissingGloss,
    #[error("Please provide a gif url for this card.")]
    MissingGif,
    #[error("Study mode must be either \"expressive\" or \"receptive\".")]
    InvalidMode,
    #[error("Current deck must be one of your own decks.")]
    InvalidCurrentDeck,
    #[error("You may only update your own user record.")]
    InvalidUserId,
    #[error("Cannot remove a card that is not in the deck.")]
    RemoveAbsentCard,
    #[error("Cannot add a card that is already in the deck.")]
    AddDuplicateCard,
    #[error("Cannot add a nonexistent flashcard to the deck.")]
    AddNonexistentCard,

    // Not found (400, indistinguishable from "not owned")
    #[error("Email not recognized.")]
    UserNotFound,
    #[error("Deck id provided does not exist.")]
    DeckNotFound,
    #[error("Nonexistent flashcard cannot be deleted.")]
    CardNotFound,
    #[error("Incorrect password.")]
    IncorrectPassword,

    // Conflict (400)
    #[error("Email already taken.")]
    AlreadyRegistered,

    // Auth (403)
    #[error("You are not authorized. Log in required.")]
    Unauthorized,
    #[error("You are not authorized. Admin log in required.")]
    AdminRequired,
    #[error("You are not logged in.")]
    NotLoggedIn,
    #[error("You are already logged in.")]
    AlreadyLoggedIn,

    // Internal (500)
    #[error("Internal server error")]
    Internal(anyhow::Error),
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err)
    }
}

impl ApiError {
    /// HTTP status this error maps to
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized
            | ApiError::AdminRequired
            | ApiError::NotLoggedIn
            | ApiError::AlreadyLoggedIn => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            ApiError::Internal(e) => {
                error!("Internal error: {:#}", e);
                // Raw detail rides along on the 500 path only
                json!({
                    "errorMessage": self.to_string(),
                    "error": format!("{e:#}"),
                })
            }
            _ => json!({ "errorMessage": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
