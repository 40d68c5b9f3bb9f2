//! Flashcard model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Flashcard entity
///
/// Cards carry no owner; decks reference them by id and any number of
/// decks may share one card.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flashcard {
    pub id: Uuid,
    /// The word being taught
    pub gloss: String,
    /// URL of the sign animation
    pub gif: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
