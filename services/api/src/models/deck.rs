//! Deck model and related functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::Flashcard;

/// Deck entity
///
/// Ownership is not stored here; it lives on the owning user's `decks`
/// list.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deck {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    /// Ordered card ids, free of duplicates
    pub cards: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Deck as returned by reads, with card data populated
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeckView {
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub cards: Vec<Flashcard>,
}

impl DeckView {
    pub fn new(deck: Deck, cards: Vec<Flashcard>) -> Self {
        DeckView {
            id: deck.id,
            name: deck.name,
            color: deck.color,
            cards,
        }
    }
}
