//! Deck membership reconciliation
//!
//! Merges requested add/remove card-id sets into an ordered membership
//! list. The whole operation validates against one snapshot and either
//! yields the full resulting list or fails without partial application.

use std::collections::HashSet;
use uuid::Uuid;

use crate::error::ApiError;

/// Reconciliation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileError {
    /// A removal id is not currently in the deck
    RemoveAbsentCard,
    /// An add id is already in the deck (or repeated in the add list)
    AddDuplicateCard,
    /// An add id names no existing flashcard
    AddNonexistentCard,
}

impl From<ReconcileError> for ApiError {
    fn from(err: ReconcileError) -> Self {
        match err {
            ReconcileError::RemoveAbsentCard => ApiError::RemoveAbsentCard,
            ReconcileError::AddDuplicateCard => ApiError::AddDuplicateCard,
            ReconcileError::AddNonexistentCard => ApiError::AddNonexistentCard,
        }
    }
}

/// Compute the card list resulting from an add/remove patch
///
/// Removals are applied first, against the pre-update list; the add list
/// is then appended in the order given. Untouched elements keep their
/// relative order and the result never contains an id twice. `known_cards`
/// is the set of add ids that actually exist in storage.
pub fn reconcile(
    current: &[Uuid],
    add: &[Uuid],
    remove: &[Uuid],
    known_cards: &HashSet<Uuid>,
) -> Result<Vec<Uuid>, ReconcileError> {
    let remove_set: HashSet<Uuid> = remove.iter().copied().collect();

    for id in remove {
        if !current.contains(id) {
            return Err(ReconcileError::RemoveAbsentCard);
        }
    }

    let mut result: Vec<Uuid> = current
        .iter()
        .filter(|id| !remove_set.contains(*id))
        .copied()
        .collect();

    for id in add {
        if result.contains(id) {
            return Err(ReconcileError::AddDuplicateCard);
        }
        if !known_cards.contains(id) {
            return Err(ReconcileError::AddNonexistentCard);
        }
        result.push(*id);
    }

    Ok(result)
}
