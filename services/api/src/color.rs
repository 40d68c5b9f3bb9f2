//! Deck color assignment

use rand::Rng;
use std::sync::Mutex;

/// Color used for decks created outside the picker, e.g. the signup
/// default deck.
pub const DEFAULT_COLOR: &str = "#000000";

const PALETTE: [&str; 12] = [
    "#e6194b", "#3cb44b", "#ffe119", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6",
    "#bcf60c", "#fabebe", "#008080", "#e6beff",
];

/// Picks deck colors such that consecutive picks never repeat
///
/// The guarantee is deliberately the weak one: only the immediately prior
/// color is excluded, not every color ever assigned.
pub struct ColorPicker {
    last: Mutex<Option<&'static str>>,
}

impl ColorPicker {
    pub fn new() -> Self {
        ColorPicker {
            last: Mutex::new(None),
        }
    }

    /// Draw the next color
    pub fn next(&self) -> &'static str {
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        let mut rng = rand::thread_rng();

        loop {
            let pick = PALETTE[rng.gen_range(0..PALETTE.len())];
            if *last != Some(pick) {
                *last = Some(pick);
                return pick;
            }
        }
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new()
    }
}
