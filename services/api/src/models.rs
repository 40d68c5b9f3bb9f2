//! Domain models for the flashcard backend

pub mod deck;
pub mod flashcard;
pub mod session;
pub mod user;

// Re-export for convenience
pub use deck::{Deck, DeckView};
pub use flashcard::Flashcard;
pub use session::Session;
pub use user::{StudyMode, User, UserView};
