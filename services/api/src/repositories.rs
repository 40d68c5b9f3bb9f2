//! Repositories for database operations

pub mod deck;
pub mod flashcard;
pub mod session;
pub mod user;

pub use deck::DeckRepository;
pub use flashcard::FlashcardRepository;
pub use session::SessionRepository;
pub use user::UserRepository;
