//! Signdeck flashcard backend
//!
//! Session-authenticated CRUD over decks and flashcards, with per-user
//! study preferences, on Postgres. Exposed as a library so integration
//! tests can drive the router directly.

pub mod auth;
pub mod color;
pub mod error;
pub mod middleware;
pub mod models;
pub mod reconcile;
pub mod repositories;
pub mod routes;
pub mod state;
pub mod validation;

/// Embedded schema migrations, applied at startup
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
