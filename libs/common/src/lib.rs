//! Common library for the Signdeck backend
//!
//! Shared infrastructure used by the Signdeck services: Postgres
//! connectivity and pooling, plus the error types that wrap database
//! failures.

pub mod database;
pub mod error;
