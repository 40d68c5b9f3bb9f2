//! Error types shared across the Signdeck services

use sqlx::Error as SqlxError;
use sqlx::migrate::MigrateError;
use thiserror::Error;

/// Failures raised by the database layer
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Could not establish a connection to Postgres
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Schema migration failed on startup
    #[error("Database migration error: {0}")]
    Migration(#[source] MigrateError),

    /// Bad or missing configuration (DATABASE_URL and friends)
    #[error("Database configuration error: {0}")]
    Configuration(String),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
