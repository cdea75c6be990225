//! Error types for the executor.

use thiserror::Error;

/// Executor errors.
///
/// Backend failures pass through untranslated; the executor performs no
/// local recovery or retry.
#[derive(Debug, Error)]
pub enum DbError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Configured backend name matches no known dialect.
    #[error("unknown backend: {0}")]
    UnknownBackend(String),
}

/// Result type alias for executor operations.
pub type Result<T> = std::result::Result<T, DbError>;
