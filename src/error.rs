//! Error types for maskcalc.

use thiserror::Error;

/// Common error type for maskcalc.
#[derive(Error, Debug)]
pub enum MaskcalcError {
    /// Database error.
    ///
    /// Wraps errors from any credential-store backend; sqlx errors are
    /// converted automatically.
    #[error("database error: {0}")]
    Database(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Authentication error.
    #[error("authentication error: {0}")]
    Auth(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

// Conversion from sqlx errors
impl From<sqlx::Error> for MaskcalcError {
    fn from(e: sqlx::Error) -> Self {
        MaskcalcError::Database(e.to_string())
    }
}

/// Result type alias for maskcalc operations.
pub type Result<T> = std::result::Result<T, MaskcalcError>;
