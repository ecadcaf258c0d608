/// Core error types for Serenity
use thiserror::Error;

/// Result type alias using `SerenityError`
pub type Result<T> = std::result::Result<T, SerenityError>;

/// Core error type for Serenity
#[derive(Error, Debug)]
pub enum SerenityError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Duplicate entry
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Database errors (for storage implementations)
    #[error("Database error: {0}")]
    Database(String),
}

impl SerenityError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for SerenityError {
    fn from(err: sqlx::Error) -> Self {
        Self::Database(err.to_string())
    }
}
