/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Unique constraint violated (duplicate email)
    #[error("Duplicate entry: {0}")]
    Duplicate(String),

    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl StorageError {
    /// Whether the underlying database error is a unique constraint violation
    pub fn is_unique_violation(err: &sqlx::Error) -> bool {
        matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
    }
}

impl From<StorageError> for serenity_core::SerenityError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Duplicate(msg) => serenity_core::SerenityError::Duplicate(msg),
            other => serenity_core::SerenityError::storage(other.to_string()),
        }
    }
}
