/// Storage-specific errors
use thiserror::Error;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database error from `SQLx`
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// Filesystem error preparing the database location
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StorageError> for postbox_core::PostboxError {
    fn from(err: StorageError) -> Self {
        postbox_core::PostboxError::storage(err.to_string())
    }
}
