/// Core error types for Postbox
use thiserror::Error;

/// Result type alias using `PostboxError`
pub type Result<T> = std::result::Result<T, PostboxError>;

/// Core error type for Postbox
#[derive(Error, Debug)]
pub enum PostboxError {
    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl PostboxError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for PostboxError {
    fn from(err: sqlx::Error) -> Self {
        Self::Storage(err.to_string())
    }
}
