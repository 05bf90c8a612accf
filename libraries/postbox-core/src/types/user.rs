/// User domain type
use serde::{Deserialize, Serialize};

use super::UserId;

/// User account
///
/// `password` always holds a bcrypt hash. It is never serialized, so the
/// hash cannot leak through an API response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct User {
    /// Unique user identifier
    pub id: UserId,

    /// Login name
    pub username: String,

    /// Contact address
    pub email: String,

    /// Password hash
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Free-form role tag (e.g. "user", "admin")
    pub role: String,

    /// Creation timestamp (`TIMESTAMP_FORMAT`)
    pub created_at: String,

    /// Last modification timestamp (`TIMESTAMP_FORMAT`)
    pub updated_at: String,
}

/// Input for inserting a user; the password is already hashed
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

/// Input for updating a user
///
/// When `password_hash` is `None` the stored hash is left untouched.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub role: String,
}
