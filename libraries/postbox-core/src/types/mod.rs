/// Domain types for Postbox
mod message;
mod user;

pub use message::{Message, NewMessage};
pub use user::{NewUser, User, UserUpdate};

/// User identifier (autoincrement row id)
pub type UserId = i64;

/// Message identifier (autoincrement row id)
pub type MessageId = i64;

/// Storage format for every timestamp column (UTC, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current UTC time in `TIMESTAMP_FORMAT`
pub fn now_timestamp() -> String {
    chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Check that a caller-supplied timestamp matches `TIMESTAMP_FORMAT`
pub fn is_valid_timestamp(value: &str) -> bool {
    chrono::NaiveDateTime::parse_from_str(value, TIMESTAMP_FORMAT).is_ok()
}
