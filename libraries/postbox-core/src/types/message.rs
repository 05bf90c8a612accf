/// Message domain type
use serde::{Deserialize, Serialize};

use super::{MessageId, UserId};

/// A message sent by one user to a recipient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx-support", derive(sqlx::FromRow))]
pub struct Message {
    pub id: MessageId,

    pub content: String,

    /// Sender
    pub user_id: UserId,

    /// Recipient identifier
    pub send_to: i64,

    /// Caller-supplied send time (`TIMESTAMP_FORMAT`)
    pub send_at: String,

    pub created_at: String,

    pub updated_at: String,
}

/// Input for inserting a message
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub content: String,
    pub user_id: UserId,
    pub send_to: i64,
    pub send_at: String,
}
