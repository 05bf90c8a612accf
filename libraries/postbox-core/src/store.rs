//! Storage trait for users and messages

use crate::error::Result;
use crate::types::{Message, MessageId, NewMessage, NewUser, User, UserId, UserUpdate};
use async_trait::async_trait;

/// Async access to the `user` and `message` tables
///
/// Every write method that targets an existing row returns the number of
/// rows affected, so callers can tell "not found" apart from success.
#[async_trait]
pub trait Store: Send + Sync {
    /// Check that the backing database answers
    async fn ping(&self) -> Result<()>;

    // ========================================================================
    // Users
    // ========================================================================

    /// Get all users
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Get user by ID
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Insert a user, returning the generated ID
    async fn create_user(&self, user: NewUser) -> Result<UserId>;

    /// Update a user, returning rows affected
    async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<u64>;

    /// Delete a user, returning rows affected
    async fn delete_user(&self, id: UserId) -> Result<u64>;

    // ========================================================================
    // Messages
    // ========================================================================

    /// Get all messages
    async fn list_messages(&self) -> Result<Vec<Message>>;

    /// Get message by ID
    async fn get_message(&self, id: MessageId) -> Result<Option<Message>>;

    /// Insert a message, returning the generated ID
    async fn create_message(&self, message: NewMessage) -> Result<MessageId>;

    /// Delete a message, returning rows affected
    async fn delete_message(&self, id: MessageId) -> Result<u64>;
}
