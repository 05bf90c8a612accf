//! Message queries

use crate::StorageError;
use postbox_core::types::{now_timestamp, Message, MessageId, NewMessage};
use sqlx::SqlitePool;

type Result<T> = std::result::Result<T, StorageError>;

/// Get all messages
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<Message>> {
    let messages = sqlx::query_as::<_, Message>(
        "SELECT id, content, user_id, send_to, send_at, created_at, updated_at
         FROM message ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(messages)
}

/// Get a message by ID
pub async fn get_by_id(pool: &SqlitePool, id: MessageId) -> Result<Option<Message>> {
    let message = sqlx::query_as::<_, Message>(
        "SELECT id, content, user_id, send_to, send_at, created_at, updated_at
         FROM message WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(message)
}

/// Insert a message, returning the generated ID
pub async fn create(pool: &SqlitePool, message: NewMessage) -> Result<MessageId> {
    let now = now_timestamp();

    let result = sqlx::query(
        "INSERT INTO message (content, user_id, send_to, send_at, updated_at, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&message.content)
    .bind(message.user_id)
    .bind(message.send_to)
    .bind(&message.send_at)
    .bind(&now)
    .bind(&now)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Delete a message, returning the number of rows affected
pub async fn delete(pool: &SqlitePool, id: MessageId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM message WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
