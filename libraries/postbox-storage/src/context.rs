use crate::{messages, users};
use async_trait::async_trait;
use postbox_core::{error::Result, types::*, Store};
use sqlx::SqlitePool;

/// `Store` implementation backed by a `SQLite` pool
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

#[async_trait]
impl Store for SqliteStore {
    async fn ping(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // Users
    async fn list_users(&self) -> Result<Vec<User>> {
        Ok(users::get_all(&self.pool).await?)
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        Ok(users::get_by_id(&self.pool, id).await?)
    }

    async fn create_user(&self, user: NewUser) -> Result<UserId> {
        Ok(users::create(&self.pool, user).await?)
    }

    async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<u64> {
        Ok(users::update(&self.pool, id, update).await?)
    }

    async fn delete_user(&self, id: UserId) -> Result<u64> {
        Ok(users::delete(&self.pool, id).await?)
    }

    // Messages
    async fn list_messages(&self) -> Result<Vec<Message>> {
        Ok(messages::get_all(&self.pool).await?)
    }

    async fn get_message(&self, id: MessageId) -> Result<Option<Message>> {
        Ok(messages::get_by_id(&self.pool, id).await?)
    }

    async fn create_message(&self, message: NewMessage) -> Result<MessageId> {
        Ok(messages::create(&self.pool, message).await?)
    }

    async fn delete_message(&self, id: MessageId) -> Result<u64> {
        Ok(messages::delete(&self.pool, id).await?)
    }
}
