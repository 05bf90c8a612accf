//! User queries

use crate::StorageError;
use postbox_core::types::{now_timestamp, NewUser, User, UserId, UserUpdate};
use sqlx::SqlitePool;

type Result<T> = std::result::Result<T, StorageError>;

/// Get all users
pub async fn get_all(pool: &SqlitePool) -> Result<Vec<User>> {
    let users = sqlx::query_as::<_, User>(
        "SELECT id, username, email, password, role, created_at, updated_at
         FROM user ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(users)
}

/// Get a user by ID
pub async fn get_by_id(pool: &SqlitePool, id: UserId) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, username, email, password, role, created_at, updated_at
         FROM user WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// Insert a user
///
/// # Arguments
///
/// * `pool` - Database connection pool
/// * `user` - Account fields; `password_hash` must already be hashed
///
/// # Returns
///
/// The generated user ID
pub async fn create(pool: &SqlitePool, user: NewUser) -> Result<UserId> {
    let now = now_timestamp();

    let result = sqlx::query(
        "INSERT INTO user (username, email, password, role, updated_at, created_at)
         VALUES (?, ?, ?, ?, ?, ?)",
    )
    .bind(&user.username)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(&user.role)
    .bind(&now)
    .bind(&now)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Update a user's profile, and its password hash when one is given
///
/// Returns the number of rows affected.
pub async fn update(pool: &SqlitePool, id: UserId, update: UserUpdate) -> Result<u64> {
    let now = now_timestamp();

    let result = match update.password_hash {
        Some(password_hash) => {
            sqlx::query(
                "UPDATE user SET username = ?, email = ?, password = ?, role = ?, updated_at = ?
                 WHERE id = ?",
            )
            .bind(&update.username)
            .bind(&update.email)
            .bind(password_hash)
            .bind(&update.role)
            .bind(&now)
            .bind(id)
            .execute(pool)
            .await?
        }
        None => {
            sqlx::query(
                "UPDATE user SET username = ?, email = ?, role = ?, updated_at = ?
                 WHERE id = ?",
            )
            .bind(&update.username)
            .bind(&update.email)
            .bind(&update.role)
            .bind(&now)
            .bind(id)
            .execute(pool)
            .await?
        }
    };

    Ok(result.rows_affected())
}

/// Delete a user, returning the number of rows affected
pub async fn delete(pool: &SqlitePool, id: UserId) -> Result<u64> {
    let result = sqlx::query("DELETE FROM user WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
