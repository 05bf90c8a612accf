//! Postbox Storage
//!
//! `SQLite` database layer for Postbox.
//!
//! # Architecture
//!
//! - **Vertical Slicing**: Each table owns its own queries (`users`, `messages`)
//! - **Injected Pool**: `SqliteStore` wraps a `SqlitePool` and implements
//!   `postbox_core::Store`, so handlers never touch a global connection
//!
//! # Example
//!
//! ```rust,no_run
//! use postbox_storage::{create_pool, init_schema, SqliteStore};
//! use postbox_core::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pool = create_pool("sqlite://postbox.db").await?;
//! init_schema(&pool).await?;
//!
//! let store = SqliteStore::new(pool);
//! let users = store.list_users().await?;
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod messages;
pub mod users;

pub use context::SqliteStore;
pub use error::StorageError;

use sqlx::sqlite::SqlitePool;

/// Create both tables if they do not exist yet
///
/// This is a bootstrap for fresh databases, not a migration runner: an
/// existing table is never altered.
///
/// # Errors
///
/// Returns an error if a DDL statement fails
pub async fn init_schema(pool: &SqlitePool) -> Result<(), StorageError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS user (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL,
            email TEXT NOT NULL,
            password TEXT NOT NULL,
            role TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    // user_id is deliberately not a foreign key: messages may outlive or
    // predate their sender row.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS message (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            content TEXT NOT NULL,
            user_id INTEGER NOT NULL,
            send_to INTEGER NOT NULL,
            send_at TEXT NOT NULL,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    tracing::debug!("Schema ready");
    Ok(())
}

/// Create a new `SQLite` pool
///
/// # Arguments
///
/// * `database_url` - `SQLite` connection string (e.g., `<sqlite://postbox.db>`)
///
/// # Errors
///
/// Returns an error if the database directory cannot be created or the
/// connection fails
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, StorageError> {
    use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
    use std::str::FromStr;

    tracing::debug!("Creating pool with URL: {}", database_url);

    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(std::time::Duration::from_secs(30));

    // `create_if_missing` makes the file but not its directory
    if let Some(dir) = options.get_filename().parent() {
        if !dir.as_os_str().is_empty() {
            tokio::fs::create_dir_all(dir).await?;
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    tracing::debug!("Pool created");

    Ok(pool)
}
