//! Postbox Core
//!
//! Storage-agnostic domain types, the `Store` trait, and error handling
//! shared by the storage layer and the HTTP server.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `User`, `Message` and their create/update inputs
//! - **Store Trait**: async CRUD over users and messages
//! - **Error Handling**: Unified `PostboxError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use postbox_core::types::{NewMessage, TIMESTAMP_FORMAT};
//!
//! let message = NewMessage {
//!     content: "hi".to_string(),
//!     user_id: 1,
//!     send_to: 2,
//!     send_at: "2024-01-01 00:00:00".to_string(),
//! };
//! assert!(chrono::NaiveDateTime::parse_from_str(&message.send_at, TIMESTAMP_FORMAT).is_ok());
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{PostboxError, Result};
pub use store::Store;
pub use types::{Message, MessageId, NewMessage, NewUser, User, UserId, UserUpdate};
