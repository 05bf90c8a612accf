//! Postbox Server Library
//!
//! HTTP API over users and messages with bcrypt credential checks.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use services::PasswordService;
pub use state::AppState;
