/// Shared application state
use crate::services::PasswordService;
use postbox_core::Store;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub passwords: PasswordService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, passwords: PasswordService) -> Self {
        Self { store, passwords }
    }
}
