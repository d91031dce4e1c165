//! Application state for the HTTP server.

use std::sync::Arc;

use crate::store::RecordStore;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// The dataset, loaded once at startup and shared read-only
    pub store: Arc<RecordStore>,
}

impl AppState {
    /// Create a new application state with the given record store.
    pub fn new(store: Arc<RecordStore>) -> Self {
        Self { store }
    }
}
