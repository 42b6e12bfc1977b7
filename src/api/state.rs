//! API server state

use crate::store::HistoryStore;

/// State injected into every request handler.
#[derive(Clone)]
pub struct AppState {
    /// Handle to the relational store.
    pub store: HistoryStore,
}

impl AppState {
    pub fn new(store: HistoryStore) -> Self {
        Self { store }
    }
}
