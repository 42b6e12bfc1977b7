//! HTTP API server

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::store::HistoryStore;

pub mod extract;
pub mod handlers;
pub mod state;

pub use state::AppState;

/// Build the API router using the provided application state.
///
/// Cross-origin requests are permitted from any origin.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health))
        .route("/api/get_history", get(handlers::get_history))
        .route("/api/add_history", post(handlers::add_history))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Convenience helper wiring a router straight from a store handle.
pub fn create_store_router(store: HistoryStore) -> Router {
    create_router(AppState::new(store))
}
