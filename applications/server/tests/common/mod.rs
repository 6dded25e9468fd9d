/// Common test utilities and fixtures
use axum::Router;
use roster_server::api;
use roster_server::state::AppState;
use roster_storage::MemoryRegistry;
use std::sync::Arc;

/// Build the application router over a freshly seeded registry
///
/// This is the exact router and startup state the binary serves.
pub fn create_test_app() -> Router {
    api::router(AppState::new(Arc::new(MemoryRegistry::seeded())))
}

/// Build the application router over an empty registry
pub fn create_empty_app() -> Router {
    api::router(AppState::new(Arc::new(MemoryRegistry::new())))
}
