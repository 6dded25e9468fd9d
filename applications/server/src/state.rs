/// Shared application state
use roster_storage::MemoryRegistry;
use std::sync::Arc;

/// Application state shared across all handlers
///
/// The registry is injected here rather than living in a global, so tests
/// can build the router over any registry contents they like.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<MemoryRegistry>,
}

impl AppState {
    pub fn new(registry: Arc<MemoryRegistry>) -> Self {
        Self { registry }
    }
}
