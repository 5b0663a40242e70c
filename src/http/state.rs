//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::db::VenueRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository over the hosted data API
    pub repository: Arc<dyn VenueRepository>,
    /// Engine tunables (revenue placeholder, dispatch window)
    pub config: EngineConfig,
}

impl AppState {
    /// Create a new application state with the given repository and config.
    pub fn new(repository: Arc<dyn VenueRepository>, config: EngineConfig) -> Self {
        Self { repository, config }
    }
}
