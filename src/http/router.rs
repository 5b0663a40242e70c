//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        .route("/calendar/overview", get(handlers::calendar_overview))
        .route("/calendar/{date}/status", get(handlers::day_status))
        .route("/campaigns/schedule", get(handlers::campaign_schedule))
        .route(
            "/analytics/business-summary",
            get(handlers::business_summary),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(all(test, feature = "local-repo"))]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::db::LocalRepository;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo = Arc::new(LocalRepository::new()) as Arc<dyn crate::db::VenueRepository>;
        let state = AppState::new(repo, EngineConfig::default());
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
