//! Venueboard HTTP Server Binary
//!
//! Entry point for the dashboard REST API server. It initializes the
//! repository, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! # Run with the local (in-memory) repository (default)
//! cargo run --bin venueboard-server
//!
//! # Run against the hosted data API
//! REPOSITORY_BACKEND=remote DATA_API_URL=https://api.example.com \
//!   cargo run --bin venueboard-server --features remote-repo
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REPOSITORY_BACKEND`: `local` or `remote` (default: local)
//! - `DATA_API_URL` / `DATA_API_TOKEN`: hosted data API endpoint and token
//! - `REVENUE_PER_COVER` / `DISPATCH_WINDOW_MINUTES`: engine tunables
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use venueboard::config::EngineConfig;
use venueboard::db::{self, RepositoryKind};
use venueboard::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Venueboard HTTP Server");

    let kind = RepositoryKind::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let repository = db::build_repository(kind).map_err(|e| anyhow::anyhow!(e))?;
    info!(backend = ?kind, "Repository initialized");

    let config = EngineConfig::from_env();
    let state = AppState::new(repository, config);
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
