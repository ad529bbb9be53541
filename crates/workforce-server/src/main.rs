//! # Workforce
//!
//! Serves the Employee and Company collections over HTTP.
//!
//! ```bash
//! RUST_LOG=info cargo run -- --bind 127.0.0.1:8080
//! ```

use anyhow::Context;
use clap::Parser;
use workforce_actor::tracing::setup_tracing;
use workforce_server::config::ServerConfig;
use workforce_server::http::{self, AppState};
use workforce_server::lifecycle::WorkforceSystem;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    // Setup tracing once for the entire application
    setup_tracing();

    let system = WorkforceSystem::new(config.buffer_size());
    let app = http::router(AppState::from_system(&system));

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!(addr = %config.bind, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    // The router (and its client clones) is gone; the actors can drain and stop.
    system.shutdown().await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
