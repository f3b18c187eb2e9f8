//! Roman numeral HTTP server binary.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin roman-server
//!
//! # With a configuration file
//! ROMAN_CONFIG=backend/roman.toml cargo run --bin roman-server
//! ```
//!
//! # Environment Variables
//!
//! - `ROMAN_CONFIG`: Path to a TOML configuration file
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log filter (default: info)
//! - `LOG_FORMAT`: `text` or `json` (default: text)

use anyhow::Context;
use tracing::{info, warn};

use roman_numeral::config::ServerConfig;
use roman_numeral::http::{self, AppState};
use roman_numeral::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::load().context("Failed to load configuration")?;
    logging::init_logging(&config.logging)?;

    info!("Starting Roman numeral HTTP server");

    let addr = config.bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on http://{}", addr);
    info!("Metrics available at http://{}/metrics", addr);

    http::serve(listener, AppState::new(config), shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
