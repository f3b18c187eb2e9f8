//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::Metrics;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Conversion and request metrics
    pub metrics: Arc<Metrics>,
    /// Resolved server configuration
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// Create a new application state with a fresh metrics registry.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            metrics: Arc::new(Metrics::new()),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}
