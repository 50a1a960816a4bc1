//! Server builder and run_server function

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{AccessError, Result};
use std::path::Path;
use tracing::{info, warn};

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| AccessError::config("Configuration is required"))?;

        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load configuration and serve until shutdown
///
/// Environment overrides are layered over the file before validation. A
/// missing file falls back to defaults plus environment overrides; a file
/// that exists but fails to parse or validate is an error.
pub async fn run_server(config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) if path.exists() => {
            info!(path = %path.display(), "Loading configuration file");
            Config::load(path).await?
        }
        Some(path) => {
            warn!(path = %path.display(), "Configuration file not found, using defaults");
            Config::from_env()?
        }
        None => Config::from_env()?,
    };

    let server = ServerBuilder::new().with_config(config).build()?;
    info!("Server starting at: http://{}", server.config().address());
    info!("   GET  /health");
    info!("   GET  /api/access/me | navigation | check | matrix");
    info!("   GET  /api/admin/config (system.admin)");

    server.start().await
}
