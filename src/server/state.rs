//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::guard::DashboardGate;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Everything here is read-only after startup. Sessions are resolved per
/// request, so no per-user state lives in the application.
#[derive(Clone)]
pub struct AppState {
    /// Configuration (shared read-only)
    pub config: Arc<Config>,
    /// Company-status gate built from the access section
    pub dashboard: Arc<DashboardGate>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let dashboard = DashboardGate::new(&config.access);
        Self {
            config: Arc::new(config),
            dashboard: Arc::new(dashboard),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
