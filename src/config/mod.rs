//! Configuration management
//!
//! Loading, environment overrides and validation for the access service.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{AccessError, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub access: AccessConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub session: SessionHeaderConfig,
}

impl Config {
    /// Load and validate a configuration file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = Self::read_file(path.as_ref()).await?;
        let config = Self::from_yaml(&content)?;
        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load a file, layer `DASHBOARD_ACCESS_*` variables over it, then validate
    ///
    /// An invalid file value that an environment variable overrides is
    /// accepted.
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = Self::read_file(path.as_ref()).await?;
        let config = Self::from_yaml_layered(&content, |key| env::var(key).ok())?;
        debug!("Configuration loaded with environment overrides");
        Ok(config)
    }

    async fn read_file(path: &Path) -> Result<String> {
        info!("Loading configuration from: {:?}", path);
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| AccessError::Config(format!("Failed to read config file: {}", e)))
    }

    /// Parse and validate a YAML document
    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a YAML document, apply overrides from `lookup`, validate once
    pub fn from_yaml_layered<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = serde_yaml::from_str(content)?;
        config.apply_overrides(lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables on top of the defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut config = Self::default();
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields from `DASHBOARD_ACCESS_*` variables
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| env::var(key).ok())
    }

    /// Override fields from `DASHBOARD_ACCESS_*` keys resolved by `lookup`
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup("DASHBOARD_ACCESS_LANDING_PATH") {
            self.access.landing_path = path;
        }
        if let Some(path) = lookup("DASHBOARD_ACCESS_PENDING_COMPANY_PATH") {
            self.access.pending_company_path = path;
        }
        if let Some(flag) = lookup("DASHBOARD_ACCESS_SHOW_TOAST") {
            self.access.show_toast = flag
                .parse()
                .map_err(|e| AccessError::Config(format!("Invalid show_toast flag: {}", e)))?;
        }
        if let Some(ms) = lookup("DASHBOARD_ACCESS_TOAST_DURATION_MS") {
            self.access.toast_duration_ms = ms
                .parse()
                .map_err(|e| AccessError::Config(format!("Invalid toast duration: {}", e)))?;
        }
        if let Some(host) = lookup("DASHBOARD_ACCESS_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("DASHBOARD_ACCESS_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| AccessError::Config(format!("Invalid port: {}", e)))?;
        }
        if let Some(workers) = lookup("DASHBOARD_ACCESS_WORKERS") {
            self.server.workers = Some(
                workers
                    .parse()
                    .map_err(|e| AccessError::Config(format!("Invalid workers count: {}", e)))?,
            );
        }
        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.access
            .validate()
            .map_err(|e| AccessError::Config(format!("Access config error: {}", e)))?;
        self.server
            .validate()
            .map_err(|e| AccessError::Config(format!("Server config error: {}", e)))?;
        self.session
            .validate()
            .map_err(|e| AccessError::Config(format!("Session config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Serialize configuration back to YAML
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}
