//! Error types for dashboard access control

use thiserror::Error;

/// Result type alias for dashboard access control
pub type Result<T> = std::result::Result<T, AccessError>;

/// Main error type for dashboard access control
///
/// Decisions themselves never fail: an unrecognised role resolves to the
/// guest set and missing permissions simply deny. These variants cover the
/// boundaries where untyped input enters the crate (config files, CLI
/// arguments, query strings).
#[derive(Error, Debug)]
pub enum AccessError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A permission identifier outside the catalog
    #[error("Unknown permission: {0}")]
    UnknownPermission(String),

    /// A role name outside the closed role set
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AccessError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}
