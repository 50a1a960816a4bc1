//! Configuration validation

use super::models::*;
use crate::auth::rbac::Role;
use crate::navigation;
use tracing::{debug, warn};

/// Validation trait for configuration structures
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

fn validate_path(name: &str, path: &str) -> Result<(), String> {
    if !path.starts_with('/') {
        return Err(format!("{} must be an absolute path, got '{}'", name, path));
    }
    if path.contains("://") || path.starts_with("//") {
        return Err(format!("{} must be a local path, got '{}'", name, path));
    }
    Ok(())
}

impl Validate for AccessConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating access configuration");

        validate_path("landing_path", &self.landing_path)?;
        validate_path("pending_company_path", &self.pending_company_path)?;

        if self.toast_duration_ms == 0 {
            return Err("toast_duration_ms must be greater than 0".to_string());
        }

        // A denied route guard redirects to the landing path. If some role
        // could not see it either, that role would bounce between guards.
        match navigation::find_entry(&self.landing_path) {
            Some(entry) => {
                let blocked: Vec<&str> = Role::ALL
                    .iter()
                    .filter(|role| {
                        !crate::auth::rbac::has_all_permissions(**role, entry.required_permissions)
                    })
                    .map(Role::as_str)
                    .collect();
                if !blocked.is_empty() {
                    return Err(format!(
                        "landing_path '{}' is not reachable by roles: {}",
                        self.landing_path,
                        blocked.join(", ")
                    ));
                }
            }
            None => warn!(
                landing_path = %self.landing_path,
                "Landing path is not in the navigation table; reachability cannot be verified"
            ),
        }

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }
        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.workers == Some(0) {
            return Err("Server workers must be greater than 0".to_string());
        }
        Ok(())
    }
}

impl Validate for SessionHeaderConfig {
    fn validate(&self) -> Result<(), String> {
        for name in self.names() {
            if name.is_empty() {
                return Err("Session header names cannot be empty".to_string());
            }
            if actix_web::http::header::HeaderName::from_bytes(name.as_bytes()).is_err() {
                return Err(format!("Invalid session header name '{}'", name));
            }
        }
        Ok(())
    }
}
