//! Access-control configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Route guard and dashboard gate defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Where denied route guards send the user
    #[serde(default = "default_landing_path")]
    pub landing_path: String,
    /// Where company-less guests are parked
    #[serde(default = "default_pending_company_path")]
    pub pending_company_path: String,
    /// Whether route guards notify on denial unless told otherwise
    #[serde(default = "default_true")]
    pub show_toast: bool,
    /// How long a denial notice stays visible
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            landing_path: default_landing_path(),
            pending_company_path: default_pending_company_path(),
            show_toast: true,
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl AccessConfig {
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}
