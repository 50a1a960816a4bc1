//! Configuration data models

pub mod access;
pub mod server;
pub mod session;

pub use access::*;
pub use server::*;
pub use session::*;

/// Landing page every role can reach
pub const DEFAULT_LANDING_PATH: &str = "/intern/dashboard";

/// Page company-less guests are parked on
pub const DEFAULT_PENDING_COMPANY_PATH: &str = "/intern/pending-company";

/// Default values for configuration
pub fn default_landing_path() -> String {
    DEFAULT_LANDING_PATH.to_string()
}

pub fn default_pending_company_path() -> String {
    DEFAULT_PENDING_COMPANY_PATH.to_string()
}

pub fn default_toast_duration_ms() -> u64 {
    4000
}

pub fn default_true() -> bool {
    true
}

pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_port() -> u16 {
    8080
}
