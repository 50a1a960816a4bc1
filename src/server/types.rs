//! Response payloads for the HTTP surface

use crate::auth::rbac::{Permission, Role};
use crate::auth::session::SessionUser;
use crate::guard::DashboardDecision;
use serde::Serialize;
use std::borrow::Cow;

/// Standard API response structure
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request was successful
    pub success: bool,
    /// Response data (if successful)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error message (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

/// Health status payload
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: Cow<'static, str>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub version: Cow<'static, str>,
}

/// The caller's resolved identity and what it may do
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessProfile {
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
    pub permissions: &'static [Permission],
    /// Where the dashboard shell sends this session, if anywhere
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

impl AccessProfile {
    pub fn new(role: Role, user: Option<SessionUser>, decision: DashboardDecision) -> Self {
        let redirect = match decision {
            DashboardDecision::Redirect(path) => Some(path),
            DashboardDecision::Loading | DashboardDecision::Render => None,
        };
        Self {
            role,
            user,
            permissions: role.permissions(),
            redirect,
        }
    }
}

/// One row of the role matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MatrixRow {
    pub role: Role,
    pub permissions: &'static [Permission],
}

impl MatrixRow {
    /// The full matrix in role order
    pub fn all() -> Vec<MatrixRow> {
        Role::ALL
            .iter()
            .map(|&role| MatrixRow {
                role,
                permissions: role.permissions(),
            })
            .collect()
    }
}
