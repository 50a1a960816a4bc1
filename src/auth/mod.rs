//! Authorization for the dashboard
//!
//! `rbac` holds the static permission model; `session` describes the
//! snapshots the authentication service hands to it.

pub mod rbac;
pub mod session;

pub use rbac::{
    Access, MatchMode, Permission, PermissionCheck, PermissionContext, Requirement, Role,
    check_detailed, evaluate, has_all_permissions, has_any_permission, has_permission,
};
pub use session::{SessionSource, SessionState, SessionUser, SharedSession};
