//! Role-Based Access Control (RBAC) system
//!
//! The permission catalog, the role-permission matrix and the decision
//! functions evaluated over it.

mod helpers;
mod permissions;
mod roles;
mod system;
mod types;

pub use helpers::PermissionContext;
pub use system::{check_detailed, evaluate, has_all_permissions, has_any_permission, has_permission};
pub use types::{Access, MatchMode, Permission, PermissionCheck, Requirement, Role};
