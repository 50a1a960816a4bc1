//! Decision functions over the role-permission matrix
//!
//! These are the only functions that inspect the matrix. Guards, the
//! navigation filter and the HTTP layer all route their checks through here.

use tracing::debug;

use super::types::{Access, MatchMode, Permission, PermissionCheck, Requirement, Role};

/// Check whether `role` holds `permission`
pub fn has_permission(role: Role, permission: Permission) -> bool {
    role.permissions().contains(&permission)
}

/// Check whether `role` holds every permission in `permissions`
///
/// An empty list is vacuously satisfied.
pub fn has_all_permissions(role: Role, permissions: &[Permission]) -> bool {
    permissions.iter().all(|p| has_permission(role, *p))
}

/// Check whether `role` holds at least one permission in `permissions`
///
/// An empty list is never satisfied.
pub fn has_any_permission(role: Role, permissions: &[Permission]) -> bool {
    permissions.iter().any(|p| has_permission(role, *p))
}

/// Evaluate a guard requirement against `role`
pub fn evaluate(role: Role, requirement: &Requirement) -> Access {
    let granted = match requirement {
        Requirement::Single(permission) => has_permission(role, *permission),
        Requirement::List {
            permissions,
            mode: MatchMode::All,
        } => has_all_permissions(role, permissions),
        Requirement::List {
            permissions,
            mode: MatchMode::Any,
        } => has_any_permission(role, permissions),
    };

    debug!(%role, ?requirement, granted, "Evaluated access requirement");
    Access::from(granted)
}

/// Detailed permission check
pub fn check_detailed(role: Role, requirement: &Requirement) -> PermissionCheck {
    let granted = evaluate(role, requirement).is_granted();
    let missing: Vec<Permission> = requirement
        .permissions()
        .iter()
        .copied()
        .filter(|p| !has_permission(role, *p))
        .collect();

    let denial_reason = if granted {
        None
    } else if missing.is_empty() {
        // Only reachable through an empty any-of list.
        Some("No permissions were offered to satisfy an any-of requirement".to_string())
    } else {
        let names: Vec<&str> = missing.iter().map(Permission::as_str).collect();
        Some(match requirement.mode() {
            MatchMode::All => format!("Missing permission: {}", names.join(", ")),
            MatchMode::Any => format!("Requires any of: {}", names.join(", ")),
        })
    };

    PermissionCheck {
        granted,
        role,
        mode: requirement.mode(),
        missing,
        denial_reason,
    }
}

impl Requirement {
    /// Require a single permission
    pub fn single(permission: Permission) -> Self {
        Requirement::Single(permission)
    }

    /// Require every listed permission
    pub fn all<I: IntoIterator<Item = Permission>>(permissions: I) -> Self {
        Requirement::List {
            permissions: permissions.into_iter().collect(),
            mode: MatchMode::All,
        }
    }

    /// Require at least one listed permission
    pub fn any<I: IntoIterator<Item = Permission>>(permissions: I) -> Self {
        Requirement::List {
            permissions: permissions.into_iter().collect(),
            mode: MatchMode::Any,
        }
    }

    /// Build a list requirement, choosing AND when `require_all` is set
    pub fn list<I: IntoIterator<Item = Permission>>(permissions: I, require_all: bool) -> Self {
        if require_all {
            Self::all(permissions)
        } else {
            Self::any(permissions)
        }
    }

    /// Permissions referenced by this requirement, in declared order
    pub fn permissions(&self) -> &[Permission] {
        match self {
            Requirement::Single(permission) => std::slice::from_ref(permission),
            Requirement::List { permissions, .. } => permissions,
        }
    }

    /// Combination mode; a single permission behaves as AND
    pub fn mode(&self) -> MatchMode {
        match self {
            Requirement::Single(_) => MatchMode::All,
            Requirement::List { mode, .. } => *mode,
        }
    }

    pub fn evaluate(&self, role: Role) -> Access {
        evaluate(role, self)
    }
}

impl From<Permission> for Requirement {
    fn from(permission: Permission) -> Self {
        Requirement::Single(permission)
    }
}

impl From<Vec<Permission>> for Requirement {
    fn from(permissions: Vec<Permission>) -> Self {
        Requirement::all(permissions)
    }
}

impl<const N: usize> From<[Permission; N]> for Requirement {
    fn from(permissions: [Permission; N]) -> Self {
        Requirement::all(permissions)
    }
}
