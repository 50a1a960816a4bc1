//! Element-level permission guard

use crate::auth::rbac::{Requirement, evaluate};
use crate::auth::session::SessionState;

/// Conditionally renders a fragment of UI
///
/// Evaluated from the session on every call. Denial is silent: the guard
/// renders the fallback (or nothing) and never navigates or notifies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGuard {
    requirement: Requirement,
}

impl PermissionGuard {
    pub fn new(requirement: impl Into<Requirement>) -> Self {
        Self {
            requirement: requirement.into(),
        }
    }

    pub fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    /// Whether the session's current role satisfies the requirement
    pub fn allows(&self, session: &SessionState) -> bool {
        evaluate(session.effective_role(), &self.requirement).is_granted()
    }

    /// Render `children` when allowed, `fallback` otherwise
    pub fn render<T>(
        &self,
        session: &SessionState,
        children: impl FnOnce() -> T,
        fallback: impl FnOnce() -> T,
    ) -> T {
        if self.allows(session) {
            children()
        } else {
            fallback()
        }
    }

    /// Render `children` when allowed, nothing otherwise
    pub fn render_or_empty<T>(
        &self,
        session: &SessionState,
        children: impl FnOnce() -> T,
    ) -> Option<T> {
        self.allows(session).then(children)
    }
}
