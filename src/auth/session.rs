//! Session snapshots consumed by the access layer
//!
//! Login, token storage and logout belong to the authentication service. This
//! module only models what that service publishes: whether a session is still
//! being resolved, and who the user is once it is.

use arc_swap::ArcSwap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::rbac::Role;

/// Authenticated dashboard user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Raw role claim as issued by the backend
    pub role: String,
    #[serde(default)]
    pub company_id: Option<String>,
}

impl SessionUser {
    /// Role claim resolved against the closed role set
    pub fn role(&self) -> Role {
        Role::resolve(Some(&self.role))
    }

    /// Whether the user has been assigned to a company
    pub fn has_company(&self) -> bool {
        self.company_id.as_deref().is_some_and(|id| !id.is_empty())
    }

    /// Guests are parked on the pending-company page until an admin assigns
    /// them to a company
    pub fn is_guest_without_company(&self) -> bool {
        self.role() == Role::Guest && !self.has_company()
    }
}

/// Point-in-time view of the current session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "status", content = "user", rename_all = "snake_case")]
pub enum SessionState {
    /// The session has not been resolved yet
    #[default]
    Loading,
    /// Resolved, nobody is signed in
    Anonymous,
    /// Resolved to a signed-in user
    Authenticated(SessionUser),
}

impl SessionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SessionState::Loading)
    }

    pub fn user(&self) -> Option<&SessionUser> {
        match self {
            SessionState::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Role known for this session, or `None` while still loading
    pub fn role(&self) -> Option<Role> {
        match self {
            SessionState::Loading => None,
            SessionState::Anonymous => Some(Role::Guest),
            SessionState::Authenticated(user) => Some(user.role()),
        }
    }

    /// Role to evaluate against when a decision cannot wait for loading
    pub fn effective_role(&self) -> Role {
        self.role().unwrap_or_default()
    }
}

/// Source of the current session
///
/// Implementations must return the latest known state on every call; access
/// decisions are re-derived from each snapshot and never cached.
pub trait SessionSource: Send + Sync {
    fn snapshot(&self) -> SessionState;
}

impl SessionSource for SessionState {
    fn snapshot(&self) -> SessionState {
        self.clone()
    }
}

/// Single-writer, multi-reader session cell
///
/// The authentication service publishes new states (login, logout, company
/// assignment); any number of guards read concurrently without locking.
#[derive(Debug, Default)]
pub struct SharedSession {
    state: ArcSwap<SessionState>,
}

impl SharedSession {
    pub fn new(initial: SessionState) -> Self {
        Self {
            state: ArcSwap::from_pointee(initial),
        }
    }

    /// Replace the current state
    pub fn publish(&self, state: SessionState) {
        self.state.store(Arc::new(state));
    }
}

impl SessionSource for SharedSession {
    fn snapshot(&self) -> SessionState {
        self.state.load().as_ref().clone()
    }
}

impl<T: SessionSource + ?Sized> SessionSource for Arc<T> {
    fn snapshot(&self) -> SessionState {
        (**self).snapshot()
    }
}
