//! Dashboard shell gate for company-less guests

use crate::auth::session::{SessionState, SessionUser};
use crate::config::AccessConfig;

/// What the dashboard shell should do for the current session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardDecision {
    /// Session still resolving; show the loading indicator
    Loading,
    /// Render nothing and navigate to the given path
    Redirect(String),
    /// Render the dashboard
    Render,
}

/// Keeps guests that have no company out of the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardGate {
    landing_path: String,
    pending_company_path: String,
}

impl DashboardGate {
    pub fn new(config: &AccessConfig) -> Self {
        Self {
            landing_path: config.landing_path.clone(),
            pending_company_path: config.pending_company_path.clone(),
        }
    }

    pub fn decide(&self, session: &SessionState) -> DashboardDecision {
        match session {
            SessionState::Loading => DashboardDecision::Loading,
            SessionState::Authenticated(user) if user.is_guest_without_company() => {
                DashboardDecision::Redirect(self.pending_company_path.clone())
            }
            _ => DashboardDecision::Render,
        }
    }

    /// Correct the user's location after their profile was (re)loaded
    ///
    /// A company-less guest anywhere but the pending page goes there; anyone
    /// else still on the pending page goes to the landing page.
    pub fn status_redirect(&self, user: &SessionUser, current_path: &str) -> Option<&str> {
        let on_pending_page = current_path == self.pending_company_path;
        match (user.is_guest_without_company(), on_pending_page) {
            (true, false) => Some(&self.pending_company_path),
            (false, true) => Some(&self.landing_path),
            _ => None,
        }
    }
}

impl Default for DashboardGate {
    fn default() -> Self {
        Self::new(&AccessConfig::default())
    }
}
