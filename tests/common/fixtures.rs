//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use dashboard_access::{DenialNotice, Navigator, Notifier, SessionState, SessionUser};
use std::sync::Mutex;

/// Factory for session states
pub struct SessionFactory;

impl SessionFactory {
    /// Signed-in user with the given role claim and a company
    pub fn with_role(role: &str) -> SessionState {
        SessionState::Authenticated(Self::user(role))
    }

    /// Signed-in guest that has not been assigned to a company
    pub fn guest_without_company() -> SessionState {
        let mut user = Self::user("GUEST");
        user.company_id = None;
        SessionState::Authenticated(user)
    }

    pub fn user(role: &str) -> SessionUser {
        SessionUser {
            id: format!("user-{}", role.to_lowercase()),
            name: "Test User".to_string(),
            email: format!("{}@example.com", role.to_lowercase()),
            role: role.to_string(),
            company_id: Some("company-1".to_string()),
        }
    }
}

/// Navigation event captured by [`RecordingNavigator`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEvent {
    Push(String),
    Cancel(String),
}

/// Navigator that records pushes and cancellations in order
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    events: Mutex<Vec<NavEvent>>,
}

impl RecordingNavigator {
    pub fn events(&self) -> Vec<NavEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn pushes(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                NavEvent::Push(path) => Some(path),
                NavEvent::Cancel(_) => None,
            })
            .collect()
    }
}

impl Navigator for RecordingNavigator {
    fn push(&self, path: &str) {
        self.events
            .lock()
            .unwrap()
            .push(NavEvent::Push(path.to_string()));
    }

    fn cancel(&self, path: &str) {
        self.events
            .lock()
            .unwrap()
            .push(NavEvent::Cancel(path.to_string()));
    }
}

/// Notifier that keeps every notice it was asked to show
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<DenialNotice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<DenialNotice> {
        self.notices.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &DenialNotice) {
        self.notices.lock().unwrap().push(notice.clone());
    }
}
