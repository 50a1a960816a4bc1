//! Side-effect seams for route guards

use crate::auth::rbac::Role;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

/// User-visible explanation of a route denial
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DenialNotice {
    pub title: String,
    pub description: String,
    pub role: Role,
    pub duration_ms: u64,
}

impl DenialNotice {
    pub fn for_role(role: Role, duration: Duration) -> Self {
        Self {
            title: "Access denied".to_string(),
            description: format!(
                "Your role ({}) is not allowed to access this page.",
                role
            ),
            role,
            duration_ms: duration.as_millis().try_into().unwrap_or(u64::MAX),
        }
    }
}

/// Shows denial notices to the user
#[cfg_attr(test, mockall::automock)]
pub trait Notifier {
    fn notify(&self, notice: &DenialNotice);
}

/// Moves the user to another destination
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    /// Schedule navigation to `path`
    fn push(&self, path: &str);

    /// Withdraw a scheduled navigation to `path` that has not completed yet
    fn cancel(&self, path: &str);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, notice: &DenialNotice) {
        (**self).notify(notice)
    }
}

impl<T: Notifier + ?Sized> Notifier for Arc<T> {
    fn notify(&self, notice: &DenialNotice) {
        (**self).notify(notice)
    }
}

impl<T: Navigator + ?Sized> Navigator for &T {
    fn push(&self, path: &str) {
        (**self).push(path)
    }

    fn cancel(&self, path: &str) {
        (**self).cancel(path)
    }
}

impl<T: Navigator + ?Sized> Navigator for Arc<T> {
    fn push(&self, path: &str) {
        (**self).push(path)
    }

    fn cancel(&self, path: &str) {
        (**self).cancel(path)
    }
}
