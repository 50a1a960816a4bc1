//! Route-level permission guard
//!
//! `RouteGuard` couples the pure decision in [`crate::auth::rbac::evaluate`]
//! with the notify-and-redirect effects. Effects fire only when the guard
//! enters `Denied`; observing the same denial again is a no-op.

use crate::auth::rbac::{Requirement, Role, check_detailed};
use crate::auth::session::{SessionSource, SessionState};
use crate::config::{AccessConfig, DEFAULT_LANDING_PATH, default_toast_duration_ms};
use crate::navigation;
use std::time::Duration;
use tracing::{debug, warn};

use super::effects::{DenialNotice, Navigator, Notifier};

/// Route guard options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGuardOptions {
    pub requirement: Requirement,
    pub redirect_to: String,
    pub show_toast: bool,
    pub toast_duration: Duration,
}

impl RouteGuardOptions {
    /// Options with the built-in defaults: redirect to the dashboard landing
    /// page and notify on denial
    pub fn new(requirement: impl Into<Requirement>) -> Self {
        Self {
            requirement: requirement.into(),
            redirect_to: DEFAULT_LANDING_PATH.to_string(),
            show_toast: true,
            toast_duration: Duration::from_millis(default_toast_duration_ms()),
        }
    }

    /// Options with defaults taken from configuration
    pub fn from_config(requirement: impl Into<Requirement>, config: &AccessConfig) -> Self {
        Self {
            requirement: requirement.into(),
            redirect_to: config.landing_path.clone(),
            show_toast: config.show_toast,
            toast_duration: config.toast_duration(),
        }
    }

    pub fn redirect_to(mut self, path: impl Into<String>) -> Self {
        self.redirect_to = path.into();
        self
    }

    pub fn show_toast(mut self, show: bool) -> Self {
        self.show_toast = show;
        self
    }

    pub fn toast_duration(mut self, duration: Duration) -> Self {
        self.toast_duration = duration;
        self
    }
}

/// Guard lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardPhase {
    /// The session role is not known yet
    Evaluating,
    Granted,
    Denied,
}

/// What the guarded route should display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GuardView {
    /// Neutral loading indicator; never the protected content
    Loading,
    /// The protected content
    Content,
}

/// Page-level guard with redirect-and-notify on denial
pub struct RouteGuard<N, R> {
    options: RouteGuardOptions,
    phase: GuardPhase,
    pending_redirect: Option<String>,
    notifier: N,
    navigator: R,
}

impl<N: Notifier, R: Navigator> RouteGuard<N, R> {
    pub fn new(options: RouteGuardOptions, notifier: N, navigator: R) -> Self {
        Self {
            options,
            phase: GuardPhase::Evaluating,
            pending_redirect: None,
            notifier,
            navigator,
        }
    }

    pub fn phase(&self) -> GuardPhase {
        self.phase
    }

    pub fn options(&self) -> &RouteGuardOptions {
        &self.options
    }

    /// Redirect scheduled by the last denial that has not settled yet
    pub fn pending_redirect(&self) -> Option<&str> {
        self.pending_redirect.as_deref()
    }

    /// Replace the requirement; the next observation re-evaluates it
    pub fn set_requirement(&mut self, requirement: impl Into<Requirement>) {
        self.options.requirement = requirement.into();
    }

    /// Re-evaluate against the latest session state
    ///
    /// Call on every render and on every session change.
    pub fn observe(&mut self, session: &SessionState) -> GuardView {
        let Some(role) = session.role() else {
            if self.phase != GuardPhase::Evaluating {
                debug!("Session reloading, route guard back to evaluating");
            }
            self.phase = GuardPhase::Evaluating;
            return GuardView::Loading;
        };

        let check = check_detailed(role, &self.options.requirement);
        if check.granted {
            self.enter_granted();
            GuardView::Content
        } else {
            if self.phase != GuardPhase::Denied {
                self.enter_denied(role, check.denial_reason.as_deref());
            }
            GuardView::Loading
        }
    }

    /// Observe the latest state published by `source`
    pub fn observe_source<S: SessionSource + ?Sized>(&mut self, source: &S) -> GuardView {
        self.observe(&source.snapshot())
    }

    /// Render `children` only when the guard grants access
    pub fn render<T>(&mut self, session: &SessionState, children: impl FnOnce() -> T) -> Option<T> {
        match self.observe(session) {
            GuardView::Content => Some(children()),
            GuardView::Loading => None,
        }
    }

    /// Mark the scheduled redirect as completed
    pub fn navigation_settled(&mut self) {
        self.pending_redirect = None;
    }

    fn enter_granted(&mut self) {
        if let Some(path) = self.pending_redirect.take() {
            debug!(redirect_to = %path, "Access granted before redirect settled, cancelling");
            self.navigator.cancel(&path);
        }
        self.phase = GuardPhase::Granted;
    }

    fn enter_denied(&mut self, role: Role, reason: Option<&str>) {
        self.phase = GuardPhase::Denied;

        let redirect_to = self.options.redirect_to.clone();
        if self.pending_redirect.as_deref() == Some(redirect_to.as_str()) {
            // Re-denied after a reload while the earlier redirect is in flight.
            debug!(%role, redirect_to = %redirect_to, "Redirect already pending");
            return;
        }
        warn!(
            %role,
            redirect_to = %redirect_to,
            reason = reason.unwrap_or("denied"),
            "Route access denied"
        );

        if navigation::is_reachable(role, &redirect_to) == Some(false) {
            warn!(
                %role,
                redirect_to = %redirect_to,
                "Redirect target is itself hidden from this role; possible redirect loop"
            );
        }

        if self.options.show_toast {
            let notice = DenialNotice::for_role(role, self.options.toast_duration);
            self.notifier.notify(&notice);
        }

        self.navigator.push(&redirect_to);
        self.pending_redirect = Some(redirect_to);
    }
}

impl<N, R> std::fmt::Debug for RouteGuard<N, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteGuard")
            .field("options", &self.options)
            .field("phase", &self.phase)
            .field("pending_redirect", &self.pending_redirect)
            .finish_non_exhaustive()
    }
}
