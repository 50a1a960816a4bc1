//! Enforcement points over the permission model
//!
//! - [`PermissionGuard`]: element-level, silent on denial
//! - [`RouteGuard`]: page-level, notifies and redirects on denial
//! - [`DashboardGate`]: parks company-less guests on the pending page

mod dashboard;
mod effects;
mod element;
mod route;

pub use dashboard::{DashboardDecision, DashboardGate};
pub use effects::{DenialNotice, Navigator, Notifier};
pub use element::PermissionGuard;
pub use route::{GuardPhase, GuardView, RouteGuard, RouteGuardOptions};
