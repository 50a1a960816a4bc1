//! # dashboard-access
//!
//! Role-based access control for the marketing-operations dashboard.
//!
//! ## Features
//!
//! - **Permission catalog**: closed set of dot-namespaced capabilities
//! - **Role matrix**: explicit permission sets for MASTER, ADMIN, USER and GUEST
//! - **Decisions**: single, all-of and any-of checks with detailed results
//! - **Navigation**: sidebar entries filtered per role
//! - **Guards**: element guard, route guard with redirect and notice effects,
//!   dashboard gate for company-less guests
//! - **HTTP**: session resolution and route guard middleware for actix-web
//!
//! ## Quick Start
//!
//! ```rust
//! use dashboard_access::{Permission, Requirement, Role, evaluate, has_permission};
//!
//! assert!(has_permission(Role::Admin, Permission::LeadsDelete));
//! assert!(!has_permission(Role::User, Permission::BotView));
//!
//! let requirement = Requirement::any([Permission::SystemAdmin, Permission::ReportsView]);
//! assert!(evaluate(Role::User, &requirement).is_granted());
//! ```
//!
//! ## Server Mode
//!
//! ```rust,no_run
//! use dashboard_access::{Config, server::HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/access.yaml").await?;
//!     HttpServer::new(&config)?.start().await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod auth;
pub mod config;
pub mod guard;
pub mod navigation;
pub mod server;
pub mod utils;

// Re-export main types
pub use auth::rbac::{
    Access, MatchMode, Permission, PermissionCheck, PermissionContext, Requirement, Role,
    check_detailed, evaluate, has_all_permissions, has_any_permission, has_permission,
};
pub use auth::session::{SessionSource, SessionState, SessionUser, SharedSession};
pub use config::Config;
pub use guard::{
    DashboardDecision, DashboardGate, DenialNotice, GuardPhase, GuardView, Navigator, Notifier,
    PermissionGuard, RouteGuard, RouteGuardOptions,
};
pub use navigation::{NavigationEntry, filtered_navigation};
pub use utils::error::{AccessError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
