//! HTTP middleware implementations
//!
//! - Session resolution from forwarded identity headers
//! - Route guards over permission requirements

mod helpers;
mod route_guard;
mod session;


pub use helpers::{request_session, resolve_session};
pub use route_guard::{
    ACCESS_NOTICE_HEADER, RouteGuardMiddleware, RouteGuardMiddlewareService, notice_header,
};
pub use session::{SessionMiddleware, SessionMiddlewareService};
