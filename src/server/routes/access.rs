//! Access introspection endpoints
//!
//! Let a client shell ask what the current session may see and do. Every
//! answer is derived from the request's session; nothing is cached.

use crate::auth::rbac::{MatchMode, Permission, Requirement, check_detailed};
use crate::navigation::filtered_navigation;
use crate::server::middleware::request_session;
use crate::server::state::AppState;
use crate::server::types::{AccessProfile, ApiResponse, MatrixRow};
use crate::utils::error::{AccessError, Result};
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use tracing::debug;

/// Configure access routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/access")
            .route("/me", web::get().to(me))
            .route("/navigation", web::get().to(navigation))
            .route("/check", web::get().to(check))
            .route("/matrix", web::get().to(matrix)),
    );
}

/// Query for `GET /api/access/check`
#[derive(Debug, Deserialize)]
pub struct CheckQuery {
    /// Comma-separated permission identifiers
    pub permissions: String,
    /// `all` (default) or `any`
    pub mode: Option<String>,
}

fn parse_mode(mode: Option<&str>) -> Result<MatchMode> {
    match mode.map(str::trim) {
        None | Some("") | Some("all") => Ok(MatchMode::All),
        Some("any") => Ok(MatchMode::Any),
        Some(other) => Err(AccessError::bad_request(format!(
            "mode must be 'all' or 'any', got '{}'",
            other
        ))),
    }
}

async fn me(req: HttpRequest, state: web::Data<AppState>) -> Result<HttpResponse> {
    let session = request_session(&req);
    let role = session.effective_role();
    let decision = state.dashboard.decide(&session);
    let profile = AccessProfile::new(role, session.user().cloned(), decision);
    Ok(HttpResponse::Ok().json(ApiResponse::success(profile)))
}

async fn navigation(req: HttpRequest) -> Result<HttpResponse> {
    let role = request_session(&req).effective_role();
    let entries = filtered_navigation(role);
    debug!(%role, entries = entries.len(), "Filtered navigation");
    Ok(HttpResponse::Ok().json(ApiResponse::success(entries)))
}

async fn check(req: HttpRequest, query: web::Query<CheckQuery>) -> Result<HttpResponse> {
    let permissions = Permission::parse_list(&query.permissions)?;
    let mode = parse_mode(query.mode.as_deref())?;
    let requirement = Requirement::List { permissions, mode };

    let role = request_session(&req).effective_role();
    let result = check_detailed(role, &requirement);
    Ok(HttpResponse::Ok().json(ApiResponse::success(result)))
}

async fn matrix() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(MatrixRow::all())))
}
