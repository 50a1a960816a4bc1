//! Operator endpoints behind the system permissions

use crate::auth::rbac::Permission;
use crate::config::AccessConfig;
use crate::server::middleware::RouteGuardMiddleware;
use crate::server::state::AppState;
use crate::server::types::ApiResponse;
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};

/// Configure admin routes
///
/// The whole scope requires `system.admin`; denied callers are redirected to
/// the configured landing page.
pub fn configure_routes(cfg: &mut web::ServiceConfig, access: &AccessConfig) {
    cfg.service(
        web::scope("/api/admin")
            .wrap(RouteGuardMiddleware::from_config(
                Permission::SystemAdmin,
                access,
            ))
            .route("/config", web::get().to(effective_config)),
    );
}

/// The running configuration after file and environment layering
async fn effective_config(state: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ApiResponse::success(state.config().clone())))
}
