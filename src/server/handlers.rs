//! Route handlers shared by the application factory

use crate::server::types::{ApiResponse, HealthStatus};
use actix_web::{HttpResponse, Result as ActixResult};
use std::borrow::Cow;
use tracing::debug;

/// Basic health check endpoint
pub async fn health_check() -> ActixResult<HttpResponse> {
    debug!("Health check requested");

    let health_status = HealthStatus {
        status: Cow::Borrowed("healthy"),
        timestamp: chrono::Utc::now(),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(health_status)))
}
