//! HTTP route modules

pub mod access;
pub mod admin;

use crate::config::AccessConfig;
use actix_web::web;

/// Register every API scope
pub fn configure(cfg: &mut web::ServiceConfig, access_config: &AccessConfig) {
    access::configure_routes(cfg);
    admin::configure_routes(cfg, access_config);
}
