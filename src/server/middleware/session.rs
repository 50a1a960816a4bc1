//! Session resolution middleware

use crate::auth::session::SessionState;
use crate::config::SessionHeaderConfig;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::HttpMessage;
use futures::future::{Ready, ready};
use std::rc::Rc;
use tracing::debug;

use super::helpers::resolve_session;

/// Attaches a [`SessionState`] to every request
pub struct SessionMiddleware {
    config: Rc<SessionHeaderConfig>,
}

impl SessionMiddleware {
    pub fn new(config: SessionHeaderConfig) -> Self {
        Self {
            config: Rc::new(config),
        }
    }
}

impl Default for SessionMiddleware {
    fn default() -> Self {
        Self::new(SessionHeaderConfig::default())
    }
}

impl<S, B> Transform<S, ServiceRequest> for SessionMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = SessionMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SessionMiddlewareService {
            service,
            config: Rc::clone(&self.config),
        }))
    }
}

/// Service implementation for session middleware
pub struct SessionMiddlewareService<S> {
    service: S,
    config: Rc<SessionHeaderConfig>,
}

impl<S, B> Service<ServiceRequest> for SessionMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = actix_web::Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let session: SessionState = resolve_session(req.headers(), &self.config);
        debug!(role = ?session.role(), path = %req.path(), "Resolved session");
        req.extensions_mut().insert(session);
        self.service.call(req)
    }
}
