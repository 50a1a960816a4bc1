//! Route guard middleware
//!
//! Server-side counterpart of [`crate::guard::RouteGuard`] for scopes that
//! render protected pages or serve protected data. Each request is its own
//! evaluation: granted requests pass through, denied ones are answered with
//! `303 See Other` to the configured landing page.

use crate::auth::rbac::{Requirement, check_detailed};
use crate::auth::session::SessionState;
use crate::config::AccessConfig;
use crate::guard::{DenialNotice, RouteGuardOptions};
use crate::utils::error::AccessError;
use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::header::{self, HeaderValue};
use actix_web::{HttpMessage, HttpResponse};
use futures::future::{Ready, ready};
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use tracing::{debug, warn};

/// Header carrying the JSON-encoded [`DenialNotice`] on a denied redirect
pub const ACCESS_NOTICE_HEADER: &str = "x-access-notice";

/// Encode a notice as the value of [`ACCESS_NOTICE_HEADER`]
pub fn notice_header(notice: &DenialNotice) -> crate::utils::error::Result<HeaderValue> {
    let json = serde_json::to_string(notice)?;
    HeaderValue::from_str(&json)
        .map_err(|e| AccessError::internal(format!("Notice is not a valid header value: {}", e)))
}

/// Gate a scope behind a permission requirement
pub struct RouteGuardMiddleware {
    options: Rc<RouteGuardOptions>,
}

impl RouteGuardMiddleware {
    pub fn new(options: RouteGuardOptions) -> Self {
        Self {
            options: Rc::new(options),
        }
    }

    /// Guard with redirect and notice defaults from configuration
    pub fn from_config(requirement: impl Into<Requirement>, config: &AccessConfig) -> Self {
        Self::new(RouteGuardOptions::from_config(requirement, config))
    }
}

impl<S, B> Transform<S, ServiceRequest> for RouteGuardMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type InitError = ();
    type Transform = RouteGuardMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RouteGuardMiddlewareService {
            service,
            options: Rc::clone(&self.options),
        }))
    }
}

/// Service implementation for route guard middleware
pub struct RouteGuardMiddlewareService<S> {
    service: S,
    options: Rc<RouteGuardOptions>,
}

impl<S, B> Service<ServiceRequest> for RouteGuardMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = actix_web::Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let session = req
            .extensions()
            .get::<SessionState>()
            .cloned()
            .unwrap_or(SessionState::Anonymous);

        let Some(role) = session.role() else {
            // Unresolved sessions are neither granted nor denied.
            debug!(path = %req.path(), "Session unresolved, holding request");
            let response = HttpResponse::ServiceUnavailable()
                .insert_header((header::RETRY_AFTER, "1"))
                .finish();
            return Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) });
        };

        let check = check_detailed(role, &self.options.requirement);
        if check.granted {
            let fut = self.service.call(req);
            return Box::pin(async move { Ok(fut.await?.map_into_left_body()) });
        }

        warn!(
            %role,
            path = %req.path(),
            redirect_to = %self.options.redirect_to,
            reason = check.denial_reason.as_deref().unwrap_or("denied"),
            "Route access denied"
        );

        let mut response = HttpResponse::SeeOther();
        response.insert_header((header::LOCATION, self.options.redirect_to.as_str()));

        if self.options.show_toast {
            let notice = DenialNotice::for_role(role, self.options.toast_duration);
            match notice_header(&notice) {
                Ok(value) => {
                    response.insert_header((ACCESS_NOTICE_HEADER, value));
                }
                Err(e) => warn!(error = %e, "Failed to encode access notice header"),
            }
        }

        let response = response.finish();
        Box::pin(async move { Ok(req.into_response(response).map_into_right_body()) })
    }
}
