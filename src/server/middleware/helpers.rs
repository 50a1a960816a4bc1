//! Helper functions for middleware

use crate::auth::session::{SessionState, SessionUser};
use crate::config::SessionHeaderConfig;
use actix_web::http::header::HeaderMap;
use actix_web::{HttpMessage, HttpRequest};

// Identity values may carry UTF-8 (names like "João"); `to_str` only
// accepts visible ASCII.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Resolve the session forwarded by the authentication proxy
///
/// No role header means nobody is signed in.
pub fn resolve_session(headers: &HeaderMap, config: &SessionHeaderConfig) -> SessionState {
    let Some(role) = header_value(headers, &config.role_header) else {
        return SessionState::Anonymous;
    };

    SessionState::Authenticated(SessionUser {
        id: header_value(headers, &config.user_id_header).unwrap_or_default(),
        name: header_value(headers, &config.name_header).unwrap_or_default(),
        email: header_value(headers, &config.email_header).unwrap_or_default(),
        role,
        company_id: header_value(headers, &config.company_header),
    })
}

/// Session attached to a request by [`super::SessionMiddleware`]
pub fn request_session(req: &HttpRequest) -> SessionState {
    req.extensions()
        .get::<SessionState>()
        .cloned()
        .unwrap_or(SessionState::Anonymous)
}
