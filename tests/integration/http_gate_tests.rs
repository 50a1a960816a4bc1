//! HTTP gating integration tests
//!
//! Run requests through the assembled application with forwarded identity
//! headers.

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{App, HttpResponse, test, web};
    use dashboard_access::config::{Config, SessionHeaderConfig};
    use dashboard_access::server::middleware::{
        ACCESS_NOTICE_HEADER, RouteGuardMiddleware, SessionMiddleware,
    };
    use dashboard_access::server::{AppState, HttpServer};
    use dashboard_access::{DenialNotice, Permission, Role, RouteGuardOptions};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_denied_request_carries_decodable_notice() {
        let app = test::init_service(
            App::new().wrap(SessionMiddleware::default()).service(
                web::scope("/intern/dashboard/system")
                    .wrap(RouteGuardMiddleware::new(RouteGuardOptions::new(
                        Permission::SystemAdmin,
                    )))
                    .route("", web::get().to(|| async { HttpResponse::Ok().finish() })),
            ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/intern/dashboard/system")
            .insert_header(("x-user-role", "ADMIN"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);

        let raw = resp.headers().get(ACCESS_NOTICE_HEADER).unwrap();
        let notice: Value = serde_json::from_str(raw.to_str().unwrap()).unwrap();
        let expected = serde_json::to_value(DenialNotice::for_role(
            Role::Admin,
            std::time::Duration::from_millis(4000),
        ))
        .unwrap();
        assert_eq!(notice, expected);
    }

    #[actix_web::test]
    async fn test_custom_role_header_is_honoured() {
        let mut config = Config::default();
        config.session = SessionHeaderConfig {
            role_header: "x-auth-role".to_string(),
            ..Default::default()
        };
        let state = web::Data::new(AppState::new(config));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/api/access/me")
            .insert_header(("x-auth-role", "MASTER"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["role"], "MASTER");

        // The default header name no longer carries identity.
        let req = test::TestRequest::get()
            .uri("/api/access/me")
            .insert_header(("x-user-role", "MASTER"))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["role"], "GUEST");
    }

    #[actix_web::test]
    async fn test_admin_redirect_follows_configured_landing_path() {
        let mut config = Config::default();
        config.access.landing_path = "/intern/dashboard/reports".to_string();
        let state = web::Data::new(AppState::new(config));
        let app = test::init_service(HttpServer::create_app(state)).await;

        let req = test::TestRequest::get()
            .uri("/api/admin/config")
            .insert_header(("x-user-role", "USER"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            resp.headers().get("location").unwrap(),
            "/intern/dashboard/reports"
        );
    }
}
