//! # Routes Module
//!
//! 모든 HTTP 라우트를 한곳에서 등록합니다.
//!
//! ```text
//! /health
//! /api/v1
//!   ├─ POST   /register
//!   ├─ POST   /login
//!   ├─ POST   /logout
//!   └─ /users
//!        ├─ GET    ""
//!        ├─ GET    /by-email/{email}
//!        ├─ GET    /{username}
//!        ├─ PUT    /{username}
//!        └─ DELETE /{username}
//! ```
//!
//! 핸들러는 `web::Data<AppState>`를 요구하므로 앱에 상태를 먼저 등록해야 합니다.

use crate::core::AppState;
use crate::handlers;
use actix_web::web;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new()
///     .app_data(web::Data::new(state))
///     .configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    cfg.service(
        web::scope("/api/v1")
            .configure(configure_account_routes)
            .configure(configure_user_routes)
    );
}

/// 계정 진입 라우트 (등록, 로그인, 로그아웃)
fn configure_account_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::register)
        .service(handlers::auth::login)
        .service(handlers::auth::logout);
}

/// 사용자 조회/수정/삭제 라우트
///
/// `/by-email/{email}`을 `/{username}`보다 먼저 등록합니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::get_user_by_email)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "user_account_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00Z",
///   "event_broker": { "enabled": true, "state": "connected", "destination": "user_events" }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(state: web::Data<AppState>) -> actix_web::HttpResponse {
    let publisher = &state.publisher;

    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_account_service",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "event_broker": {
            "enabled": publisher.is_enabled(),
            "state": publisher.state().as_str(),
            "destination": publisher.destination(),
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;
    use crate::messaging::EventPublisher;
    use crate::repositories::users::InMemoryUserRepository;

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState::from_store(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(EventPublisher::disabled()),
        ))
    }

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(state())
                    .configure(configure_all_routes),
            )
            .await
        };
    }

    fn register_request(username: &str, password: &str, email: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/v1/register")
            .set_json(json!({ "username": username, "password": password, "email": email }))
    }

    #[actix_web::test]
    async fn test_health_reports_disabled_broker() {
        let app = app!();

        let resp = test::call_service(&app, test::TestRequest::get().uri("/health").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["event_broker"]["enabled"], false);
        assert_eq!(body["event_broker"]["state"], "disconnected");
    }

    #[actix_web::test]
    async fn test_register_login_update_delete_flow() {
        let app = app!();

        let resp = test::call_service(&app, register_request("bob", "pass123", "bob@example.com").to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["id"].as_str().is_some_and(|id| !id.is_empty()));

        let login = test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "bob", "password": "pass123" }))
            .to_request();
        let resp = test::call_service(&app, login).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["user"]["username"], "bob");
        assert!(body["user"].get("password_hash").is_none());
        assert!(body["user"].get("salt").is_none());

        let update = test::TestRequest::put()
            .uri("/api/v1/users/bob")
            .set_json(json!({ "email": "bob2@example.com" }))
            .to_request();
        let resp = test::call_service(&app, update).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["email"], "bob2@example.com");

        let by_email = test::TestRequest::get().uri("/api/v1/users/by-email/bob2@example.com").to_request();
        let resp = test::call_service(&app, by_email).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let delete = test::TestRequest::delete().uri("/api/v1/users/bob").to_request();
        let resp = test::call_service(&app, delete).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let get = test::TestRequest::get().uri("/api/v1/users/bob").to_request();
        let resp = test::call_service(&app, get).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_duplicate_registration_is_conflict() {
        let app = app!();

        let resp = test::call_service(&app, register_request("bob", "pass123", "bob@example.com").to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = test::call_service(&app, register_request("bob", "pass123", "x@example.com").to_request()).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);

        let resp = test::call_service(&app, register_request("alice", "pass123", "bob@example.com").to_request()).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[actix_web::test]
    async fn test_register_validation_rejects_bad_input() {
        let app = app!();

        let resp = test::call_service(&app, register_request("b", "pass123", "bob@example.com").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = test::call_service(&app, register_request("bob", "thirteen-char", "bob@example.com").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = test::call_service(&app, register_request("bob", "pass123", "not-an-email").to_request()).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_login_failures_are_indistinguishable() {
        let app = app!();
        test::call_service(&app, register_request("bob", "pass123", "bob@example.com").to_request()).await;

        let wrong_password = test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "bob", "password": "nope" }))
            .to_request();
        let resp = test::call_service(&app, wrong_password).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let wrong_password_body: Value = test::read_body_json(resp).await;

        let unknown_user = test::TestRequest::post()
            .uri("/api/v1/login")
            .set_json(json!({ "username": "ghost", "password": "pass123" }))
            .to_request();
        let resp = test::call_service(&app, unknown_user).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let unknown_user_body: Value = test::read_body_json(resp).await;

        assert_eq!(wrong_password_body, unknown_user_body);
    }

    #[actix_web::test]
    async fn test_update_without_fields_reports_no_changes() {
        let app = app!();
        test::call_service(&app, register_request("bob", "pass123", "bob@example.com").to_request()).await;

        let update = test::TestRequest::put()
            .uri("/api/v1/users/bob")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, update).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert!(body["message"].is_string());
        assert!(body.get("username").is_none());
    }

    #[actix_web::test]
    async fn test_update_email_in_use_is_conflict() {
        let app = app!();
        test::call_service(&app, register_request("bob", "pass123", "bob@example.com").to_request()).await;
        test::call_service(&app, register_request("alice", "pass123", "alice@example.com").to_request()).await;

        let update = test::TestRequest::put()
            .uri("/api/v1/users/bob")
            .set_json(json!({ "email": "alice@example.com" }))
            .to_request();
        let resp = test::call_service(&app, update).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_unknown_user_operations_are_not_found() {
        let app = app!();

        let delete = test::TestRequest::delete().uri("/api/v1/users/ghost").to_request();
        assert_eq!(test::call_service(&app, delete).await.status(), StatusCode::NOT_FOUND);

        let update = test::TestRequest::put()
            .uri("/api/v1/users/ghost")
            .set_json(json!({ "email": "ghost@example.com" }))
            .to_request();
        assert_eq!(test::call_service(&app, update).await.status(), StatusCode::NOT_FOUND);

        let logout = test::TestRequest::post()
            .uri("/api/v1/logout")
            .set_json(json!({ "username": "ghost" }))
            .to_request();
        assert_eq!(test::call_service(&app, logout).await.status(), StatusCode::NOT_FOUND);

        let by_email = test::TestRequest::get().uri("/api/v1/users/by-email/ghost@example.com").to_request();
        assert_eq!(test::call_service(&app, by_email).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_list_users_hides_credentials() {
        let app = app!();
        test::call_service(&app, register_request("bob", "pass123", "bob@example.com").to_request()).await;
        test::call_service(&app, register_request("alice", "pass123", "alice@example.com").to_request()).await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/users").to_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        let users = body.as_array().unwrap();
        assert_eq!(users.len(), 2);
        assert!(users.iter().all(|u| u.get("password_hash").is_none() && u.get("salt").is_none()));
    }

    #[actix_web::test]
    async fn test_logout_existing_user() {
        let app = app!();
        test::call_service(&app, register_request("bob", "pass123", "bob@example.com").to_request()).await;

        let logout = test::TestRequest::post()
            .uri("/api/v1/logout")
            .set_json(json!({ "username": "bob" }))
            .to_request();
        assert_eq!(test::call_service(&app, logout).await.status(), StatusCode::OK);
    }
}
