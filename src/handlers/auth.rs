//! # Authentication HTTP Handlers
//!
//! 사용자명/비밀번호 로그인과 로그아웃 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/v1/login` | 자격 증명 확인 후 사용자 정보 반환 |
//! | `POST` | `/api/v1/logout` | 로그아웃 이벤트 발행 |
//!
//! 세션이나 토큰은 발급하지 않습니다. 로그인 성공 시 정제된 사용자 정보만 돌려줍니다.
//!
//! ## 보안
//!
//! 존재하지 않는 사용자와 잘못된 비밀번호는 같은 401 응답을 받습니다.

use actix_web::{post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::AppState,
    domain::dto::users::{
        request::{LoginRequest, LogoutRequest},
        response::{LoginResponse, MessageResponse},
    },
    errors::{AccountError, AppError},
};

/// 로그인 엔드포인트
///
/// # Endpoint
/// `POST /api/v1/login`
///
/// # Request Body
/// ```json
/// { "username": "bob", "password": "pass123" }
/// ```
///
/// # Response
/// ```json
/// {
///   "user": { "id": "...", "username": "bob", "email": "bob@example.com", "created_at": "..." },
///   "message": "로그인에 성공했습니다"
/// }
/// ```
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state.user_service
        .authenticate(&payload.username, &payload.password)
        .await?
        .ok_or_else(|| {
            log::warn!("로그인 실패: {}", payload.username);
            AppError::AuthenticationError("잘못된 사용자명 또는 비밀번호입니다".to_string())
        })?;

    state.publisher.publish_login(&user.id, &user.username).await;

    Ok(HttpResponse::Ok().json(LoginResponse {
        user,
        message: "로그인에 성공했습니다".to_string(),
    }))
}

/// 로그아웃 엔드포인트
///
/// 서버 측 세션이 없으므로 사용자 존재 여부만 확인하고 이벤트를 발행합니다.
///
/// # Endpoint
/// `POST /api/v1/logout`
#[post("/logout")]
pub async fn logout(
    state: web::Data<AppState>,
    payload: web::Json<LogoutRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let user = state.user_service
        .get_by_username(&payload.username)
        .await?
        .ok_or(AccountError::NotFound)?;

    state.publisher.publish_logout(&user.id, &user.username).await;

    Ok(HttpResponse::Ok().json(MessageResponse::new("로그아웃되었습니다")))
}
