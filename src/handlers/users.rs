//! # User Management HTTP Handlers
//!
//! 계정 등록, 조회, 수정, 삭제 엔드포인트입니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/api/v1/register` | 계정 등록 | 201 Created |
//! | `GET` | `/api/v1/users` | 전체 목록 | 200 OK |
//! | `GET` | `/api/v1/users/by-email/{email}` | 이메일로 조회 | 200 OK |
//! | `GET` | `/api/v1/users/{username}` | 사용자명으로 조회 | 200 OK |
//! | `PUT` | `/api/v1/users/{username}` | 이메일/비밀번호 수정 | 200 OK |
//! | `DELETE` | `/api/v1/users/{username}` | 계정 삭제 | 200 OK |
//!
//! ## 이벤트 발행
//!
//! 변경 연산이 성공한 뒤에만 [`EventPublisher`](crate::messaging::EventPublisher)를 호출하며
//! 발행 결과(`bool`)는 응답에 영향을 주지 않습니다.
//!
//! ## 개인정보 보호
//!
//! 모든 응답은 [`UserResponse`]를 거치므로 `password_hash`와 `salt`는 노출되지 않습니다.

use actix_web::{delete, get, post, put, web, HttpResponse};
use serde_json::{Map, Value};
use validator::Validate;
use crate::{
    core::AppState,
    domain::dto::users::{
        request::{RegisterRequest, UpdateUserRequest},
        response::{MessageResponse, RegisterResponse, UserResponse},
    },
    errors::{AccountError, AppError},
    services::users::{UpdateOutcome, UpdatedField},
};

/// 계정 등록 핸들러
///
/// # 엔드포인트
///
/// `POST /api/v1/register`
///
/// # 요청 본문
///
/// ```json
/// { "username": "bob", "password": "pass123", "email": "bob@example.com" }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// { "id": "507f1f77bcf86cd799439011", "message": "회원가입이 완료되었습니다" }
/// ```
///
/// ## 실패 사례
///
/// - 400: 입력값 검증 실패
/// - 409: 사용자명 또는 이메일 중복
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/register \
///   -H "Content-Type: application/json" \
///   -d '{"username":"bob","password":"pass123","email":"bob@example.com"}'
/// ```
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let RegisterRequest { username, password, email } = payload.into_inner();

    let id = state.user_service.register(&username, &password, &email).await?;

    state.publisher.publish_registration(&id, &username, &email).await;

    Ok(HttpResponse::Created().json(RegisterResponse {
        id,
        message: "회원가입이 완료되었습니다".to_string(),
    }))
}

/// 전체 사용자 목록
///
/// `GET /api/v1/users`
#[get("")]
pub async fn list_users(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let users = state.user_service.list_users().await?;
    Ok(HttpResponse::Ok().json(users))
}

/// 이메일로 사용자 조회
///
/// `GET /api/v1/users/by-email/{email}`
#[get("/by-email/{email}")]
pub async fn get_user_by_email(
    state: web::Data<AppState>,
    email: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service
        .get_by_email(&email)
        .await?
        .ok_or(AccountError::NotFound)?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자명으로 사용자 조회
///
/// `GET /api/v1/users/{username}`
#[get("/{username}")]
pub async fn get_user(
    state: web::Data<AppState>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service
        .get_by_username(&username)
        .await?
        .ok_or(AccountError::NotFound)?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 정보 수정 핸들러
///
/// # 엔드포인트
///
/// `PUT /api/v1/users/{username}`
///
/// # 요청 본문
///
/// 두 필드 모두 선택입니다.
///
/// ```json
/// { "email": "bob2@example.com", "password": "newpass" }
/// ```
///
/// # 응답
///
/// - 200: 수정된 사용자 정보, 또는 수정할 필드가 없으면 `{"message": "변경 사항이 없습니다"}`
/// - 404: 사용자 없음
/// - 409: 다른 계정이 사용 중인 이메일
/// - 500: 저장소가 변경된 문서 0건을 보고함
#[put("/{username}")]
pub async fn update_user(
    state: web::Data<AppState>,
    username: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let outcome = state.user_service
        .update(&username, payload.into_inner().into())
        .await?;

    match outcome {
        UpdateOutcome::Unchanged => {
            Ok(HttpResponse::Ok().json(MessageResponse::new("변경 사항이 없습니다")))
        }
        UpdateOutcome::Updated { user, updated_fields } => {
            state.publisher
                .publish_update(&user.id, &user.username, updated_fields_payload(&updated_fields, &user))
                .await;

            Ok(HttpResponse::Ok().json(user))
        }
    }
}

/// 계정 삭제 핸들러
///
/// 이벤트에 ID를 싣기 위해 삭제 전에 먼저 조회합니다.
///
/// `DELETE /api/v1/users/{username}`
#[delete("/{username}")]
pub async fn delete_user(
    state: web::Data<AppState>,
    username: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service
        .get_by_username(&username)
        .await?
        .ok_or(AccountError::NotFound)?;

    state.user_service.delete(&username).await?;

    state.publisher.publish_deletion(&user.id, &user.username).await;

    Ok(HttpResponse::Ok().json(MessageResponse::new("사용자가 삭제되었습니다")))
}

/// 수정 이벤트의 `updated_fields` 매핑
///
/// 이메일은 새 값을, 비밀번호는 변경 여부(`true`)만 담습니다.
fn updated_fields_payload(fields: &[UpdatedField], user: &UserResponse) -> Value {
    let mut payload = Map::new();

    for field in fields {
        let value = match field {
            UpdatedField::Email => Value::String(user.email.clone()),
            UpdatedField::Password => Value::Bool(true),
        };
        payload.insert(field.as_str().to_string(), value);
    }

    Value::Object(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_updated_fields_payload_never_contains_password_value() {
        let user = UserResponse {
            id: "id-1".to_string(),
            username: "bob".to_string(),
            email: "bob2@example.com".to_string(),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };

        let payload = updated_fields_payload(&[UpdatedField::Email, UpdatedField::Password], &user);
        assert_eq!(payload, json!({ "email": "bob2@example.com", "password": true }));
    }
}
