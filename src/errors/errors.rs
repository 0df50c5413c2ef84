//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 계층별로 세 가지 에러 타입을 사용합니다.
//!
//! | 타입 | 계층 | 설명 |
//! |------|------|------|
//! | [`StoreError`] | 저장소 | 계정 저장소(MongoDB, 메모리) 연산 실패 |
//! | [`AccountError`] | 서비스 | 계정 생명주기 연산의 실패 종류 |
//! | [`TransportError`] | 메시징 | 이벤트 브로커 전송 실패 (발행기 내부에서만 사용) |
//! | [`AppError`] | HTTP | 클라이언트 응답으로 변환되는 에러 |
//!
//! 서비스 계층은 실패 종류를 문자열이 아닌 열거형 변형으로 구분하며,
//! 경계 계층은 `From<AccountError> for AppError` 변환으로 상태 코드를 결정합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::{AccountError, AppError};
//!
//! match user_service.register(&username, &password, &email).await {
//!     Ok(id) => Ok(HttpResponse::Created().json(json!({ "id": id }))),
//!     Err(AccountError::UsernameExists) => Err(AppError::ConflictError("...".into())),
//!     Err(e) => Err(e.into()),
//! }
//! ```

use std::time::Duration;
use thiserror::Error;

/// 계정 저장소 에러
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StoreError {
    /// 유니크 인덱스(username 또는 email) 위반
    ///
    /// 어떤 인덱스가 위반되었는지는 알려주지 않습니다.
    #[error("Duplicate key: {0}")]
    DuplicateKey(String),

    /// 그 밖의 데이터베이스 오류
    #[error("Database error: {0}")]
    Database(String),
}

/// 계정 서비스 에러
///
/// 모든 변형은 호출한 연산을 종료시키며 경계 계층까지 그대로 전달됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccountError {
    #[error("username already exists")]
    UsernameExists,

    #[error("email already registered")]
    EmailExists,

    /// 수정하려는 이메일을 다른 계정이 사용 중
    #[error("email already in use by another account")]
    EmailInUse,

    #[error("account not found")]
    NotFound,

    /// 저장소가 수정된 문서 0건을 보고함
    #[error("account update failed")]
    UpdateFailed,

    /// 중복 키 충돌 후 재조회로도 원인을 판별하지 못함 (동시 삭제와의 경합)
    #[error("registration failed")]
    RegistrationFailed,

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// 이벤트 브로커 전송 에러
///
/// [`EventPublisher`](crate::messaging::EventPublisher)가 모두 흡수하며
/// 호출자에게는 `false`로만 전달됩니다.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("transport is not connected")]
    NotConnected,

    #[error("connection error: {0}")]
    Connection(String),

    /// 발행 대상을 선언할 수 없음 (다른 타입의 키가 이미 존재하는 등)
    #[error("destination error: {0}")]
    Destination(String),

    #[error("transport call timed out after {0:?}")]
    Timeout(Duration),
}

impl From<redis::RedisError> for TransportError {
    fn from(err: redis::RedisError) -> Self {
        TransportError::Connection(err.to_string())
    }
}

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<AccountError> for AppError {
    fn from(error: AccountError) -> Self {
        match error {
            AccountError::UsernameExists => {
                AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string())
            }
            AccountError::EmailExists => {
                AppError::ConflictError("이미 등록된 이메일입니다".to_string())
            }
            AccountError::EmailInUse => {
                AppError::ConflictError("다른 계정이 사용 중인 이메일입니다".to_string())
            }
            AccountError::NotFound => AppError::NotFound("사용자를 찾을 수 없습니다".to_string()),
            AccountError::UpdateFailed => {
                AppError::InternalError("사용자 정보 수정에 실패했습니다".to_string())
            }
            AccountError::RegistrationFailed => {
                AppError::InternalError("사용자 등록에 실패했습니다".to_string())
            }
            AccountError::Store(e) => AppError::DatabaseError(e.to_string()),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.to_string()
            }))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Email is required".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Invalid username or password".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_conflict_kinds_map_to_409() {
        for kind in [
            AccountError::UsernameExists,
            AccountError::EmailExists,
            AccountError::EmailInUse,
        ] {
            let error: AppError = kind.into();
            assert_eq!(error.status_code(), StatusCode::CONFLICT);
        }
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error: AppError = AccountError::NotFound.into();
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_failures_map_to_500() {
        let update: AppError = AccountError::UpdateFailed.into();
        let registration: AppError = AccountError::RegistrationFailed.into();
        let store: AppError = AccountError::Store(StoreError::Database("timeout".to_string())).into();

        assert_eq!(update.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(registration.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        if let AppError::DatabaseError(msg) = store {
            assert!(msg.contains("timeout"));
        } else {
            panic!("Expected DatabaseError");
        }
    }

    #[test]
    fn test_store_error_converts_into_account_error() {
        let error: AccountError = StoreError::DuplicateKey("username_unique".to_string()).into();
        assert_eq!(
            error,
            AccountError::Store(StoreError::DuplicateKey("username_unique".to_string()))
        );
    }
}
