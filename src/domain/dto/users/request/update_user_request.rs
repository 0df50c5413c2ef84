//! # 사용자 정보 수정 요청 DTO
//!
//! 이메일과 비밀번호만 수정할 수 있으며 두 필드 모두 선택 사항입니다.
//! 아무 필드도 없으면 서비스는 "변경 없음" 결과를 돌려줍니다.

use serde::Deserialize;
use validator::Validate;

use crate::services::users::AccountUpdate;

#[derive(Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[validate(length(
        min = 1,
        max = 12,
        message = "비밀번호는 1-12자 사이여야 합니다"
    ))]
    pub password: Option<String>,
}

impl std::fmt::Debug for UpdateUserRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpdateUserRequest")
            .field("email", &self.email)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl From<UpdateUserRequest> for AccountUpdate {
    fn from(request: UpdateUserRequest) -> Self {
        Self {
            email: request.email,
            password: request.password,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_is_valid() {
        assert!(UpdateUserRequest::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_email_is_rejected() {
        let request = UpdateUserRequest {
            email: Some("nope".to_string()),
            password: None,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_password_too_long_is_rejected() {
        let request = UpdateUserRequest {
            email: None,
            password: Some("1234567890123".to_string()),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_deserializes_partial_body() {
        let request: UpdateUserRequest =
            serde_json::from_str(r#"{"email":"bob2@example.com"}"#).unwrap();
        let update = AccountUpdate::from(request);

        assert_eq!(update.email.as_deref(), Some("bob2@example.com"));
        assert!(update.password.is_none());
    }
}
