use serde::{Deserialize, Serialize};
use crate::domain::entities::users::user::User;

/// 민감 필드를 제외한 사용자 프로젝션
///
/// `password_hash`와 `salt` 필드가 타입에 존재하지 않으므로
/// 이 구조체를 거친 응답에는 자격 증명이 포함될 수 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserResponse {
    pub id: String,
    pub username: String,
    pub email: String,
    /// RFC 3339 UTC 문자열
    pub created_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            username,
            email,
            created_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            username,
            email,
            created_at: created_at.try_to_rfc3339_string().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub id: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserResponse,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_projection_has_no_credential_keys() {
        let mut user = User::new(
            "bob".to_string(),
            "bob@example.com".to_string(),
            "deadbeef".to_string(),
            "cafebabe".to_string(),
        );
        let oid = ObjectId::new();
        user.id = Some(oid);

        let response = UserResponse::from(user);
        let json = serde_json::to_value(&response).unwrap();
        let object = json.as_object().unwrap();

        assert_eq!(response.id, oid.to_hex());
        assert_eq!(object["username"], "bob");
        assert!(!object.contains_key("password_hash"));
        assert!(!object.contains_key("salt"));
        assert!(response.created_at.ends_with('Z'));
    }
}
