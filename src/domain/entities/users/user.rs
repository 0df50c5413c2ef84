//! User Entity Implementation
//!
//! 계정 저장소에 보관되는 사용자 문서입니다.
//! 비밀번호 해시와 솔트를 포함하므로 이 타입은 외부 응답으로 직접 직렬화하지 않고
//! 반드시 [`UserResponse`](crate::domain::dto::users::response::UserResponse)로 변환합니다.

use std::fmt;
use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 사용자 엔티티
///
/// `users` 컬렉션의 문서와 1:1로 대응합니다.
/// `username`과 `email`은 각각 독립적인 유니크 인덱스로 보호됩니다.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자명 (unique, 2-50자)
    pub username: String,
    /// 이메일 (unique)
    pub email: String,
    /// PBKDF2 해시 (hex)
    ///
    /// 목록 조회처럼 민감 필드를 제외한 프로젝션에서는 비어 있습니다.
    #[serde(default)]
    pub password_hash: String,
    /// 해시와 짝을 이루는 솔트 (hex)
    #[serde(default)]
    pub salt: String,
    /// 생성 시간 (UTC, 불변)
    pub created_at: DateTime,
}

impl User {
    /// 새 사용자 생성
    ///
    /// ID는 저장소가 삽입 시점에 할당합니다.
    pub fn new(username: String, email: String, password_hash: String, salt: String) -> Self {
        Self {
            id: None,
            username,
            email,
            password_hash,
            salt,
            created_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 민감 필드를 비운 사본
    pub fn without_credentials(mut self) -> Self {
        self.password_hash.clear();
        self.salt.clear();
        self
    }
}

// 로그에 자격 증명이 남지 않도록 직접 구현
impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("salt", &"<redacted>")
            .field("created_at", &self.created_at)
            .finish()
    }
}
