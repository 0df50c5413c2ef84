//! # 계정 저장소 계약
//!
//! 서비스 계층이 의존하는 키-문서 저장소 인터페이스입니다.
//! 구현체는 `username`과 `email`에 대해 각각 독립적인 유니크 제약을 보장해야 합니다.
//!
//! | 구현체 | 용도 |
//! |--------|------|
//! | [`MongoUserRepository`](super::user_repo::MongoUserRepository) | 운영 (MongoDB `users` 컬렉션) |
//! | [`InMemoryUserRepository`](super::memory_repo::InMemoryUserRepository) | 로컬 개발, 테스트 |

use async_trait::async_trait;
use crate::domain::entities::users::user::User;
use crate::errors::StoreError;

/// 단건 조회 조건
#[derive(Debug, Clone, PartialEq)]
pub enum AccountFilter {
    Username(String),
    Email(String),
    /// `email == email AND username != username`
    ///
    /// 수정 시 "다른 계정이 이 이메일을 쓰고 있는가" 확인에 사용합니다.
    EmailOwnedByOther { email: String, username: String },
}

impl AccountFilter {
    pub fn matches(&self, user: &User) -> bool {
        match self {
            AccountFilter::Username(username) => user.username == *username,
            AccountFilter::Email(email) => user.email == *email,
            AccountFilter::EmailOwnedByOther { email, username } => {
                user.email == *email && user.username != *username
            }
        }
    }
}

/// 부분 수정 필드 목록
///
/// `None`인 필드는 건드리지 않습니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountChanges {
    pub email: Option<String>,
    pub password_hash: Option<String>,
    pub salt: Option<String>,
}

impl AccountChanges {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password_hash.is_none() && self.salt.is_none()
    }
}

#[async_trait]
pub trait AccountStore: Send + Sync {
    /// 조건에 맞는 문서 하나 (민감 필드 포함)
    async fn find_one(&self, filter: &AccountFilter) -> Result<Option<User>, StoreError>;

    /// 새 문서를 삽입하고 할당된 ID를 반환합니다.
    ///
    /// 유니크 제약 위반 시 [`StoreError::DuplicateKey`]를 반환하며,
    /// 어느 필드가 충돌했는지는 구분하지 않습니다.
    async fn insert(&self, user: &User) -> Result<String, StoreError>;

    /// 지정된 필드만 수정하고 실제로 값이 바뀐 문서 수를 반환합니다.
    async fn update_fields(&self, username: &str, changes: &AccountChanges) -> Result<u64, StoreError>;

    /// 삭제된 문서 수를 반환합니다.
    async fn delete(&self, username: &str) -> Result<u64, StoreError>;

    /// 전체 목록 (`password_hash`, `salt` 제외)
    async fn list_all(&self) -> Result<Vec<User>, StoreError>;
}
