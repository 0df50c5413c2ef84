//! # 메모리 사용자 리포지토리
//!
//! MongoDB 없이 서비스를 실행하거나 테스트할 때 사용하는 [`AccountStore`] 구현체입니다.
//! `ACCOUNT_STORE=memory`로 선택합니다. 프로세스가 종료되면 데이터는 사라집니다.
//!
//! 유니크 제약과 `modified_count` 의미는 MongoDB 구현체와 동일하게 맞춥니다.

use std::sync::RwLock;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use crate::{
    domain::entities::users::user::User,
    errors::StoreError,
};
use super::account_store::{AccountChanges, AccountFilter, AccountStore};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> StoreError {
        StoreError::Database("in-memory store lock poisoned".to_string())
    }
}

#[async_trait]
impl AccountStore for InMemoryUserRepository {
    async fn find_one(&self, filter: &AccountFilter) -> Result<Option<User>, StoreError> {
        let users = self.users.read().map_err(|_| Self::poisoned())?;
        Ok(users.iter().find(|user| filter.matches(user)).cloned())
    }

    async fn insert(&self, user: &User) -> Result<String, StoreError> {
        let mut users = self.users.write().map_err(|_| Self::poisoned())?;

        if users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::DuplicateKey("username_unique".to_string()));
        }
        if users.iter().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateKey("email_unique".to_string()));
        }

        let id = ObjectId::new();
        let mut stored = user.clone();
        stored.id = Some(id);
        users.push(stored);

        Ok(id.to_hex())
    }

    async fn update_fields(&self, username: &str, changes: &AccountChanges) -> Result<u64, StoreError> {
        if changes.is_empty() {
            return Ok(0);
        }

        let mut users = self.users.write().map_err(|_| Self::poisoned())?;

        if let Some(email) = &changes.email {
            if users.iter().any(|u| u.email == *email && u.username != username) {
                return Err(StoreError::DuplicateKey("email_unique".to_string()));
            }
        }

        let Some(user) = users.iter_mut().find(|u| u.username == username) else {
            return Ok(0);
        };

        let mut modified = false;
        if let Some(email) = &changes.email {
            modified |= user.email != *email;
            user.email = email.clone();
        }
        if let Some(password_hash) = &changes.password_hash {
            modified |= user.password_hash != *password_hash;
            user.password_hash = password_hash.clone();
        }
        if let Some(salt) = &changes.salt {
            modified |= user.salt != *salt;
            user.salt = salt.clone();
        }

        Ok(u64::from(modified))
    }

    async fn delete(&self, username: &str) -> Result<u64, StoreError> {
        let mut users = self.users.write().map_err(|_| Self::poisoned())?;
        let before = users.len();
        users.retain(|u| u.username != username);

        Ok((before - users.len()) as u64)
    }

    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let users = self.users.read().map_err(|_| Self::poisoned())?;
        let mut listed: Vec<User> = users.iter().cloned().map(User::without_credentials).collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(listed)
    }
}
