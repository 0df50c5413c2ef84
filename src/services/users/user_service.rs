//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직입니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       UserService                        │
//! ├──────────────────────────────────────────────────────────┤
//! │  register      → PasswordCredential::derive → insert     │
//! │                  (중복 키 → username → email 순서로 판별)    │
//! │  authenticate  → find_one → PasswordCredential::verify   │
//! │  update        → find_one → 이메일 충돌 확인 → update_fields │
//! │  delete        → delete                                   │
//! │  get / list    → find_one / list_all → UserResponse       │
//! └──────────────────────────────────────────────────────────┘
//!                             │
//!                             ▼
//!                ┌──────────────────────────┐
//!                │   Arc<dyn AccountStore>  │
//!                └──────────────────────────┘
//! ```
//!
//! ## 보안 고려사항
//!
//! - **민감 정보 제거**: 외부로 나가는 모든 결과는 [`UserResponse`]로 변환
//! - **계정 열거 방지**: 인증 실패 시 "사용자 없음"과 "비밀번호 불일치"를 구분하지 않음
//! - **솔트 재사용 금지**: 비밀번호 변경 시 항상 새 솔트 생성
//!
//! 이벤트 발행은 이 서비스의 책임이 아닙니다.
//! 경계 계층(핸들러)이 연산 성공 후 [`EventPublisher`](crate::messaging::EventPublisher)를 호출합니다.

use std::sync::Arc;
use crate::{
    domain::{
        entities::users::user::User,
        dto::users::response::UserResponse,
    },
    errors::{AccountError, StoreError},
    repositories::users::{AccountChanges, AccountFilter, AccountStore},
};
use super::password::PasswordCredential;

/// 정보 수정 요청 (둘 다 선택)
#[derive(Default, Clone)]
pub struct AccountUpdate {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl AccountUpdate {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// 수정 요청에 포함된 필드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatedField {
    Email,
    Password,
}

impl UpdatedField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UpdatedField::Email => "email",
            UpdatedField::Password => "password",
        }
    }
}

/// 정보 수정 결과
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateOutcome {
    /// 수정할 필드가 없어 아무것도 하지 않음
    Unchanged,
    Updated {
        user: UserResponse,
        /// 실제로 요청된 필드
        updated_fields: Vec<UpdatedField>,
    },
}

pub struct UserService {
    store: Arc<dyn AccountStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// 새 계정 등록
    ///
    /// 입력 스키마(길이, 이메일 형식)는 경계 계층에서 이미 검증되었다고 가정합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(id)` - 저장소가 할당한 ID
    /// * `Err(AccountError::UsernameExists)` - 사용자명 중복
    /// * `Err(AccountError::EmailExists)` - 이메일 중복
    /// * `Err(AccountError::RegistrationFailed)` - 중복 키였으나 재조회로 원인을 찾지 못함
    ///
    /// # 충돌 판별
    ///
    /// 저장소의 중복 키 에러는 어떤 인덱스가 위반되었는지 알려주지 않으므로
    /// 사용자명을 먼저, 그다음 이메일을 조회합니다. 동시 삭제와 경합하면
    /// 판별이 틀릴 수 있는 최선 노력(best-effort) 방식입니다.
    pub async fn register(&self, username: &str, password: &str, email: &str) -> Result<String, AccountError> {
        let start_time = std::time::Instant::now();

        let credential = PasswordCredential::derive(password, None);
        log::debug!("Password hashing took: {:?}", start_time.elapsed());

        let user = User::new(
            username.to_string(),
            email.to_string(),
            credential.password_hash,
            credential.salt,
        );

        match self.store.insert(&user).await {
            Ok(id) => {
                log::info!("✅ 사용자 등록 완료 - username: {}, id: {}", username, id);
                Ok(id)
            }
            Err(StoreError::DuplicateKey(detail)) => {
                log::debug!("중복 키 충돌 - username: {}, detail: {}", username, detail);
                Err(self.classify_conflict(username, email).await?)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn classify_conflict(&self, username: &str, email: &str) -> Result<AccountError, AccountError> {
        if self.store.find_one(&AccountFilter::Username(username.to_string())).await?.is_some() {
            return Ok(AccountError::UsernameExists);
        }

        if self.store.find_one(&AccountFilter::Email(email.to_string())).await?.is_some() {
            return Ok(AccountError::EmailExists);
        }

        log::warn!("⚠️ 중복 키 충돌 원인을 판별하지 못했습니다 - username: {}", username);
        Ok(AccountError::RegistrationFailed)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<UserResponse>, AccountError> {
        Ok(self
            .find_account(AccountFilter::Username(username.to_string()))
            .await?
            .map(UserResponse::from))
    }

    pub async fn get_by_email(&self, email: &str) -> Result<Option<UserResponse>, AccountError> {
        Ok(self
            .find_account(AccountFilter::Email(email.to_string()))
            .await?
            .map(UserResponse::from))
    }

    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AccountError> {
        let users = self.store.list_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// 이메일 및/또는 비밀번호 수정
    ///
    /// 확인 순서는 사용자 존재 → 이메일 충돌 → 빈 요청입니다.
    /// 비밀번호는 항상 새 솔트로 다시 해싱하며 기존 솔트를 재사용하지 않습니다.
    pub async fn update(&self, username: &str, update: AccountUpdate) -> Result<UpdateOutcome, AccountError> {
        if self.find_account(AccountFilter::Username(username.to_string())).await?.is_none() {
            return Err(AccountError::NotFound);
        }

        if let Some(email) = &update.email {
            let taken = self
                .find_account(AccountFilter::EmailOwnedByOther {
                    email: email.clone(),
                    username: username.to_string(),
                })
                .await?;

            if taken.is_some() {
                return Err(AccountError::EmailInUse);
            }
        }

        if update.is_empty() {
            return Ok(UpdateOutcome::Unchanged);
        }

        let mut changes = AccountChanges::default();
        let mut updated_fields = Vec::new();

        if let Some(email) = update.email {
            changes.email = Some(email);
            updated_fields.push(UpdatedField::Email);
        }
        if let Some(password) = update.password {
            let credential = PasswordCredential::derive(&password, None);
            changes.password_hash = Some(credential.password_hash);
            changes.salt = Some(credential.salt);
            updated_fields.push(UpdatedField::Password);
        }

        let modified = match self.store.update_fields(username, &changes).await {
            Ok(count) => count,
            // 확인 직후 다른 요청이 같은 이메일을 선점한 경우
            Err(StoreError::DuplicateKey(_)) => return Err(AccountError::EmailInUse),
            Err(e) => return Err(e.into()),
        };

        if modified == 0 {
            return Err(AccountError::UpdateFailed);
        }

        let user = self
            .get_by_username(username)
            .await?
            .ok_or(AccountError::NotFound)?;

        log::info!("사용자 정보 수정 완료 - username: {}, fields: {:?}", username, updated_fields);

        Ok(UpdateOutcome::Updated { user, updated_fields })
    }

    pub async fn delete(&self, username: &str) -> Result<(), AccountError> {
        let deleted = self.store.delete(username).await?;

        if deleted == 0 {
            return Err(AccountError::NotFound);
        }

        log::info!("사용자 삭제 완료 - username: {}", username);
        Ok(())
    }

    /// 사용자명/비밀번호 인증
    ///
    /// 인증 실패는 에러가 아니라 `Ok(None)`입니다.
    /// 존재하지 않는 사용자와 잘못된 비밀번호를 구분하지 않습니다.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<UserResponse>, AccountError> {
        let Some(user) = self.find_account(AccountFilter::Username(username.to_string())).await? else {
            return Ok(None);
        };

        let verify_start = std::time::Instant::now();
        let is_valid = PasswordCredential::verify(&user.password_hash, &user.salt, password);
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        Ok(is_valid.then(|| UserResponse::from(user)))
    }

    /// 민감 필드를 포함한 조회 (서비스 내부 전용)
    async fn find_account(&self, filter: AccountFilter) -> Result<Option<User>, AccountError> {
        Ok(self.store.find_one(&filter).await?)
    }
}
