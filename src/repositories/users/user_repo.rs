//! # 사용자 리포지토리 구현 (MongoDB)
//!
//! [`AccountStore`] 계약의 MongoDB 구현체입니다.
//!
//! ## 특징
//!
//! - **컬렉션**: `users`
//! - **데이터 무결성**: `username`, `email` 유니크 인덱스가 중복을 차단
//! - **중복 감지**: 서버 에러 코드 11000을 [`StoreError::DuplicateKey`]로 변환
//! - **타임아웃**: 연결 및 서버 선택 타임아웃은 [`Database`] 생성 시, 호출별 타임아웃은
//!   `MONGODB_TIMEOUT_SECS`로 각 연산에 적용

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Document},
    error::{Error as MongoError, ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::{
    config::StoreConfig,
    db::Database,
    domain::entities::users::user::User,
    errors::StoreError,
};
use super::account_store::{AccountChanges, AccountFilter, AccountStore};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 인덱스
///
/// | 이름 | 키 | 속성 |
/// |------|----|------|
/// | `email_unique` | `email: 1` | UNIQUE |
/// | `username_unique` | `username: 1` | UNIQUE |
/// | `created_at_desc` | `created_at: -1` | - |
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Arc::new(Database::new().await?);
/// let repo = MongoUserRepository::new(database);
/// repo.create_indexes().await?;
///
/// let found = repo.find_one(&AccountFilter::Email("bob@example.com".into())).await?;
/// ```
pub struct MongoUserRepository {
    db: Arc<Database>,
    call_timeout: Duration,
}

impl MongoUserRepository {
    pub const COLLECTION_NAME: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self {
            db,
            call_timeout: StoreConfig::timeout(),
        }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION_NAME)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    /// 이미 중복 데이터가 있는 경우 유니크 인덱스 생성이 실패할 수 있으며,
    /// 호출자는 이 실패를 치명적으로 취급하지 않습니다.
    pub async fn create_indexes(&self) -> Result<(), StoreError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, username_index, created_at_index])
            .await
            .map_err(database_error)?;

        log::info!("✅ 인덱스 생성 완료 - {}.{}", self.db.database_name(), Self::COLLECTION_NAME);
        Ok(())
    }
}

#[async_trait]
impl AccountStore for MongoUserRepository {
    async fn find_one(&self, filter: &AccountFilter) -> Result<Option<User>, StoreError> {
        let query = async {
            self.collection()
                .find_one(filter_document(filter))
                .await
                .map_err(database_error)
        };

        bounded(self.call_timeout, query).await
    }

    async fn insert(&self, user: &User) -> Result<String, StoreError> {
        let query = async {
            self.collection()
                .insert_one(user)
                .await
                .map_err(write_error)
        };
        let result = bounded(self.call_timeout, query).await?;

        Ok(result
            .inserted_id
            .as_object_id()
            .map(|oid| oid.to_hex())
            .unwrap_or_else(|| result.inserted_id.to_string()))
    }

    async fn update_fields(&self, username: &str, changes: &AccountChanges) -> Result<u64, StoreError> {
        if changes.is_empty() {
            return Ok(0);
        }

        let query = async {
            self.collection()
                .update_one(doc! { "username": username }, doc! { "$set": changes_document(changes) })
                .await
                .map_err(write_error)
        };
        let result = bounded(self.call_timeout, query).await?;

        Ok(result.modified_count)
    }

    async fn delete(&self, username: &str) -> Result<u64, StoreError> {
        let query = async {
            self.collection()
                .delete_one(doc! { "username": username })
                .await
                .map_err(database_error)
        };
        let result = bounded(self.call_timeout, query).await?;

        Ok(result.deleted_count)
    }

    async fn list_all(&self) -> Result<Vec<User>, StoreError> {
        let query = async {
            let cursor = self.collection()
                .find(doc! {})
                .projection(doc! { "password_hash": 0, "salt": 0 })
                .sort(doc! { "created_at": -1 })
                .await
                .map_err(database_error)?;

            cursor.try_collect().await.map_err(database_error)
        };

        bounded(self.call_timeout, query).await
    }
}

fn filter_document(filter: &AccountFilter) -> Document {
    match filter {
        AccountFilter::Username(username) => doc! { "username": username },
        AccountFilter::Email(email) => doc! { "email": email },
        AccountFilter::EmailOwnedByOther { email, username } => doc! {
            "email": email,
            "username": { "$ne": username },
        },
    }
}

fn changes_document(changes: &AccountChanges) -> Document {
    let mut set_doc = Document::new();

    if let Some(email) = &changes.email {
        set_doc.insert("email", email);
    }
    if let Some(password_hash) = &changes.password_hash {
        set_doc.insert("password_hash", password_hash);
    }
    if let Some(salt) = &changes.salt {
        set_doc.insert("salt", salt);
    }

    set_doc
}

fn is_duplicate_key(error: &MongoError) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}

fn database_error(error: MongoError) -> StoreError {
    StoreError::Database(error.to_string())
}

fn write_error(error: MongoError) -> StoreError {
    if is_duplicate_key(&error) {
        StoreError::DuplicateKey(error.to_string())
    } else {
        database_error(error)
    }
}

/// 저장소 호출 하나에 타임아웃 적용
async fn bounded<T, F>(timeout: Duration, query: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, StoreError>>,
{
    tokio::time::timeout(timeout, query)
        .await
        .unwrap_or_else(|_| Err(StoreError::Database(format!("timeout after {:?}", timeout))))
}
