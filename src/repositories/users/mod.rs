//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`AccountStore`] 트레이트에만 의존하며,
//! `main`이 설정(`ACCOUNT_STORE`)에 따라 구현체를 선택해 주입합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{AccountStore, InMemoryUserRepository};
//!
//! let store: Arc<dyn AccountStore> = Arc::new(InMemoryUserRepository::new());
//! let user_service = UserService::new(store);
//! ```

pub mod account_store;
pub mod user_repo;
pub mod memory_repo;

pub use account_store::{AccountChanges, AccountFilter, AccountStore};
pub use user_repo::MongoUserRepository;
pub use memory_repo::InMemoryUserRepository;
