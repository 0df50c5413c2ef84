//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! # Features
//!
//! - [`AccountStore`](users::AccountStore) 계약 기반의 저장소 추상화
//! - MongoDB 구현체와 메모리 구현체
//! - 명시적 생성자 주입 (`Arc<dyn AccountStore>`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::MongoUserRepository;
//!
//! let user_repo = MongoUserRepository::new(database);
//! user_repo.create_indexes().await?;
//! ```

pub mod users;
