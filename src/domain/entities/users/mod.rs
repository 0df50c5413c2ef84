//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::User;
//!
//! let credential = PasswordCredential::derive("pass123", None);
//! let user = User::new(
//!     "bob".to_string(),
//!     "bob@example.com".to_string(),
//!     credential.password_hash,
//!     credential.salt,
//! );
//! ```

pub mod user;

pub use user::User;
