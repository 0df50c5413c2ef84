//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당합니다.
//!
//! # Features
//!
//! - 사용자 등록 및 중복 충돌 분류
//! - PBKDF2 비밀번호 해싱 및 인증
//! - 이메일/비밀번호 부분 수정
//! - 계정 삭제, 조회, 목록
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(store);
//! let id = user_service.register("bob", "pass123", "bob@example.com").await?;
//! ```

pub mod password;
pub mod user_service;

pub use password::{DerivedCredential, PasswordCredential};
pub use user_service::{AccountUpdate, UpdateOutcome, UpdatedField, UserService};
