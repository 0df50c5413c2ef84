//! 사용자 계정 서비스
//!
//! 계정 등록, 인증, 조회, 수정, 삭제와 계정 생명주기 이벤트 발행을 제공하는 Rust 서비스입니다.
//!
//! # Features
//!
//! - **비밀번호 자격 증명**: PBKDF2-HMAC-SHA256 (100,000회, 16바이트 솔트)
//! - **계정 관리**: username/email 독립 유니크 제약과 충돌 분류
//! - **이벤트 발행**: Redis Streams 기반 최선 노력 발행, 한 번의 재연결
//! - **명시적 DI**: `main`에서 생성한 [`core::AppState`]를 핸들러에 주입
//! - **MongoDB**: 계정 영구 저장 (개발용 메모리 저장소 선택 가능)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 이벤트 발행 호출
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │    Services     │     │  EventPublisher  │ → Redis Streams
//! └─────────────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← AccountStore (MongoDB | Memory)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_account_service::repositories::users::InMemoryUserRepository;
//! use user_account_service::services::users::UserService;
//!
//! let user_service = UserService::new(Arc::new(InMemoryUserRepository::new()));
//! let id = user_service.register("bob", "pass123", "bob@example.com").await?;
//! let user = user_service.authenticate("bob", "pass123").await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod messaging;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
