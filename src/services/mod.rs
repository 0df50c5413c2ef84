//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 전역 싱글톤이 아니라 `main`에서 명시적으로 생성되어
//! [`AppState`](crate::core::AppState)를 통해 핸들러에 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = Arc::new(UserService::new(store));
//! ```

pub mod users;
