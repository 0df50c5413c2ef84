//! # Domain Layer
//!
//! 계정 서비스의 도메인 타입을 모아 둔 계층입니다.
//!
//! ```text
//! domain/
//! ├── entities/   ← 저장소 문서 (User)
//! ├── events/     ← 생명주기 이벤트 (LifecycleEvent, EventType)
//! └── dto/        ← HTTP 요청/응답 객체
//! ```

pub mod entities;
pub mod events;
pub mod dto;

pub use entities::users::User;
pub use events::*;
pub use dto::*;
