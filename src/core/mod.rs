//! # Core Module
//!
//! 요청 처리 전반에서 공유되는 애플리케이션 상태를 정의합니다.
//!
//! ## 구성 흐름
//!
//! ```text
//! main
//!  ├─ AccountStore (MongoDB | Memory)
//!  ├─ UserService::new(store)
//!  ├─ EventPublisher::from_config() → connect()
//!  └─ AppState { user_service, publisher } → web::Data
//!                                              │
//!                                              ▼
//!                                          handlers
//! ```
//!
//! 모든 의존성은 생성 시점에 명시적으로 전달되며 런타임 조회나 전역 변수는 없습니다.

pub mod app_state;

pub use app_state::AppState;
