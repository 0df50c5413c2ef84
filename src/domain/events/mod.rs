//! 계정 생명주기 이벤트 모듈

pub mod lifecycle_event;

pub use lifecycle_event::{EventType, LifecycleEvent};
