//! 계정 생명주기 이벤트
//!
//! 브로커로 전송되는 메시지 본문입니다.
//!
//! ```json
//! {
//!   "event_id": "4b1c7f6e-2d1a-4f35-9a0e-8e3f1f0f2c11",
//!   "event_type": "user_registration",
//!   "timestamp": "2024-06-01T10:00:00.123456Z",
//!   "data": { "user_id": "...", "username": "bob", "email": "bob@example.com" }
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    UserRegistration,
    UserLogin,
    UserUpdate,
    UserDeletion,
    UserLogout,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::UserRegistration => "user_registration",
            EventType::UserLogin => "user_login",
            EventType::UserUpdate => "user_update",
            EventType::UserDeletion => "user_deletion",
            EventType::UserLogout => "user_logout",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 한 번의 계정 변경을 기술하는 불변 레코드
///
/// 발행 시도 시점에 생성되며 저장되지 않습니다.
/// `event_id`는 소비자가 중복 수신을 걸러낼 때 사용합니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LifecycleEvent {
    pub event_id: Uuid,
    pub event_type: EventType,
    pub timestamp: DateTime<Utc>,
    pub data: Value,
}

impl LifecycleEvent {
    pub fn new(event_type: EventType, data: Value) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_type,
            timestamp: Utc::now(),
            data,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
