//! # 계정 이벤트 발행기
//!
//! 계정 생명주기 이벤트를 브로커로 보내는 최선 노력(best-effort) 발행기입니다.
//!
//! ## 상태 전이
//!
//! ```text
//!   ┌──────────────┐  connect()   ┌────────────┐   성공   ┌───────────┐
//!   │ Disconnected │ ───────────► │ Connecting │ ───────► │ Connected │
//!   └──────────────┘              └────────────┘          └───────────┘
//!          ▲                            │ 실패                  │ 전송 오류
//!          └────────────────────────────┴───────────────────────┘
//! ```
//!
//! ## 실패 규칙
//!
//! 모든 실패는 로그로 남기고 `false`로만 알립니다. 발행 실패가 계정 연산을
//! 되돌리거나 막아서는 안 됩니다. 발행 중 오류가 나면 연결을 닫고 정확히 한 번
//! 재연결한 뒤, 재연결 결과와 관계없이 해당 이벤트는 버립니다 (재시도 큐 없음).
//!
//! ## 동시성
//!
//! 전송 핸들은 단일 작성자 자원입니다. 모든 전송 호출은 하나의 비동기 뮤텍스로
//! 직렬화되고 호출마다 설정된 타임아웃이 적용됩니다.
//! 연결 상태는 뮤텍스 밖의 원자 변수에 두므로 [`EventPublisher::state`]는 진행 중인
//! 발행을 기다리지 않습니다.

use std::future::Future;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;
use log::{error, info, warn};
use serde_json::{json, Value};
use tokio::sync::Mutex;
use crate::{
    config::BrokerConfig,
    domain::events::{EventType, LifecycleEvent},
    errors::TransportError,
};
use super::redis_transport::RedisStreamTransport;
use super::transport::{EventTransport, OutboundMessage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConnectionState {
    Disconnected = 0,
    Connecting = 1,
    Connected = 2,
}

impl ConnectionState {
    fn from_u8(value: u8) -> Self {
        match value {
            1 => ConnectionState::Connecting,
            2 => ConnectionState::Connected,
            _ => ConnectionState::Disconnected,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Connected => "connected",
        }
    }
}

pub struct EventPublisher {
    /// `None`이면 비활성 모드
    endpoint: Option<String>,
    destination: String,
    call_timeout: Duration,
    state: AtomicU8,
    transport: Mutex<Box<dyn EventTransport>>,
}

impl EventPublisher {
    pub fn new(
        endpoint: Option<String>,
        destination: impl Into<String>,
        call_timeout: Duration,
        transport: Box<dyn EventTransport>,
    ) -> Self {
        Self {
            endpoint,
            destination: destination.into(),
            call_timeout,
            state: AtomicU8::new(ConnectionState::Disconnected as u8),
            transport: Mutex::new(transport),
        }
    }

    /// 환경 변수 설정으로 Redis Streams 발행기 생성
    pub fn from_config() -> Self {
        Self::new(
            BrokerConfig::url(),
            BrokerConfig::destination(),
            BrokerConfig::publish_timeout(),
            Box::new(RedisStreamTransport::new(BrokerConfig::stream_max_len())),
        )
    }

    /// 엔드포인트 없이 항상 `false`를 반환하는 발행기
    pub fn disabled() -> Self {
        Self::new(
            None,
            crate::config::DEFAULT_EVENT_DESTINATION,
            Duration::from_secs(1),
            Box::new(RedisStreamTransport::new(0)),
        )
    }

    pub fn is_enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// 현재 연결 상태 (전송 뮤텍스를 잡지 않음)
    pub fn state(&self) -> ConnectionState {
        ConnectionState::from_u8(self.state.load(Ordering::Acquire))
    }

    fn set_state(&self, state: ConnectionState) {
        self.state.store(state as u8, Ordering::Release);
    }

    /// 브로커 연결 및 발행 대상 선언
    ///
    /// 엔드포인트가 설정되지 않은 경우는 오류가 아니라 비활성 모드이며 `false`를 반환합니다.
    pub async fn connect(&self) -> bool {
        let mut transport = self.transport.lock().await;
        self.connect_locked(&mut **transport).await
    }

    async fn connect_locked(&self, transport: &mut dyn EventTransport) -> bool {
        let Some(endpoint) = self.endpoint.as_deref() else {
            warn!("⚠️ EVENT_BROKER_URL이 설정되지 않아 이벤트 발행을 건너뜁니다");
            return false;
        };

        self.set_state(ConnectionState::Connecting);

        let connected = match self.bounded(transport.connect(endpoint)).await {
            Ok(()) => self.bounded(transport.declare_destination(&self.destination)).await,
            Err(e) => Err(e),
        };

        match connected {
            Ok(()) => {
                self.set_state(ConnectionState::Connected);
                info!("✅ 이벤트 브로커 연결 완료 - destination: {}", self.destination);
                true
            }
            Err(e) => {
                transport.close().await;
                self.set_state(ConnectionState::Disconnected);
                error!("❌ 이벤트 브로커 연결 실패: {}", e);
                false
            }
        }
    }

    /// 이벤트 발행
    ///
    /// # 반환값
    ///
    /// * `true` - 브로커가 메시지를 수락함
    /// * `false` - 비활성 모드, 연결 실패, 전송 오류 (모두 로그로만 남김)
    pub async fn publish(&self, event_type: EventType, data: Value) -> bool {
        let mut transport = self.transport.lock().await;

        if self.state() != ConnectionState::Connected && !self.connect_locked(&mut **transport).await {
            return false;
        }

        let event = LifecycleEvent::new(event_type, data);
        let body = match event.to_json() {
            Ok(body) => body,
            Err(e) => {
                error!("이벤트 직렬화 실패 {}: {}", event_type, e);
                return false;
            }
        };
        let message = OutboundMessage::persistent_json(event_type.as_str(), body);

        match self.bounded(transport.publish(&self.destination, &message)).await {
            Ok(()) => {
                info!("📨 이벤트 발행: {} ({})", event_type, event.event_id);
                true
            }
            Err(e) => {
                error!("❌ 이벤트 발행 실패 {}: {}", event_type, e);

                transport.close().await;
                self.set_state(ConnectionState::Disconnected);
                // 재연결은 한 번만, 실패한 이벤트는 버림
                self.connect_locked(&mut **transport).await;
                false
            }
        }
    }

    pub async fn close(&self) {
        let mut transport = self.transport.lock().await;
        transport.close().await;
        self.set_state(ConnectionState::Disconnected);
    }

    pub async fn publish_registration(&self, user_id: &str, username: &str, email: &str) -> bool {
        self.publish(
            EventType::UserRegistration,
            json!({ "user_id": user_id, "username": username, "email": email }),
        )
        .await
    }

    pub async fn publish_login(&self, user_id: &str, username: &str) -> bool {
        self.publish(
            EventType::UserLogin,
            json!({ "user_id": user_id, "username": username }),
        )
        .await
    }

    /// `updated_fields`는 필드 이름 → 새 값 매핑입니다. 비밀번호 값은 절대 포함하지 않습니다.
    pub async fn publish_update(&self, user_id: &str, username: &str, updated_fields: Value) -> bool {
        self.publish(
            EventType::UserUpdate,
            json!({ "user_id": user_id, "username": username, "updated_fields": updated_fields }),
        )
        .await
    }

    pub async fn publish_deletion(&self, user_id: &str, username: &str) -> bool {
        self.publish(
            EventType::UserDeletion,
            json!({ "user_id": user_id, "username": username }),
        )
        .await
    }

    pub async fn publish_logout(&self, user_id: &str, username: &str) -> bool {
        self.publish(
            EventType::UserLogout,
            json!({ "user_id": user_id, "username": username }),
        )
        .await
    }

    async fn bounded<F>(&self, call: F) -> Result<(), TransportError>
    where
        F: Future<Output = Result<(), TransportError>>,
    {
        tokio::time::timeout(self.call_timeout, call)
            .await
            .unwrap_or(Err(TransportError::Timeout(self.call_timeout)))
    }
}
