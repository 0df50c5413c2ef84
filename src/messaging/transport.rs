//! 브로커 전송 계약
//!
//! [`EventPublisher`](super::publisher::EventPublisher)는 이 트레이트를 통해서만 브로커와 통신합니다.
//! 운영 구현은 [`RedisStreamTransport`](super::redis_transport::RedisStreamTransport)입니다.

use async_trait::async_trait;
use crate::errors::TransportError;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// 메시지 전달 모드
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// 브로커 재시작 후에도 유지
    Persistent,
}

impl DeliveryMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMode::Persistent => "persistent",
        }
    }
}

/// 전송 계층으로 넘기는 메시지 한 건
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub event_type: String,
    pub content_type: &'static str,
    pub delivery_mode: DeliveryMode,
    /// JSON 직렬화된 [`LifecycleEvent`](crate::domain::LifecycleEvent)
    pub body: String,
}

impl OutboundMessage {
    pub fn persistent_json(event_type: impl Into<String>, body: String) -> Self {
        Self {
            event_type: event_type.into(),
            content_type: JSON_CONTENT_TYPE,
            delivery_mode: DeliveryMode::Persistent,
            body,
        }
    }
}

/// 브로커 연결 하나를 다루는 전송 핸들
///
/// 한 번에 하나의 호출자만 사용한다고 가정합니다 (`&mut self`).
/// 동시 접근 직렬화는 발행기의 책임입니다.
#[async_trait]
pub trait EventTransport: Send + Sync {
    async fn connect(&mut self, endpoint: &str) -> Result<(), TransportError>;

    /// 발행 대상이 존재하고 사용 가능한지 확인합니다 (없으면 생성 가능한 상태).
    async fn declare_destination(&mut self, destination: &str) -> Result<(), TransportError>;

    async fn publish(&mut self, destination: &str, message: &OutboundMessage) -> Result<(), TransportError>;

    /// 연결 해제. 연결되지 않은 상태에서 호출해도 됩니다.
    async fn close(&mut self);
}
