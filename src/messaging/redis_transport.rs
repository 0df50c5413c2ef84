//! # Redis Streams 전송 구현
//!
//! 계정 이벤트를 Redis Stream 항목으로 추가합니다.
//!
//! ## 전달 특성
//!
//! | 항목 | 동작 |
//! |------|------|
//! | 팬아웃 | 스트림의 모든 컨슈머 그룹이 각 항목을 받음 |
//! | 내구성 | Redis 영속성 설정(AOF/RDB)에 따름 |
//! | 보존 | `XADD ... MAXLEN ~ n`으로 대략 n건 유지 |
//!
//! ## 항목 필드
//!
//! ```text
//! XADD user_events MAXLEN ~ 100000 *
//!     event_type    user_registration
//!     content_type  application/json
//!     delivery_mode persistent
//!     payload       {"event_id":"...","event_type":"user_registration",...}
//! ```

use async_trait::async_trait;
use log::{debug, info};
use redis::aio::MultiplexedConnection;
use redis::Client;
use crate::errors::TransportError;
use super::transport::{EventTransport, OutboundMessage};

pub struct RedisStreamTransport {
    connection: Option<MultiplexedConnection>,
    max_len: usize,
}

impl RedisStreamTransport {
    pub fn new(max_len: usize) -> Self {
        Self {
            connection: None,
            max_len,
        }
    }

    fn connection(&mut self) -> Result<&mut MultiplexedConnection, TransportError> {
        self.connection.as_mut().ok_or(TransportError::NotConnected)
    }
}

#[async_trait]
impl EventTransport for RedisStreamTransport {
    async fn connect(&mut self, endpoint: &str) -> Result<(), TransportError> {
        let client = Client::open(endpoint)?;

        // 연결 테스트 - PING 명령으로 서버 가용성 확인
        let mut conn = client.get_multiplexed_async_connection().await?;
        redis::cmd("PING").query_async::<()>(&mut conn).await?;

        self.connection = Some(conn);
        info!("✅ Redis 브로커 연결 성공");
        Ok(())
    }

    async fn declare_destination(&mut self, destination: &str) -> Result<(), TransportError> {
        let conn = self.connection()?;

        let key_type: String = redis::cmd("TYPE")
            .arg(destination)
            .query_async(conn)
            .await?;

        // 스트림은 첫 XADD에서 생성됨
        match key_type.as_str() {
            "stream" | "none" => {
                debug!("발행 대상 확인 완료 - {}: {}", destination, key_type);
                Ok(())
            }
            other => Err(TransportError::Destination(format!(
                "key '{}' exists with type '{}'",
                destination, other
            ))),
        }
    }

    async fn publish(&mut self, destination: &str, message: &OutboundMessage) -> Result<(), TransportError> {
        let max_len = self.max_len;
        let conn = self.connection()?;

        let _entry_id: String = redis::cmd("XADD")
            .arg(destination)
            .arg("MAXLEN")
            .arg("~")
            .arg(max_len)
            .arg("*")
            .arg("event_type")
            .arg(&message.event_type)
            .arg("content_type")
            .arg(message.content_type)
            .arg("delivery_mode")
            .arg(message.delivery_mode.as_str())
            .arg("payload")
            .arg(&message.body)
            .query_async(conn)
            .await?;

        Ok(())
    }

    async fn close(&mut self) {
        if self.connection.take().is_some() {
            info!("Redis 브로커 연결 종료");
        }
    }
}
