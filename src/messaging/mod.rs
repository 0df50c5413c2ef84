//! 이벤트 메시징 모듈
//!
//! 계정 생명주기 이벤트를 외부 브로커로 발행합니다.
//!
//! # 구성
//!
//! - [`publisher`] - 연결 상태와 재연결 규칙을 가진 [`EventPublisher`]
//! - [`transport`] - 브로커 전송 계약 [`EventTransport`]
//! - [`redis_transport`] - Redis Streams 구현
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::messaging::EventPublisher;
//!
//! let publisher = EventPublisher::from_config();
//! publisher.connect().await;
//! publisher.publish_registration(&id, "bob", "bob@example.com").await;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! EVENT_BROKER_URL=redis://localhost:6379  # 미설정 시 발행 비활성화
//! ```

pub mod publisher;
pub mod redis_transport;
pub mod transport;

pub use publisher::{ConnectionState, EventPublisher};
pub use redis_transport::RedisStreamTransport;
pub use transport::{DeliveryMode, EventTransport, OutboundMessage};
