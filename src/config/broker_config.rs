//! # Event Broker Configuration Module
//!
//! 계정 생명주기 이벤트를 발행할 브로커 관련 설정을 관리합니다.
//!
//! ## 환경 변수
//!
//! ```bash
//! # 브로커 엔드포인트 (미설정 시 이벤트 발행 비활성화)
//! EVENT_BROKER_URL=redis://localhost:6379
//!
//! # 발행 대상 스트림 이름
//! EVENT_DESTINATION=user_events
//!
//! # 전송 호출당 타임아웃 (초)
//! EVENT_PUBLISH_TIMEOUT_SECS=3
//!
//! # 스트림 최대 길이 (근사치)
//! EVENT_STREAM_MAX_LEN=100000
//! ```
//!
//! 브로커가 설정되지 않아도 서비스는 정상 동작해야 하므로
//! `EVENT_BROKER_URL`이 비어 있으면 `None`을 반환하고 발행기가 비활성 모드로 동작합니다.

use std::env;
use std::time::Duration;

/// 기본 발행 대상 이름
pub const DEFAULT_EVENT_DESTINATION: &str = "user_events";

pub struct BrokerConfig;

impl BrokerConfig {
    pub fn url() -> Option<String> {
        env::var("EVENT_BROKER_URL")
            .ok()
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
    }

    pub fn destination() -> String {
        env::var("EVENT_DESTINATION")
            .ok()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_EVENT_DESTINATION.to_string())
    }

    pub fn publish_timeout() -> Duration {
        let secs = env::var("EVENT_PUBLISH_TIMEOUT_SECS")
            .unwrap_or_else(|_| "3".to_string())
            .parse::<u64>()
            .unwrap_or(3);

        Duration::from_secs(secs.max(1))
    }

    pub fn stream_max_len() -> usize {
        env::var("EVENT_STREAM_MAX_LEN")
            .unwrap_or_else(|_| "100000".to_string())
            .parse()
            .unwrap_or(100_000)
    }
}
