//! # Configuration Module
//!
//! 환경 변수 기반 설정을 관리합니다.
//! `PROFILE`에 따라 `main`에서 `.env.dev` / `.env.prod` 파일을 먼저 로드한 뒤 값을 읽습니다.
//!
//! - [`data_config`] - 서버, 계정 저장소, 비밀번호 해싱 파라미터
//! - [`broker_config`] - 생명주기 이벤트 브로커

pub mod data_config;
pub mod broker_config;

pub use data_config::*;
pub use broker_config::*;
