//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환하고
//! `validator` 크레이트로 스키마 제약을 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`)
//! 2. **형식 검증**: 길이, 이메일 형식 (`validator`)
//! 3. **유일성**: 저장소의 유니크 인덱스 + 서비스 계층 분류
//!
//! 비밀번호를 담는 DTO는 `Debug`를 직접 구현하여 평문이 로그에 남지 않게 합니다.

pub mod register_request;
pub mod auth_request;
pub mod update_user_request;

pub use register_request::RegisterRequest;
pub use auth_request::{LoginRequest, LogoutRequest};
pub use update_user_request::UpdateUserRequest;
