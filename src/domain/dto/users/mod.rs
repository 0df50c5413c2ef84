//! # 사용자 DTO 모듈
//!
//! - [`request`] - 회원가입, 로그인/로그아웃, 정보 수정 요청
//! - [`response`] - 민감 필드를 제외한 사용자 응답

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
