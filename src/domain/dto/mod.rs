//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의하는 모듈입니다.
//!
//! | 구분 | 모듈 | 역할 |
//! |------|------|------|
//! | 요청 | `users::request` | HTTP 요청 본문 매핑 + `validator` 검증 |
//! | 응답 | `users::response` | HTTP 응답 본문 매핑 |

pub mod users;

// 공통 re-exports
pub use users::*;
