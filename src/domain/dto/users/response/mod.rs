//! # 사용자 관련 응답 DTO 모듈
//!
//! 비즈니스 로직 처리 결과를 클라이언트에게 전달하는 응답 객체입니다.
//!
//! ## 설계 철학
//!
//! - **데이터 은닉**: 비밀번호 해시와 솔트는 어떤 응답에도 포함하지 않음
//! - **일관성**: 모든 응답이 snake_case JSON 필드를 사용
//!
//! ## JSON 응답 예제
//!
//! ```json
//! {
//!   "id": "507f1f77bcf86cd799439011",
//!   "username": "bob",
//!   "email": "bob@example.com",
//!   "created_at": "2024-06-01T10:00:00Z"
//! }
//! ```

pub mod user_response;

pub use user_response::{UserResponse, RegisterResponse, LoginResponse, MessageResponse};
