//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 계정 서비스 호출로 바꾸고 결과를 응답으로 변환하는 핸들러 모음입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈)                 ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   UserService / EventPublisher      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   AccountStore                      ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 규칙
//!
//! 1. 요청 본문은 `validator`로 먼저 검증하고 실패 시 `AppError::ValidationError`(400)
//! 2. 서비스 호출 결과의 [`AccountError`](crate::errors::AccountError)는 `?`로 [`AppError`](crate::errors::AppError)로 변환
//! 3. 변경 연산이 성공한 뒤에 이벤트를 발행하고 발행 결과는 무시
//! 4. 응답에는 항상 [`UserResponse`](crate::domain::dto::users::response::UserResponse)만 사용
//!
//! ```rust,ignore
//! #[post("/register")]
//! pub async fn register(
//!     state: web::Data<AppState>,
//!     payload: web::Json<RegisterRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     payload.validate().map_err(|e| AppError::ValidationError(e.to_string()))?;
//!     let id = state.user_service.register(&payload.username, &payload.password, &payload.email).await?;
//!     state.publisher.publish_registration(&id, &payload.username, &payload.email).await;
//!     Ok(HttpResponse::Created().json(json!({ "id": id })))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - [`users`] - 등록, 조회, 수정, 삭제
//! - [`auth`] - 로그인, 로그아웃

pub mod users;
pub mod auth;
