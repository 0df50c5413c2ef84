//! # Domain Entities Module
//!
//! 저장소 문서와 직접 매핑되는 엔티티를 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장소 문서)
//! ├── events/       ← 생명주기 이벤트
//! └── dto/          ← 데이터 전송 객체
//! ```
//!
//! 엔티티는 자격 증명(해시, 솔트)을 포함하므로 HTTP 응답이나 이벤트 페이로드로
//! 직접 내보내지 않습니다. 외부로 나가는 모든 표현은 DTO를 거칩니다.
//!
//! ## MongoDB 매핑
//!
//! | 필드 | BSON | 비고 |
//! |------|------|------|
//! | `id` | `_id: ObjectId` | 삽입 시 자동 할당 |
//! | `username` | `string` | unique index `username_unique` |
//! | `email` | `string` | unique index `email_unique` |
//! | `password_hash`, `salt` | `string` (hex) | 목록 조회 프로젝션에서 제외 |
//! | `created_at` | `date` | index `created_at_desc` |

pub mod users;
