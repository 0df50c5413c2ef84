//! # 회원가입 요청 DTO
//!
//! ## 검증 규칙
//!
//! | 필드 | 규칙 |
//! |------|------|
//! | `username` | 2-50자 |
//! | `password` | 1-12자 |
//! | `email` | 이메일 형식 |
//!
//! 중복 여부는 저장소의 유니크 인덱스가 판단하며 서비스 계층이 결과를 분류합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(
        min = 2,
        max = 50,
        message = "사용자명은 2-50자 사이여야 합니다"
    ))]
    pub username: String,

    #[validate(length(
        min = 1,
        max = 12,
        message = "비밀번호는 1-12자 사이여야 합니다"
    ))]
    pub password: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,
}

// 비밀번호 평문이 로그에 남지 않도록 직접 구현
impl std::fmt::Debug for RegisterRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}
