//! # 비밀번호 자격 증명
//!
//! 평문 비밀번호를 저장 가능한 솔트 해시로 바꾸고, 나중에 평문을 저장된 쌍과 대조합니다.
//!
//! ## 알고리즘
//!
//! | 항목 | 값 |
//! |------|----|
//! | KDF | PBKDF2-HMAC-SHA256 |
//! | 반복 횟수 | 100,000 |
//! | 솔트 | OS 난수 16바이트 |
//! | 출력 | 32바이트 |
//! | 인코딩 | 솔트, 해시 모두 소문자 hex |
//!
//! 파라미터는 [`PasswordConfig`]에 고정되어 있으며 저장소 전체가 같은 값을 사용합니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let credential = PasswordCredential::derive("pass123", None);
//! assert!(PasswordCredential::verify(&credential.password_hash, &credential.salt, "pass123"));
//! ```

use constant_time_eq::constant_time_eq;
use hmac::Hmac;
use pbkdf2::pbkdf2;
use rand::{rngs::OsRng, RngCore};
use sha2::Sha256;
use crate::config::PasswordConfig;

/// 유도 결과 (hex 인코딩된 솔트와 해시)
#[derive(Clone, PartialEq, Eq)]
pub struct DerivedCredential {
    pub salt: String,
    pub password_hash: String,
}

impl std::fmt::Debug for DerivedCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("DerivedCredential { .. }")
    }
}

pub struct PasswordCredential;

impl PasswordCredential {
    /// 비밀번호 해시 유도
    ///
    /// `salt`가 없으면 새 난수 솔트를 생성합니다.
    /// 같은 `(password, salt)`에 대해 항상 같은 결과를 냅니다.
    pub fn derive(password: &str, salt: Option<&[u8]>) -> DerivedCredential {
        let generated;
        let salt = match salt {
            Some(salt) => salt,
            None => {
                generated = Self::generate_salt();
                &generated[..]
            }
        };

        let hash = Self::compute(password, salt);

        DerivedCredential {
            salt: hex::encode(salt),
            password_hash: hex::encode(hash),
        }
    }

    /// 저장된 해시/솔트 쌍과 평문 비밀번호 대조
    ///
    /// 저장된 값이 잘못된 hex인 경우를 포함해 어떤 실패도 `false`로 처리합니다.
    pub fn verify(stored_hash: &str, stored_salt: &str, provided_password: &str) -> bool {
        let Ok(salt) = hex::decode(stored_salt) else {
            return false;
        };
        let Ok(expected) = hex::decode(stored_hash) else {
            return false;
        };

        let computed = Self::compute(provided_password, &salt);
        constant_time_eq(&computed, &expected)
    }

    pub fn generate_salt() -> [u8; PasswordConfig::SALT_LENGTH] {
        let mut salt = [0u8; PasswordConfig::SALT_LENGTH];
        OsRng.fill_bytes(&mut salt);
        salt
    }

    fn compute(password: &str, salt: &[u8]) -> [u8; PasswordConfig::HASH_LENGTH] {
        let mut hash = [0u8; PasswordConfig::HASH_LENGTH];
        pbkdf2::<Hmac<Sha256>>(
            password.as_bytes(),
            salt,
            PasswordConfig::KDF_ITERATIONS,
            &mut hash,
        );
        hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_is_deterministic_for_fixed_salt() {
        let salt = [7u8; 16];
        let first = PasswordCredential::derive("pass123", Some(&salt));
        let second = PasswordCredential::derive("pass123", Some(&salt));

        assert_eq!(first, second);
        assert_eq!(first.salt, hex::encode(salt));
        assert_eq!(first.password_hash.len(), PasswordConfig::HASH_LENGTH * 2);
    }

    #[test]
    fn test_distinct_salts_give_distinct_hashes() {
        let s1 = PasswordCredential::generate_salt();
        let s2 = PasswordCredential::generate_salt();
        assert_ne!(s1, s2);

        let h1 = PasswordCredential::derive("pass123", Some(&s1));
        let h2 = PasswordCredential::derive("pass123", Some(&s2));
        assert_ne!(h1.password_hash, h2.password_hash);
    }

    #[test]
    fn test_generated_salt_is_sixteen_bytes() {
        let credential = PasswordCredential::derive("pass123", None);
        assert_eq!(hex::decode(&credential.salt).unwrap().len(), 16);
    }

    #[test]
    fn test_verify_accepts_correct_and_rejects_wrong_password() {
        let credential = PasswordCredential::derive("pass123", None);

        assert!(PasswordCredential::verify(&credential.password_hash, &credential.salt, "pass123"));
        assert!(!PasswordCredential::verify(&credential.password_hash, &credential.salt, "pass123x"));
    }

    #[test]
    fn test_hash_only_verifies_with_its_own_salt() {
        let credential = PasswordCredential::derive("pass123", None);
        let other_salt = hex::encode(PasswordCredential::generate_salt());

        assert!(!PasswordCredential::verify(&credential.password_hash, &other_salt, "pass123"));
    }

    #[test]
    fn test_verify_fails_closed_on_malformed_hex() {
        let credential = PasswordCredential::derive("pass123", None);

        assert!(!PasswordCredential::verify(&credential.password_hash, "not-valid-hex", "pass123"));
        assert!(!PasswordCredential::verify("zz", &credential.salt, "pass123"));
        assert!(!PasswordCredential::verify("h", "s", "pass123"));
        assert!(!PasswordCredential::verify("", "", ""));
    }

    #[test]
    fn test_known_vector() {
        // PBKDF2-HMAC-SHA256("password", "salt", 100000, 32)
        let credential = PasswordCredential::derive("password", Some(b"salt"));
        assert_eq!(
            credential.password_hash,
            "0394a2ede332c9a13eb82e9b24631604c31df978b4e2f0fbd2c549944f9d79a5"
        );
    }

    #[test]
    fn test_verify_rejects_truncated_stored_hash() {
        let credential = PasswordCredential::derive("pass123", None);
        let truncated = &credential.password_hash[..credential.password_hash.len() - 2];

        assert!(!PasswordCredential::verify(truncated, &credential.salt, "pass123"));
    }
}
