//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 환경 및 비밀번호 해싱 관련 설정을 관리합니다.

use std::env;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    pub fn current() -> Self {
        Self::from_str(
            &env::var("ENVIRONMENT")
                .unwrap_or_else(|_| env::var("PROFILE").unwrap_or_else(|_| "production".to_string())),
        )
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 비밀번호 키 유도(KDF) 파라미터
///
/// 저장된 모든 자격 증명은 같은 알고리즘과 반복 횟수로 만들어졌다고 가정합니다.
/// 자격 증명별 버전 태그가 없으므로 값을 바꾸면 기존 해시는 더 이상 검증되지 않습니다.
pub struct PasswordConfig;

impl PasswordConfig {
    /// 알고리즘 식별자
    pub const KDF_ALGORITHM: &'static str = "pbkdf2-sha256";
    /// PBKDF2 반복 횟수
    pub const KDF_ITERATIONS: u32 = 100_000;
    /// 솔트 길이 (바이트)
    pub const SALT_LENGTH: usize = 16;
    /// 유도된 해시 길이 (바이트)
    pub const HASH_LENGTH: usize = 32;
}

pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn workers() -> usize {
        env::var("HTTP_WORKERS")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|w| *w > 0)
            .unwrap_or(4)
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 계정 저장소 백엔드 종류
#[derive(Debug, Clone, PartialEq)]
pub enum StoreBackend {
    MongoDb,
    Memory,
}

impl StoreBackend {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StoreBackend::Memory,
            _ => StoreBackend::MongoDb,
        }
    }
}

pub struct StoreConfig;

impl StoreConfig {
    /// `ACCOUNT_STORE` 환경 변수 (기본값: mongodb)
    pub fn backend() -> StoreBackend {
        StoreBackend::from_str(&env::var("ACCOUNT_STORE").unwrap_or_else(|_| "mongodb".to_string()))
    }

    pub fn mongodb_uri() -> String {
        env::var("MONGODB_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
    }

    pub fn database_name() -> String {
        env::var("DATABASE_NAME").unwrap_or_else(|_| "user_accounts".to_string())
    }

    /// 연결 및 서버 선택 타임아웃
    pub fn timeout() -> Duration {
        let secs = env::var("MONGODB_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|s| *s > 0)
            .unwrap_or(5);

        Duration::from_secs(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(
            Environment::from_str("development"),
            Environment::Development
        );
        assert_eq!(Environment::from_str("dev"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_password_config_constants() {
        assert_eq!(PasswordConfig::KDF_ITERATIONS, 100_000);
        assert_eq!(PasswordConfig::SALT_LENGTH, 16);
        assert_eq!(PasswordConfig::KDF_ALGORITHM, "pbkdf2-sha256");
    }

    #[test]
    fn test_store_backend_from_string() {
        assert_eq!(StoreBackend::from_str("memory"), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str("In-Memory"), StoreBackend::Memory);
        assert_eq!(StoreBackend::from_str("mongodb"), StoreBackend::MongoDb);
        assert_eq!(StoreBackend::from_str(""), StoreBackend::MongoDb);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }

        if env::var("HTTP_WORKERS").is_err() {
            assert_eq!(ServerConfig::workers(), 4);
        }
    }
}
