//! 사용자 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 계정 저장소, 계정 서비스, 이벤트 발행기를 초기화합니다.
//! 모든 의존성은 여기서 한 번 생성되어 [`AppState`]로 핸들러에 전달됩니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use user_account_service::config::{Environment, PasswordConfig, ServerConfig, StoreBackend, StoreConfig};
use user_account_service::core::AppState;
use user_account_service::db::Database;
use user_account_service::messaging::EventPublisher;
use user_account_service::repositories::users::{AccountStore, InMemoryUserRepository, MongoUserRepository};
use user_account_service::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 계정 서비스 시작중...");
    info!(
        "🔐 비밀번호 KDF: {} ({}회 반복)",
        PasswordConfig::KDF_ALGORITHM,
        PasswordConfig::KDF_ITERATIONS
    );

    // 계정 저장소 초기화
    let store = initialize_account_store().await?;

    // 이벤트 발행기 초기화 (실패해도 서비스는 계속 동작)
    let publisher = Arc::new(EventPublisher::from_config());
    if !publisher.connect().await {
        warn!("⚠️ 이벤트 브로커 없이 시작합니다. 발행 시 다시 연결을 시도합니다");
    }

    let state = web::Data::new(AppState::from_store(store, publisher.clone()));

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    let result = start_http_server(state).await;

    publisher.close().await;
    info!("👋 서비스 종료");

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api/v1", bind_address);

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// PROFILE 환경변수에 따라 적절한 .env 파일을 로드합니다.
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            // 기본 .env 파일 로드
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 개발 환경은 debug, 그 밖에는 info 레벨을 사용합니다.
///
/// ```bash
/// RUST_LOG=user_account_service::messaging=debug cargo run
/// ```
fn init_logging() {
    let default_filter = match Environment::current() {
        Environment::Development => "debug,actix_web=debug",
        _ => "info,actix_web=info",
    };

    env_logger::init_from_env(Env::default().default_filter_or(default_filter));
}

/// `ACCOUNT_STORE` 설정에 따라 계정 저장소를 생성합니다
///
/// MongoDB 연결 실패는 시작 실패로 처리하지만, 인덱스 생성 실패는 경고만 남깁니다.
async fn initialize_account_store() -> io::Result<Arc<dyn AccountStore>> {
    match StoreConfig::backend() {
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(|e| {
                error!("❌ 데이터베이스 연결 실패: {}", e);
                io::Error::other(format!("데이터베이스 연결 실패: {}", e))
            })?;

            let repo = MongoUserRepository::new(Arc::new(database));
            if let Err(e) = repo.create_indexes().await {
                warn!("⚠️ 인덱스 생성 실패 (계속 진행): {}", e);
            }

            Ok(Arc::new(repo))
        }
        StoreBackend::Memory => {
            warn!("⚠️ 메모리 저장소를 사용합니다. 프로세스 종료 시 데이터가 사라집니다");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        // 허용할 HTTP 메서드
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])

        // 허용할 헤더
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
