//! # 애플리케이션 상태
//!
//! `main`에서 한 번 생성되어 `web::Data`로 모든 워커에 공유됩니다.
//! 전역 싱글톤 대신 이 구조체를 통해 서비스와 발행기를 주입합니다.
//!
//! ```rust,ignore
//! let state = web::Data::new(AppState::new(user_service, publisher));
//!
//! HttpServer::new(move || App::new().app_data(state.clone()).configure(configure_all_routes))
//! ```

use std::sync::Arc;
use crate::messaging::EventPublisher;
use crate::repositories::users::AccountStore;
use crate::services::users::UserService;

#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
    /// 프로세스 수명 동안 하나만 존재하며 `main`이 연결/종료를 담당
    pub publisher: Arc<EventPublisher>,
}

impl AppState {
    pub fn new(user_service: Arc<UserService>, publisher: Arc<EventPublisher>) -> Self {
        Self {
            user_service,
            publisher,
        }
    }

    /// 저장소로부터 서비스를 구성
    pub fn from_store(store: Arc<dyn AccountStore>, publisher: Arc<EventPublisher>) -> Self {
        Self::new(Arc::new(UserService::new(store)), publisher)
    }
}
