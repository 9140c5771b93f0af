//! API 라우트 설정 모듈
//!
//! 기존 프론트엔드가 사용하는 경로를 그대로 제공합니다.
//!
//! | Method | Path | 인증 |
//! |--------|------|------|
//! | GET | `/` | - |
//! | GET | `/health` | - |
//! | POST | `/register` | - |
//! | POST | `/login` | - |
//! | GET | `/me` | Bearer |
//! | POST | `/upload` | Bearer |
//! | GET | `/posts` | - |
//! | GET | `/adotados` | - |
//!
//! 인증이 필요한 라우트는 핸들러 선언부에서 `wrap = "AuthMiddleware"`로 게이트를 명시합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(context))
//!     .configure(configure_all_routes);
//! ```

use actix_multipart::form::MultipartFormConfig;
use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::errors::AppError;
use crate::handlers;

/// 이미지 업로드를 포함한 multipart 본문 최대 크기
const MULTIPART_MEMORY_LIMIT: usize = 10 * 1024 * 1024;

/// 모든 라우트를 설정합니다
///
/// 본문 파싱 실패(JSON, multipart)는 `ValidationError`(400)로 변환됩니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(multipart_config());

    cfg.service(home)
        .service(health_check);

    configure_auth_routes(cfg);
    configure_post_routes(cfg);
}

fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::auth::register)
        .service(handlers::auth::login)
        .service(handlers::auth::me);
}

fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::posts::create_post)
        .service(handlers::posts::list_posts)
        .service(handlers::posts::list_adopted);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("JSON 본문 파싱 실패: {}", err);
        AppError::ValidationError(format!("잘못된 요청 본문입니다: {}", err)).into()
    })
}

fn multipart_config() -> MultipartFormConfig {
    MultipartFormConfig::default()
        .memory_limit(MULTIPART_MEMORY_LIMIT)
        .total_limit(MULTIPART_MEMORY_LIMIT + 1024 * 1024)
        .error_handler(|err, _req| {
            log::debug!("multipart 본문 파싱 실패: {}", err);
            AppError::ValidationError(format!("잘못된 업로드 요청입니다: {}", err)).into()
        })
}

/// 서비스 안내 엔드포인트
#[get("/")]
async fn home() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "service": "adoption_board_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "register": "POST /register",
            "login": "POST /login",
            "me": "GET /me",
            "upload": "POST /upload",
            "posts": "GET /posts",
            "adotados": "GET /adotados",
            "health": "GET /health"
        }
    }))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Examples
///
/// ```bash
/// curl http://localhost:5000/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "adoption_board_backend",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00Z"
/// }
/// ```
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "adoption_board_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
