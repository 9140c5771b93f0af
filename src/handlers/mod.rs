//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. 모든 핸들러는 `web::Data<AppContext>`에서
//! 서비스를 꺼내 쓰고, 실패는 `AppError`로 반환해 `{"error": "..."}` 응답이 되게 합니다.
//!
//! ```text
//! Client ──> Handlers (이 모듈) ──> Services ──> Repositories ──> MongoDB
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 회원가입, 로그인, 현재 사용자
//! - **`posts`**: 게시물 업로드와 목록
//!
//! 보호된 핸들러는 라우트 매크로의 `wrap = "AuthMiddleware"`로 인증 게이트를 명시합니다.

pub mod auth;
pub mod posts;
