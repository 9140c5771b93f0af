//! 입양 게시판 백엔드
//!
//! 회원가입/로그인, Bearer 세션 토큰 인증, 입양 게시물 업로드와 조회를 제공하는
//! Rust 기반 서비스입니다.
//!
//! # Features
//!
//! - **사용자 관리**: 사용자명/비밀번호/전화번호 회원가입 (bcrypt 해싱)
//! - **세션 토큰**: HS256 서명, 2시간 고정 만료, 서버 측 저장 없음
//! - **인증 게이트**: 보호된 요청마다 토큰 검증 후 현재 사용자 레코드로 재확인
//! - **게시물**: multipart 이미지 업로드, 작성자 연락처를 포함한 목록
//! - **MongoDB**: 사용자/게시물 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (+ AuthMiddleware)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (AppContext로 조립)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserStore / PostStore
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use adoption_board_backend::core::{AppContext, AppDependencies};
//! use adoption_board_backend::routes::configure_all_routes;
//!
//! let context = AppContext::new(dependencies);
//! let app = App::new()
//!     .app_data(web::Data::new(context))
//!     .configure(configure_all_routes);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
