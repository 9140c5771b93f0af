//! # Configuration Module
//!
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경, 비밀번호, 요청 제한, CORS 설정
//! - [`auth_config`] - 세션 토큰(JWT) 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="5000"
//!
//! # MongoDB
//! export MONGO_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="adoption_board"
//!
//! # JWT 설정 (운영 환경 필수)
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 선택 사항
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! export CORS_ALLOWED_ORIGINS="http://localhost:5173,https://example.app"
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
