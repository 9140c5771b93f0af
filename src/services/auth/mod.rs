//! 인증 및 보안 서비스 모듈
//!
//! 비밀번호 해싱, 세션 토큰 발급/검증, 보호된 요청의 인증 게이트를 제공합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱 (환경별 cost)
//! - HMAC-SHA256 토큰 서명, 2시간 고정 만료
//! - 서버 측 토큰 저장/폐기 목록 없음
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{AuthGate, TokenService};
//!
//! let tokens = Arc::new(TokenService::new(&JwtConfig::secret()?));
//! let token = tokens.issue("alice", false, Utc::now())?;
//! let user = gate.authenticate(Some(&format!("Bearer {}", token))).await?;
//! ```

pub mod password_service;
pub mod token_service;
pub mod auth_gate;

pub use password_service::PasswordService;
pub use token_service::TokenService;
pub use auth_gate::AuthGate;
