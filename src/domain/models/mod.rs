//! # Domain Models Module
//!
//! 저장소에 영속되지 않는 도메인 모델들입니다.
//!
//! - [`auth`] - 인증 게이트가 확인한 사용자 신원 (`AuthenticatedUser`)
//! - [`token`] - 서명된 세션 토큰의 클레임 (`SessionClaims`)

pub mod auth;
pub mod token;
