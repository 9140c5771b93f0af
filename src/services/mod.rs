//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 모든 서비스는 생성자로 의존성을 받아 `AppContext`에 한 번 조립됩니다.
//!
//! - [`auth`] - 비밀번호 해싱, 세션 토큰, 인증 게이트
//! - [`users`] - 회원가입, 로그인 자격 증명 확인
//! - [`posts`] - 입양 게시물 업로드와 목록

pub mod users;
pub mod auth;
pub mod posts;
