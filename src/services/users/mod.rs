//! 사용자 관리 서비스 모듈
//!
//! 회원가입과 로그인 자격 증명 확인을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 사용자명 중복 방지 (조회 + 유니크 인덱스)
//! - 응답에 비밀번호 관련 정보 미포함

pub mod user_service;

pub use user_service::UserService;
