//! # User Data Transfer Objects Module
//!
//! 회원가입, 로그인, 현재 사용자 조회 API의 요청/응답 구조를 정의합니다.
//! 키 이름은 프론트엔드가 사용하는 camelCase(`phoneNumber`, `isAdmin`)를 따릅니다.
//!
//! ```text
//! users/
//! ├── request/      # RegisterRequest, LoginRequest
//! └── response/     # RegisterResponse, LoginResponse, CurrentUserResponse
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
