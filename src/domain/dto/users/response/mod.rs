//! 사용자 응답 DTO 모듈
//!
//! ### 로그인 응답
//! ```json
//! {
//!   "message": "로그인에 성공했습니다",
//!   "username": "alice",
//!   "isAdmin": false,
//!   "token": "eyJhbGciOiJIUzI1NiIs..."
//! }
//! ```

pub mod user_response;

pub use user_response::{CurrentUserResponse, LoginResponse, RegisterResponse};
