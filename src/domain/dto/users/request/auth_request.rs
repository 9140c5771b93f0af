//! 회원가입/로그인 요청 DTO
//!
//! 필드가 누락되면 `#[serde(default)]`로 빈 문자열이 되고, `validate()`에서 걸러집니다.
//! 비밀번호를 담고 있으므로 `Debug`를 구현하지 않습니다.

use serde::Deserialize;
use validator::Validate;

/// 회원가입 요청
#[derive(Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "모든 필드는 필수입니다"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "모든 필드는 필수입니다"))]
    pub password: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "모든 필드는 필수입니다"))]
    pub phone_number: String,

    #[serde(default)]
    pub is_admin: bool,
}

/// 로그인 요청
#[derive(Deserialize, Validate)]
pub struct LoginRequest {
    #[serde(default)]
    #[validate(length(min = 1, message = "모든 필드는 필수입니다"))]
    pub username: String,

    #[serde(default)]
    #[validate(length(min = 1, message = "모든 필드는 필수입니다"))]
    pub password: String,
}
