use serde::Serialize;

use crate::domain::models::auth::authenticated_user::AuthenticatedUser;

/// 회원가입 성공 응답. 비밀번호 관련 정보는 포함하지 않습니다.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

/// 로그인 성공 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub message: String,
    pub username: String,
    pub is_admin: bool,
    /// `Authorization: Bearer <token>` 헤더로 되돌려 보낼 세션 토큰
    pub token: String,
}

/// 현재 인증된 사용자 정보 응답
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentUserResponse {
    pub username: String,
    pub is_admin: bool,
    pub phone_number: String,
}

impl From<AuthenticatedUser> for CurrentUserResponse {
    fn from(user: AuthenticatedUser) -> Self {
        let AuthenticatedUser {
            username,
            is_admin,
            phone_number,
        } = user;

        Self {
            username,
            is_admin,
            phone_number,
        }
    }
}
