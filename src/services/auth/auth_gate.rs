//! 인증 게이트
//!
//! 보호된 요청의 `Authorization` 헤더를 검사해 살아 있는 사용자 신원으로 해석합니다.
//! 게이트는 사용자 레코드나 클레임을 변경하지 않으며, 조회 외의 부수 효과가 없습니다.

use std::sync::Arc;
use log::debug;

use crate::{
    domain::models::auth::AuthenticatedUser,
    errors::AppError,
    repositories::UserStore,
    utils::Clock,
};
use super::TokenService;

pub struct AuthGate {
    tokens: Arc<TokenService>,
    users: Arc<dyn UserStore>,
    clock: Arc<dyn Clock>,
}

impl AuthGate {
    pub fn new(tokens: Arc<TokenService>, users: Arc<dyn UserStore>, clock: Arc<dyn Clock>) -> Self {
        Self { tokens, users, clock }
    }

    /// 헤더 값을 인증된 사용자로 해석합니다.
    ///
    /// 1. 헤더 없음 또는 `Bearer ` 접두사 없음 → 401
    /// 2. 토큰 검증 실패(서명/형식/만료) → 401
    /// 3. 클레임의 사용자명이 더 이상 존재하지 않음 → 401
    ///
    /// 저장소 장애는 `DatabaseError`(500)로 그대로 전파됩니다.
    /// 신원은 클레임이 아닌 현재 사용자 레코드에서 만들어집니다.
    pub async fn authenticate(&self, auth_header: Option<&str>) -> Result<AuthenticatedUser, AppError> {
        let auth_header = auth_header.ok_or_else(|| {
            AppError::AuthenticationError("인증 토큰이 필요합니다".to_string())
        })?;

        let token = self.tokens.extract_bearer_token(auth_header)?;
        let claims = self.tokens.verify(token, self.clock.now())?;

        let user = self.users
            .find_by_username(&claims.username)
            .await?
            .ok_or_else(|| {
                debug!("토큰의 사용자가 존재하지 않음: {}", claims.username);
                AppError::AuthenticationError("사용자를 찾을 수 없습니다".to_string())
            })?;

        Ok(AuthenticatedUser::from(user))
    }
}
