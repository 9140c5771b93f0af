//! # 사용자 서비스 구현
//!
//! 회원가입과 로그인 자격 증명 확인을 담당합니다.
//!
//! ## 회원가입 흐름
//!
//! ```text
//! RegisterRequest → 필수 필드 검증 → 사용자명 중복 확인 → bcrypt 해싱 → 저장
//! ```
//!
//! 중복 확인과 삽입 사이의 경쟁은 `username` 유니크 인덱스가 최종적으로 막습니다.
//!
//! ## 로그인 흐름
//!
//! ```text
//! 사용자명 조회 (없으면 404) → 비밀번호 검증 (불일치 시 401) → User 반환
//! ```
//!
//! 토큰 발급은 호출자(핸들러)가 `TokenService`로 수행합니다.

use std::sync::Arc;
use validator::Validate;

use crate::{
    domain::{
        dto::users::{request::RegisterRequest, response::RegisterResponse},
        entities::users::User,
    },
    errors::AppError,
    repositories::UserStore,
    services::auth::PasswordService,
};

/// 사용자 비즈니스 로직 서비스
pub struct UserService {
    users: Arc<dyn UserStore>,
    passwords: Arc<PasswordService>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, passwords: Arc<PasswordService>) -> Self {
        Self { users, passwords }
    }

    /// 새 사용자 등록
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 사용자명, 비밀번호, 전화번호 중 하나라도 비어 있음
    /// * `AppError::ConflictError` - 이미 존재하는 사용자명
    /// * `AppError::DatabaseError` - 저장소 장애
    ///
    /// 응답에는 비밀번호나 해시가 포함되지 않습니다.
    pub async fn create_user(&self, request: RegisterRequest) -> Result<RegisterResponse, AppError> {
        let start_time = std::time::Instant::now();

        request.validate()?;

        if self.users.find_by_username(&request.username).await?.is_some() {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        let password_hash = self.passwords.hash(&request.password)?;

        let user = User::new(
            request.username,
            password_hash,
            request.phone_number,
            request.is_admin,
        );

        let created_user = self.users.insert(user).await?;

        log::info!(
            "✅ 사용자 등록: {} (id: {})",
            created_user.username,
            created_user.id_string().unwrap_or_default()
        );
        log::info!("Total user creation took: {:?}", start_time.elapsed());

        Ok(RegisterResponse {
            message: "사용자가 성공적으로 등록되었습니다".to_string(),
        })
    }

    /// 사용자명과 비밀번호 확인
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 사용자명의 사용자가 없음
    /// * `AppError::InvalidCredential` - 비밀번호 불일치
    /// * `AppError::DatabaseError` - 저장소 장애
    pub async fn verify_password(&self, username: &str, password: &str) -> Result<User, AppError> {
        let user = self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        if !self.passwords.verify(password, &user.password_hash) {
            log::warn!("🔒 로그인 실패 (비밀번호 불일치): {}", username);
            return Err(AppError::InvalidCredential("비밀번호가 올바르지 않습니다".to_string()));
        }

        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::MemoryUserStore;

    fn service() -> (UserService, Arc<MemoryUserStore>) {
        let users = Arc::new(MemoryUserStore::new());
        let service = UserService::new(users.clone(), Arc::new(PasswordService::new(4)));
        (service, users)
    }

    fn register_request(username: &str, password: &str, phone_number: &str) -> RegisterRequest {
        RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
            phone_number: phone_number.to_string(),
            is_admin: false,
        }
    }

    #[actix_web::test]
    async fn test_register_stores_hash_not_password() {
        let (service, users) = service();

        service.create_user(register_request("alice", "pw123", "5551234")).await.unwrap();

        let stored = users.find_by_username("alice").await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "pw123");
        assert!(stored.password_hash.starts_with("$2"));
        assert!(!stored.is_admin);
        assert_eq!(stored.id_string().map(|id| id.len()), Some(24));
    }

    #[actix_web::test]
    async fn test_register_duplicate_username_conflicts() {
        let (service, users) = service();
        service.create_user(register_request("alice", "pw123", "5551234")).await.unwrap();

        let result = service.create_user(register_request("alice", "other", "555")).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(users.len(), 1);
    }

    #[actix_web::test]
    async fn test_register_empty_field_is_validation_error() {
        let (service, users) = service();

        for request in [
            register_request("", "pw", "1"),
            register_request("bob", "", "1"),
            register_request("bob", "pw", ""),
        ] {
            let result = service.create_user(request).await;
            match result {
                Err(AppError::ValidationError(message)) => assert_eq!(message, "모든 필드는 필수입니다"),
                _ => panic!("expected validation error"),
            }
        }
        assert_eq!(users.len(), 0);
    }

    #[actix_web::test]
    async fn test_verify_password_outcomes() {
        let (service, _) = service();
        service.create_user(register_request("alice", "pw123", "5551234")).await.unwrap();

        assert_eq!(service.verify_password("alice", "pw123").await.unwrap().username, "alice");
        assert!(matches!(
            service.verify_password("alice", "wrong").await,
            Err(AppError::InvalidCredential(_))
        ));
        assert!(matches!(
            service.verify_password("unknown_user", "x").await,
            Err(AppError::NotFound(_))
        ));
    }
}
