//! # Authentication Configuration Module
//!
//! 세션 토큰 서명 키와 수명 정책을 관리합니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! ```
//!
//! 같은 배포에 속한 모든 인스턴스는 동일한 `JWT_SECRET`을 사용해야 합니다.
//! 다른 키로 발급된 토큰은 검증에 실패합니다.

use std::env;

use crate::config::Environment;
use crate::errors::AppError;

/// 세션 토큰 수명 (시간). 고정 정책이며 환경 변수로 바꿀 수 없습니다.
pub const SESSION_TTL_HOURS: i64 = 2;

const DEV_FALLBACK_SECRET: &str = "dev-only-session-secret-change-me";

/// JWT 설정
pub struct JwtConfig;

impl JwtConfig {
    /// 토큰 서명용 비밀 키를 반환합니다.
    ///
    /// 운영 환경에서 `JWT_SECRET`이 없으면 에러를 반환하고,
    /// 그 외 환경에서는 경고와 함께 개발용 기본값을 사용합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 운영 환경에서 `JWT_SECRET` 미설정
    pub fn secret() -> Result<String, AppError> {
        Self::secret_for(env::var("JWT_SECRET").ok(), &Environment::current())
    }

    fn secret_for(configured: Option<String>, environment: &Environment) -> Result<String, AppError> {
        match configured.filter(|s| !s.is_empty()) {
            Some(secret) => Ok(secret),
            None if environment.is_production() => Err(AppError::InternalError(
                "JWT_SECRET must be set in production".to_string(),
            )),
            None => {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                Ok(DEV_FALLBACK_SECRET.to_string())
            }
        }
    }

    /// 토큰 만료 시간 (시간 단위)
    pub fn expiration_hours() -> i64 {
        SESSION_TTL_HOURS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_secret_is_used() {
        let secret = JwtConfig::secret_for(Some("k1".to_string()), &Environment::Production).unwrap();
        assert_eq!(secret, "k1");
    }

    #[test]
    fn test_missing_secret_fails_in_production() {
        assert!(JwtConfig::secret_for(None, &Environment::Production).is_err());
        assert!(JwtConfig::secret_for(Some(String::new()), &Environment::Production).is_err());
    }

    #[test]
    fn test_missing_secret_falls_back_outside_production() {
        let secret = JwtConfig::secret_for(None, &Environment::Development).unwrap();
        assert_eq!(secret, DEV_FALLBACK_SECRET);
    }

    #[test]
    fn test_expiration_is_two_hours() {
        assert_eq!(JwtConfig::expiration_hours(), 2);
    }
}
