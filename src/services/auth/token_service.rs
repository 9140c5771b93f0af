//! JWT 세션 토큰 관리 서비스 구현
//!
//! 로그인 성공 시 2시간짜리 세션 토큰을 발급하고, 보호된 요청마다 이를 검증합니다.
//! 검증은 (토큰, 비밀 키, 현재 시각)만으로 결정되며 저장소에 접근하지 않습니다.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use log::debug;

use crate::config::JwtConfig;
use crate::domain::models::token::SessionClaims;
use crate::errors::AppError;

const BEARER_PREFIX: &str = "Bearer ";

/// JWT 세션 토큰 서비스
///
/// HMAC-SHA256으로 서명합니다. 같은 배포 안의 모든 인스턴스는 동일한 비밀 키를 공유해야
/// 서로가 발급한 토큰을 검증할 수 있습니다.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl TokenService {
    pub fn new(secret: &str) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
        }
    }

    /// 세션 토큰 발급
    ///
    /// `exp = now + 2시간`인 클레임을 만들어 서명합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 서명 실패
    pub fn issue(&self, username: &str, is_admin: bool, now: DateTime<Utc>) -> Result<String, AppError> {
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = SessionClaims {
            username: username.to_string(),
            is_admin,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 세션 토큰 검증
    ///
    /// 서명 불일치, 형식 오류, `now >= exp`는 모두 같은 인증 에러로 합쳐집니다.
    /// 구체적인 원인은 debug 로그에만 남습니다.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, AppError> {
        let mut validation = Validation::new(Algorithm::HS256);
        // 만료는 주입된 시각으로 직접 판단
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<SessionClaims>(token, &self.decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                debug!("토큰 검증 실패: {:?}", e.kind());
                invalid_token()
            })?;

        if now.timestamp() >= claims.exp {
            debug!("토큰 검증 실패: 만료됨 (user: {})", claims.username);
            return Err(invalid_token());
        }

        Ok(claims)
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰 추출
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> Result<&'a str, AppError> {
        auth_header
            .strip_prefix(BEARER_PREFIX)
            .ok_or_else(|| {
                AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())
            })
    }
}

fn invalid_token() -> AppError {
    AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string())
}
