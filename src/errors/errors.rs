//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 모든 실패를
//! `{"error": "..."}` 형태의 JSON 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 입력 누락, 잘못된 본문 |
//! | `ConflictError` | 400 Bad Request | 중복 사용자명 |
//! | `AuthenticationError` | 401 Unauthorized | 토큰 없음/무효/만료, 사라진 사용자 |
//! | `InvalidCredential` | 401 Unauthorized | 비밀번호 불일치 |
//! | `NotFound` | 404 Not Found | 로그인 시 존재하지 않는 사용자명 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 장애 |
//! | `InternalError` | 500 Internal Server Error | 예상치 못한 오류 |
//!
//! 5xx 응답에는 내부 상세 정보를 담지 않습니다. 상세 내용은 서버 로그에만 남습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! let user = user_repo.find_by_username(&username).await?
//!     .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;
//! ```

use actix_web::http::StatusCode;
use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 요청 하나에서 발생한 실패는 모두 최종적이며, 이 계층에서 재시도하지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 저장소(MongoDB) 장애 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 중복 사용자명 에러 (400 Bad Request)
    #[error("{0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    ///
    /// 토큰 누락, 서명 불일치, 만료, 형식 오류, 사라진 사용자를 모두 포함합니다.
    #[error("{0}")]
    AuthenticationError(String),

    /// 비밀번호 불일치 (401 Unauthorized)
    #[error("{0}")]
    InvalidCredential(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출해도 되는 메시지를 반환합니다.
    ///
    /// 5xx 계열은 내부 상세(예외 메시지, 연결 문자열 등)를 숨기고 일반 메시지로 대체합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::DatabaseError(_) => "저장소를 일시적으로 사용할 수 없습니다".to_string(),
            AppError::InternalError(_) => "서버 내부 오류가 발생했습니다".to_string(),
            other => other.to_string(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ConflictError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::InvalidCredential(_) => StatusCode::UNAUTHORIZED,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 서버 측 실패는 이 시점에 상세 내용을 로그로 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ 요청 처리 실패: {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "error": self.public_message()
            }))
    }
}

/// `validator` 검증 실패를 400 응답으로 변환합니다.
///
/// 클라이언트에는 첫 번째 필드 에러의 메시지만 전달됩니다.
impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|field_errors| field_errors.iter())
            .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
            .unwrap_or_else(|| errors.to_string());

        AppError::ValidationError(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    fn body_of(error: &AppError) -> serde_json::Value {
        let bytes = error.error_response().into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("모든 필드는 필수입니다".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_of(&error)["error"], "모든 필드는 필수입니다");
    }

    #[test]
    fn test_conflict_error_maps_to_bad_request() {
        let error = AppError::ConflictError("이미 존재하는 사용자입니다".to_string());
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("사용자를 찾을 수 없습니다".to_string());
        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_authentication_and_credential_errors_are_unauthorized() {
        let unauthenticated = AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string());
        let wrong_password = AppError::InvalidCredential("비밀번호가 올바르지 않습니다".to_string());

        assert_eq!(unauthenticated.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(wrong_password.error_response().status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_server_errors_hide_internal_detail() {
        let error = AppError::DatabaseError("connection refused: mongodb://admin:pw@db".to_string());
        assert_eq!(error.error_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_of(&error);
        let message = body["error"].as_str().unwrap();
        assert!(!message.contains("mongodb://"));
        assert!(!message.contains("connection refused"));
    }

    #[test]
    fn test_validation_errors_convert_to_first_field_message() {
        use crate::domain::dto::users::LoginRequest;
        use validator::Validate;

        let request = LoginRequest {
            username: String::new(),
            password: "pw".to_string(),
        };

        let error: AppError = request.validate().unwrap_err().into();

        assert!(matches!(&error, AppError::ValidationError(message) if message == "모든 필드는 필수입니다"));
        assert_eq!(error.error_response().status(), StatusCode::BAD_REQUEST);
    }
}
