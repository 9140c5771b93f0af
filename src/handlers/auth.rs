//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 현재 사용자 조회 엔드포인트입니다.
//!
//! - `POST /register` - 회원가입 (201)
//! - `POST /login` - 로그인 후 2시간짜리 Bearer 토큰 발급
//! - `GET /me` - 인증 게이트를 통과한 현재 사용자 정보
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;

use crate::{
    core::AppContext,
    domain::{
        dto::users::{
            request::{LoginRequest, RegisterRequest},
            response::{CurrentUserResponse, LoginResponse},
        },
        models::auth::AuthenticatedUser,
    },
    errors::AppError,
    middlewares::AuthMiddleware,
};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /register`
///
/// ```json
/// { "username": "alice", "password": "pw123", "phoneNumber": "5551234", "isAdmin": false }
/// ```
#[post("/register")]
pub async fn register(
    ctx: web::Data<AppContext>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    let response = ctx.user_service.create_user(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /login`
///
/// # Errors
///
/// * 400 - 사용자명 또는 비밀번호 누락
/// * 404 - 존재하지 않는 사용자명
/// * 401 - 비밀번호 불일치
#[post("/login")]
pub async fn login(
    ctx: web::Data<AppContext>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()?;

    let user = ctx.user_service
        .verify_password(&payload.username, &payload.password)
        .await?;

    let token = ctx.token_service.issue(&user.username, user.is_admin, ctx.clock.now())?;

    log::info!("🔑 로그인 성공: {}", user.username);

    Ok(HttpResponse::Ok().json(LoginResponse {
        message: "로그인 성공".to_string(),
        username: user.username,
        is_admin: user.is_admin,
        token,
    }))
}

/// 현재 사용자 정보 핸들러
///
/// # Endpoint
/// `GET /me` (Authorization: Bearer 필요)
#[get("/me", wrap = "AuthMiddleware")]
pub async fn me(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(CurrentUserResponse::from(user)))
}
