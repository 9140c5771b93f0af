//! Adoption Post HTTP Handlers
//!
//! - `POST /upload` - 게시물 업로드 (multipart/form-data, 인증 필요)
//! - `GET /posts` - 게시물 목록 (작성자 연락처 포함)
//! - `GET /adotados` - 입양 완료 목록 (원본 문서 그대로)
use actix_multipart::form::MultipartForm;
use actix_web::{get, post, web, HttpResponse};

use crate::{
    core::AppContext,
    domain::{dto::posts::CreatePostForm, models::auth::AuthenticatedUser},
    errors::AppError,
    middlewares::AuthMiddleware,
};

/// 게시물 업로드 핸들러
///
/// 폼 필드: `title`, `description`, `animalType`, `image`(파일).
/// 작성자는 인증된 사용자로 고정됩니다.
#[post("/upload", wrap = "AuthMiddleware")]
pub async fn create_post(
    ctx: web::Data<AppContext>,
    user: AuthenticatedUser,
    MultipartForm(form): MultipartForm<CreatePostForm>,
) -> Result<HttpResponse, AppError> {
    let new_post = form.into_new_post()?;
    let response = ctx.post_service.create_post(&user, new_post).await?;

    Ok(HttpResponse::Created().json(response))
}

#[get("/posts")]
pub async fn list_posts(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let posts = ctx.post_service.list_posts().await?;
    Ok(HttpResponse::Ok().json(posts))
}

#[get("/adotados")]
pub async fn list_adopted(ctx: web::Data<AppContext>) -> Result<HttpResponse, AppError> {
    let adopted = ctx.post_service.list_adopted().await?;
    Ok(HttpResponse::Ok().json(adopted))
}
