//! # 게시물 서비스 구현
//!
//! 입양 게시물 업로드와 목록 조회를 담당합니다.
//! 업로드된 이미지는 표준 base64 문자열로 변환되어 문서 안에 그대로 저장됩니다.

use std::collections::HashMap;
use std::sync::Arc;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use mongodb::bson::{Bson, Document};

use crate::{
    domain::{
        dto::posts::{CreatePostResponse, NewPost, PostResponse},
        entities::posts::Post,
        models::auth::AuthenticatedUser,
    },
    errors::AppError,
    repositories::{AdoptedStore, PostStore, UserStore},
};

pub struct PostService {
    posts: Arc<dyn PostStore>,
    adopted: Arc<dyn AdoptedStore>,
    users: Arc<dyn UserStore>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostStore>, adopted: Arc<dyn AdoptedStore>, users: Arc<dyn UserStore>) -> Self {
        Self { posts, adopted, users }
    }

    /// 새 게시물 저장
    ///
    /// 작성자는 요청 본문이 아니라 인증 게이트가 확인한 신원에서 가져옵니다.
    pub async fn create_post(
        &self,
        author: &AuthenticatedUser,
        new_post: NewPost,
    ) -> Result<CreatePostResponse, AppError> {
        let post = Post::new(
            new_post.title,
            new_post.description,
            new_post.animal_type,
            STANDARD.encode(&new_post.image),
            author.username.clone(),
        );

        let created = self.posts.insert(post).await?;
        log::info!("📸 게시물 등록: {} (작성자: {})", created.id_string(), created.username);

        Ok(CreatePostResponse {
            message: "게시물이 성공적으로 등록되었습니다".to_string(),
            post: PostResponse::from(created),
        })
    }

    /// 모든 게시물 조회
    ///
    /// 작성자가 아직 존재하면 연락처(`phoneNumber`)를 붙입니다.
    /// 같은 작성자는 한 번만 조회합니다.
    pub async fn list_posts(&self) -> Result<Vec<PostResponse>, AppError> {
        let posts = self.posts.find_all().await?;
        let mut phone_numbers: HashMap<String, Option<String>> = HashMap::new();
        let mut responses = Vec::with_capacity(posts.len());

        for post in posts {
            if !phone_numbers.contains_key(&post.username) {
                let phone_number = self.users
                    .find_by_username(&post.username)
                    .await?
                    .map(|user| user.phone_number);
                phone_numbers.insert(post.username.clone(), phone_number);
            }

            let phone_number = phone_numbers.get(&post.username).cloned().flatten();
            responses.push(PostResponse::from(post).with_phone_number(phone_number));
        }

        Ok(responses)
    }

    /// 입양 완료 기록 조회
    ///
    /// 문서의 필드를 걸러내거나 채우지 않고 그대로 반환합니다.
    /// `_id`만 16진수 문자열로 바꿉니다.
    pub async fn list_adopted(&self) -> Result<Vec<serde_json::Value>, AppError> {
        let adopted = self.adopted.find_all().await?;
        Ok(adopted.into_iter().map(adopted_to_json).collect())
    }
}

fn adopted_to_json(mut record: Document) -> serde_json::Value {
    if let Ok(id) = record.get_object_id("_id") {
        record.insert("_id", id.to_hex());
    }
    Bson::Document(record).into_relaxed_extjson()
}
