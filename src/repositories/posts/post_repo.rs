//! # 게시물 리포지토리 구현
//!
//! 이 서비스가 작성하는 입양 게시물(`posts`)의 데이터 액세스 계층입니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection};

use crate::{
    db::Database,
    domain::entities::posts::Post,
    errors::AppError,
};

/// 게시물 저장소 계약
#[async_trait]
pub trait PostStore: Send + Sync {
    /// 새 게시물 저장. 저장소가 할당한 ID를 포함해 반환합니다.
    async fn insert(&self, post: Post) -> Result<Post, AppError>;

    /// 컬렉션의 모든 게시물을 삽입 순서대로 반환합니다.
    async fn find_all(&self) -> Result<Vec<Post>, AppError>;
}

pub struct PostRepository {
    db: Arc<Database>,
}

impl PostRepository {
    pub const COLLECTION: &'static str = "posts";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Post> {
        self.db.get_database().collection::<Post>(Self::COLLECTION)
    }
}

#[async_trait]
impl PostStore for PostRepository {
    async fn insert(&self, mut post: Post) -> Result<Post, AppError> {
        let result = self.collection()
            .insert_one(&post)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        post.id = result.inserted_id.as_object_id();
        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        let cursor = self.collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}
