//! # 입양 완료 기록 리포지토리
//!
//! `adotados` 컬렉션은 이 서비스가 쓰지 않고 읽기만 합니다.
//! 기록마다 필드 구성이 다를 수 있으므로 엔티티로 변환하지 않고 원본 문서를 그대로 다룹니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::{doc, Document}, Collection};

use crate::{db::Database, errors::AppError};

/// 입양 완료 기록 저장소 계약
#[async_trait]
pub trait AdoptedStore: Send + Sync {
    /// 컬렉션의 모든 문서를 가공 없이 반환합니다.
    async fn find_all(&self) -> Result<Vec<Document>, AppError>;
}

pub struct AdoptedRepository {
    db: Arc<Database>,
}

impl AdoptedRepository {
    pub const COLLECTION: &'static str = "adotados";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<Document> {
        self.db.get_database().collection::<Document>(Self::COLLECTION)
    }
}

#[async_trait]
impl AdoptedStore for AdoptedRepository {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
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
