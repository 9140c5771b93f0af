//! 테스트용 인메모리 저장소
//!
//! MongoDB 없이 서비스, 인증 게이트, 라우트 전체를 검증할 때 주입합니다.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Document};

use crate::{
    domain::entities::{posts::Post, users::User},
    errors::AppError,
};
use super::{AdoptedStore, PostStore, UserStore};

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
    unavailable: AtomicBool,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 사용자 삭제를 흉내냅니다. 서비스에는 삭제 경로가 없습니다.
    pub fn remove(&self, username: &str) {
        self.users.lock().unwrap().retain(|user| user.username != username);
    }

    pub fn len(&self) -> usize {
        self.users.lock().unwrap().len()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.check_available()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|user| user.username == username).cloned())
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        self.check_available()?;
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|existing| existing.username == user.username) {
            return Err(AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string()));
        }

        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct MemoryPostStore {
    posts: Mutex<Vec<Post>>,
}

impl MemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostStore for MemoryPostStore {
    async fn insert(&self, mut post: Post) -> Result<Post, AppError> {
        post.id = Some(ObjectId::new());
        self.posts.lock().unwrap().push(post.clone());
        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<Post>, AppError> {
        Ok(self.posts.lock().unwrap().clone())
    }
}

/// 원본 문서를 그대로 보관하는 입양 완료 기록 저장소
#[derive(Default)]
pub struct MemoryAdoptedStore {
    records: Mutex<Vec<Document>>,
}

impl MemoryAdoptedStore {
    pub fn with_records(records: Vec<Document>) -> Self {
        Self { records: Mutex::new(records) }
    }
}

#[async_trait]
impl AdoptedStore for MemoryAdoptedStore {
    async fn find_all(&self) -> Result<Vec<Document>, AppError> {
        Ok(self.records.lock().unwrap().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_memory_user_store_rejects_duplicate_username() {
        let store = MemoryUserStore::new();
        store.insert(User::new("alice".into(), "h".into(), "1".into(), false)).await.unwrap();

        let result = store.insert(User::new("alice".into(), "h2".into(), "2".into(), false)).await;

        assert!(matches!(result, Err(AppError::ConflictError(_))));
        assert_eq!(store.len(), 1);
    }

    #[actix_web::test]
    async fn test_lookup_is_case_sensitive() {
        let store = MemoryUserStore::new();
        store.insert(User::new("Alice".into(), "h".into(), "1".into(), false)).await.unwrap();

        assert!(store.find_by_username("alice").await.unwrap().is_none());
        assert!(store.find_by_username("Alice").await.unwrap().is_some());
    }
}
