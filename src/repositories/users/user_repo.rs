//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다. 서비스와 인증 게이트는
//! [`UserStore`] 트레잇에만 의존하며, 운영 환경에서는 MongoDB 구현인
//! [`UserRepository`]가 주입됩니다.

use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, info};
use mongodb::{
    bson::doc,
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    db::Database,
    domain::entities::users::User,
    errors::AppError,
};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 사용자 저장소 계약
///
/// 사용자 레코드는 생성 이후 수정되거나 삭제되지 않으므로 조회와 삽입만 제공합니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 사용자명으로 사용자 조회 (대소문자 구분)
    ///
    /// * `Ok(None)` - 해당 사용자명의 사용자가 없는 경우
    /// * `Err(AppError::DatabaseError)` - 저장소 장애
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자 저장
    ///
    /// * `Ok(User)` - 저장소가 할당한 ID를 포함한 사용자
    /// * `Err(AppError::ConflictError)` - 이미 존재하는 사용자명
    /// * `Err(AppError::DatabaseError)` - 저장소 장애
    async fn insert(&self, user: User) -> Result<User, AppError>;
}

/// `users` 컬렉션 기반 사용자 리포지토리
///
/// ## 인덱스
///
/// - `username` (unique): 중복 가입 방지 및 로그인/게이트 조회 최적화
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    pub const COLLECTION: &'static str = "users";

    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>(Self::COLLECTION)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 실행합니다.
    /// `username` 유니크 인덱스가 조회 후 삽입 사이의 경쟁 상태를 저장소 수준에서 막습니다.
    ///
    /// # 주의사항
    ///
    /// - **기존 데이터**: 이미 중복 사용자명이 있는 경우 인덱스 생성 실패
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(username_index)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        info!("✅ users 컬렉션 인덱스 생성 완료");
        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    debug!("중복 사용자명 삽입 거부: {}", user.username);
                    AppError::ConflictError("이미 사용 중인 사용자명입니다".to_string())
                } else {
                    AppError::DatabaseError(e.to_string())
                }
            })?;

        user.id = result.inserted_id.as_object_id();
        Ok(user)
    }
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write_error)) => {
            write_error.code == DUPLICATE_KEY_CODE
        }
        _ => false,
    }
}
