//! Post Entity Implementation
//!
//! `posts` 컬렉션의 입양 게시물 엔티티입니다.

use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// 이미지 게시물 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub description: String,
    #[serde(rename = "animalType")]
    pub animal_type: String,
    /// 업로드된 이미지 바이트의 표준 base64 인코딩
    pub image: String,
    /// 작성자 사용자명. 요청 본문이 아닌 인증된 신원에서 가져옵니다.
    pub username: String,
}

impl Post {
    pub fn new(
        title: String,
        description: String,
        animal_type: String,
        image: String,
        username: String,
    ) -> Self {
        Self {
            id: None,
            title,
            description,
            animal_type,
            image,
            username,
        }
    }

    pub fn id_string(&self) -> String {
        self.id.map(|id| id.to_hex()).unwrap_or_default()
    }
}
