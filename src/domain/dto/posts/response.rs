//! 게시물 응답 DTO

use serde::Serialize;

use crate::domain::entities::posts::Post;

/// 게시물 응답
///
/// 목록 조회 시 작성자가 아직 존재하면 `phoneNumber`가 채워집니다.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    pub animal_type: String,
    pub image: String,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl PostResponse {
    pub fn with_phone_number(mut self, phone_number: Option<String>) -> Self {
        self.phone_number = phone_number;
        self
    }
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        let id = post.id_string();
        let Post {
            title,
            description,
            animal_type,
            image,
            username,
            ..
        } = post;

        Self {
            id,
            title,
            description,
            animal_type,
            image,
            username,
            phone_number: None,
        }
    }
}

/// 게시물 생성 응답
#[derive(Debug, Clone, Serialize)]
pub struct CreatePostResponse {
    pub message: String,
    pub post: PostResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_post_response_json_shape() {
        let mut post = Post::new(
            "Rex".into(),
            "friendly".into(),
            "dog".into(),
            "aGVsbG8=".into(),
            "alice".into(),
        );
        let id = ObjectId::new();
        post.id = Some(id);

        let json = serde_json::to_value(PostResponse::from(post)).unwrap();
        assert_eq!(json["_id"], id.to_hex());
        assert_eq!(json["animalType"], "dog");
        assert_eq!(json["username"], "alice");
        assert!(json.get("phoneNumber").is_none());
    }

    #[test]
    fn test_phone_number_is_attached_when_present() {
        let post = Post::new("t".into(), "d".into(), "cat".into(), "AA==".into(), "bob".into());
        let response = PostResponse::from(post).with_phone_number(Some("555".into()));

        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["phoneNumber"], "555");
    }
}
