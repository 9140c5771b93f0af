//! 게시물 업로드 요청 (multipart/form-data)

use actix_multipart::form::{MultipartForm, bytes::Bytes, text::Text};

use crate::errors::AppError;

/// `POST /upload` 폼 본문
///
/// 누락된 필드를 직접 검증하기 위해 모든 필드를 `Option`으로 받습니다.
#[derive(MultipartForm)]
pub struct CreatePostForm {
    pub title: Option<Text<String>>,
    pub description: Option<Text<String>>,
    #[multipart(rename = "animalType")]
    pub animal_type: Option<Text<String>>,
    #[multipart(limit = "10MB")]
    pub image: Option<Bytes>,
}

/// 검증을 통과한 게시물 입력
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub description: String,
    pub animal_type: String,
    pub image: Vec<u8>,
}

impl CreatePostForm {
    /// 네 필드가 모두 존재하고 비어 있지 않은지 검증합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 하나라도 누락되었거나 비어 있는 경우
    pub fn into_new_post(self) -> Result<NewPost, AppError> {
        let title = non_empty_text(self.title);
        let description = non_empty_text(self.description);
        let animal_type = non_empty_text(self.animal_type);
        let image = self
            .image
            .map(|file| file.data.to_vec())
            .filter(|data| !data.is_empty());

        match (title, description, animal_type, image) {
            (Some(title), Some(description), Some(animal_type), Some(image)) => Ok(NewPost {
                title,
                description,
                animal_type,
                image,
            }),
            _ => Err(AppError::ValidationError("모든 필드는 필수입니다".to_string())),
        }
    }
}

fn non_empty_text(field: Option<Text<String>>) -> Option<String> {
    field
        .map(|text| text.into_inner())
        .filter(|value| !value.is_empty())
}
