//! 게시물 DTO 모듈

pub mod request;
pub mod response;

pub use request::{CreatePostForm, NewPost};
pub use response::{CreatePostResponse, PostResponse};
