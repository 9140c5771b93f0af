//! 입양 게시물 서비스 모듈

pub mod post_service;

pub use post_service::PostService;
