//! 애플리케이션 에러 모듈

pub mod errors;

pub use errors::AppError;
