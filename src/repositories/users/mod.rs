//! 사용자 데이터 액세스 계층
//!
//! [`UserStore`] 계약과 MongoDB 구현 [`UserRepository`]를 제공합니다.

pub mod user_repo;

pub use user_repo::{UserRepository, UserStore};
