//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스는 `UserStore`/`PostStore` 트레잇에만 의존하고, 구현체는 시작 시
//! `AppContext`를 통해 명시적으로 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::{UserRepository, UserStore};
//!
//! let user_repo = UserRepository::new(database.clone());
//! let user = user_repo.find_by_username("alice").await?;
//! ```

pub mod users;
pub mod posts;

#[cfg(test)]
pub mod memory;

pub use users::{UserRepository, UserStore};
pub use posts::{AdoptedRepository, AdoptedStore, PostRepository, PostStore};
