pub mod post_repo;
pub mod adopted_repo;

pub use post_repo::{PostRepository, PostStore};
pub use adopted_repo::{AdoptedRepository, AdoptedStore};
