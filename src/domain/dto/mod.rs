//! # Data Transfer Objects Module
//!
//! 클라이언트와 서버 간 API 계약을 정의합니다.
//! 요청 DTO는 `validator`로 검증하고, 응답 DTO는 저장소 엔티티에서 민감 정보를 걸러낸 형태입니다.

pub mod users;
pub mod posts;

pub use users::*;
pub use posts::*;
