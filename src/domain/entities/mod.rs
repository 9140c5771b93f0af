//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 도메인 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (users, posts 컬렉션 문서)
//! ├── models/       ← 인증 신원, 토큰 클레임
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! 모든 엔티티는 `_id`를 `Option<ObjectId>`로 가지며, 저장 전에는 `None` 입니다.

pub mod users;
pub mod posts;
