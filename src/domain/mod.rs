//! # Domain Layer Module
//!
//! 비즈니스 규칙과 데이터 구조를 담당하는 도메인 계층입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities  - MongoDB 문서 (User, Post)
//! ├── dto       - 요청/응답 계약
//! └── models    - 인증 신원, 세션 클레임
//!      │
//!      ▼
//! Services → Repositories (UserStore / PostStore)
//! ```

pub mod entities;
pub mod dto;
pub mod models;
