//! # Core Module
//!
//! 애플리케이션 서비스 조립을 담당합니다.
//!
//! 프로세스 전역 서비스 로케이터 없이, 모든 의존성은 [`context::AppContext`]를 통해
//! 명시적으로 주입됩니다. 테스트는 같은 생성자에 인메모리 저장소와 수동 시계를 넘깁니다.

pub mod context;

pub use context::{AppContext, AppDependencies};
