//! 공통 유틸리티 모듈
//!
//! - [`clock`] - 주입 가능한 현재 시각 공급자

pub mod clock;

pub use clock::{Clock, SystemClock};
