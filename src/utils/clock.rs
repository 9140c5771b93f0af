//! 현재 시각 공급자
//!
//! 토큰 발급과 검증은 `now`를 인자로 받습니다. 요청 경로에서는 [`SystemClock`]을,
//! 테스트에서는 시간을 앞당길 수 있는 수동 시계를 주입합니다.

use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 운영 환경에서 사용하는 시스템 시계
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

#[cfg(test)]
pub use manual::ManualClock;


#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_manual_clock_advances() {
        let start = Utc::now();
        let clock = ManualClock::new(start);

        clock.advance(Duration::minutes(121));

        assert_eq!(clock.now() - start, Duration::minutes(121));
    }
}
