use embassy_time::Instant;
use enpit_common::Clock;

/// 由 embassy-time 的 std 驱动提供时间
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}
