//! 单调时钟

use core::cell::Cell;

use embassy_time::{Duration, Instant};

/// 播放器读取当前时间的来源
///
/// 板级代码通常用 `embassy_time::Instant::now()` 实现；
/// 测试和仿真用 [`ManualClock`]。
pub trait Clock {
    fn now(&self) -> Instant;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant {
        C::now(self)
    }
}

/// 手动推进的时钟
#[derive(Debug)]
pub struct ManualClock {
    now: Cell<Instant>,
}

impl ManualClock {
    pub const fn new() -> Self {
        Self::starting_at(Instant::from_ticks(0))
    }

    pub const fn starting_at(start: Instant) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }

    pub fn advance_millis(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    pub fn set(&self, at: Instant) {
        self.now.set(at);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_only_moves_when_advanced() {
        let clock = ManualClock::new();
        let start = clock.now();
        assert_eq!(clock.now(), start);

        clock.advance_millis(250);
        assert_eq!(clock.now().duration_since(start), Duration::from_millis(250));
    }

    #[test]
    fn clock_is_usable_through_a_reference() {
        fn elapsed<C: Clock>(clock: C, since: Instant) -> Duration {
            clock.now().duration_since(since)
        }

        let clock = ManualClock::starting_at(Instant::from_millis(1_000));
        clock.advance_millis(5);
        assert_eq!(elapsed(&clock, Instant::from_millis(1_000)), Duration::from_millis(5));
    }
}
