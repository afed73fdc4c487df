//! Tick pacing for the host loop.
//!
//! The engine has no clock; the host asks the pacer whether a tick is due.
//! The interval is re-derived from the current speed on every call, so a
//! speed-up takes effect on the next tick.

use std::time::Duration;

use crate::types::NANOS_PER_SECOND;

/// Nanoseconds between ticks at `speed` ticks per second.
pub fn interval_nanos(speed: u32) -> u64 {
    NANOS_PER_SECOND / u64::from(speed.max(1))
}

#[derive(Debug, Clone, Default)]
pub struct TickPacer {
    last_tick_ns: u64,
    has_ticked: bool,
}

impl TickPacer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decide whether a tick is due at `now_ns`.
    ///
    /// The first call after construction or `restart` always ticks. After
    /// that a tick needs strictly more than one interval to have passed.
    pub fn should_tick(&mut self, now_ns: u64, speed: u32) -> bool {
        if !self.has_ticked {
            self.has_ticked = true;
            self.last_tick_ns = now_ns;
            return true;
        }

        if now_ns.saturating_sub(self.last_tick_ns) > interval_nanos(speed) {
            self.last_tick_ns = now_ns;
            return true;
        }

        false
    }

    /// How long the host can block on input before the next tick is due.
    pub fn time_until_next(&self, now_ns: u64, speed: u32) -> Duration {
        if !self.has_ticked {
            return Duration::ZERO;
        }
        // +1 because the deadline is exclusive.
        let due = self
            .last_tick_ns
            .saturating_add(interval_nanos(speed))
            .saturating_add(1);
        Duration::from_nanos(due.saturating_sub(now_ns))
    }

    /// Forget the last tick; the next `should_tick` fires immediately.
    pub fn restart(&mut self) {
        self.has_ticked = false;
        self.last_tick_ns = 0;
    }
}
