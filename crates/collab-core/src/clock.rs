#![forbid(unsafe_code)]

//! Host-controlled monotonic time.
//!
//! There is no ambient clock anywhere in the UI logic. The browser glue
//! samples `performance.now()` and pushes it in; tests advance time by hand.

use core::time::Duration;

/// A source of monotonic time measured from an arbitrary origin.
pub trait MonotonicClock {
    /// Current monotonic time.
    fn now_mono(&self) -> Duration;
}

/// Deterministic monotonic clock controlled by the host.
#[derive(Debug, Default, Clone)]
pub struct DeterministicClock {
    now: Duration,
}

impl DeterministicClock {
    /// Create a clock starting at `0`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            now: Duration::ZERO,
        }
    }

    /// Set current monotonic time.
    ///
    /// Values earlier than the current reading are ignored so time never runs
    /// backwards, even if the host sampled out of order.
    pub fn set(&mut self, now: Duration) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Advance monotonic time by `dt`.
    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }
}

impl MonotonicClock for DeterministicClock {
    fn now_mono(&self) -> Duration {
        self.now
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advances_monotonically() {
        let mut c = DeterministicClock::new();
        assert_eq!(c.now_mono(), Duration::ZERO);

        c.advance(Duration::from_millis(10));
        c.advance(Duration::from_millis(5));
        assert_eq!(c.now_mono(), Duration::from_millis(15));

        c.set(Duration::MAX);
        c.advance(Duration::from_secs(1));
        assert_eq!(c.now_mono(), Duration::MAX);
    }

    #[test]
    fn set_never_moves_backwards() {
        let mut c = DeterministicClock::new();
        c.set(Duration::from_millis(100));
        c.set(Duration::from_millis(40));
        assert_eq!(c.now_mono(), Duration::from_millis(100));
    }
}
