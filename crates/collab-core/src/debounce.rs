#![forbid(unsafe_code)]

//! Trailing-edge debounce for bursty input.
//!
//! [`Debouncer`] holds at most one pending value. Every [`push`](Debouncer::push)
//! replaces the pending value and restarts the quiescence window; the value is
//! released by [`poll`](Debouncer::poll) once the window has elapsed with no
//! newer input. There is never a backlog: intermediate values are dropped.
//!
//! ```
//! use core::time::Duration;
//! use collab_core::debounce::Debouncer;
//!
//! let mut d = Debouncer::new(Duration::from_millis(300));
//! d.push("a", Duration::from_millis(0));
//! d.push("ar", Duration::from_millis(100));
//! assert_eq!(d.poll(Duration::from_millis(350)), None);
//! assert_eq!(d.poll(Duration::from_millis(400)), Some("ar"));
//! assert_eq!(d.poll(Duration::from_millis(900)), None);
//! ```

use core::time::Duration;

/// Cancel-and-reschedule delayed delivery of the latest value.
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<Pending<T>>,
}

#[derive(Debug, Clone)]
struct Pending<T> {
    value: T,
    deadline: Duration,
}

impl<T> Debouncer<T> {
    /// Create a debouncer with the given quiescence window.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// The quiescence window.
    #[must_use]
    pub const fn window(&self) -> Duration {
        self.window
    }

    /// Schedule `value`, superseding anything still pending.
    ///
    /// Returns the deadline at which the value becomes due, so a host with a
    /// real timer can arm one.
    pub fn push(&mut self, value: T, now: Duration) -> Duration {
        let deadline = now.saturating_add(self.window);
        if self.pending.is_some() {
            crate::trace!(
                deadline_ms = u64::try_from(deadline.as_millis()).unwrap_or(u64::MAX),
                "debounce rescheduled"
            );
        }
        self.pending = Some(Pending { value, deadline });
        deadline
    }

    /// Release the pending value if its window has elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<T> {
        match &self.pending {
            Some(p) if now >= p.deadline => self.pending.take().map(|p| p.value),
            _ => None,
        }
    }

    /// Drop the pending value without delivering it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Deadline of the pending value, if any.
    #[must_use]
    pub fn deadline(&self) -> Option<Duration> {
        self.pending.as_ref().map(|p| p.deadline)
    }

    /// Whether a value is waiting.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fires_exactly_at_deadline() {
        let mut d = Debouncer::new(WINDOW);
        assert_eq!(d.push(1, ms(10)), ms(310));
        assert_eq!(d.poll(ms(309)), None);
        assert_eq!(d.poll(ms(310)), Some(1));
        assert!(!d.is_pending());
    }

    #[test]
    fn new_input_restarts_the_window() {
        let mut d = Debouncer::new(WINDOW);
        d.push("a", ms(0));
        d.push("ab", ms(200));
        assert_eq!(d.poll(ms(300)), None);
        assert_eq!(d.deadline(), Some(ms(500)));
        assert_eq!(d.poll(ms(500)), Some("ab"));
    }

    #[test]
    fn cancel_drops_pending() {
        let mut d = Debouncer::new(WINDOW);
        d.push(7, ms(0));
        d.cancel();
        assert_eq!(d.poll(ms(1_000)), None);
    }

    #[test]
    fn reschedule_near_max_time_saturates() {
        let mut d = Debouncer::new(WINDOW);
        d.push(1, Duration::MAX - ms(100));
        assert_eq!(d.push(2, Duration::MAX - ms(50)), Duration::MAX);
        assert_eq!(d.poll(Duration::MAX), Some(2));
    }

    #[test]
    fn zero_window_fires_on_next_poll() {
        let mut d = Debouncer::new(Duration::ZERO);
        d.push('x', ms(5));
        assert_eq!(d.poll(ms(5)), Some('x'));
    }

    #[test]
    fn saturates_near_duration_max() {
        let mut d = Debouncer::new(WINDOW);
        assert_eq!(d.push((), Duration::MAX), Duration::MAX);
        assert_eq!(d.poll(Duration::MAX), Some(()));
    }
}
