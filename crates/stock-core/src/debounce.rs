//! Debouncing for search-triggered refetches.
//!
//! [`Debouncer`] is a pure state machine: the owning event loop feeds it
//! keystrokes and its own clock, and polls for the moment a quiet period has
//! elapsed. Keeping it free of timers makes the delay semantics testable
//! without sleeping.

use std::time::{Duration, Instant};

/// Holds the latest pending input value until it has been stable for the
/// configured delay.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record an input change at `now`. Any previously pending value is
    /// superseded and its deadline restarts.
    pub fn submit(&mut self, value: String, now: Instant) {
        self.pending = Some((value, now));
    }

    /// The instant at which the pending value becomes due, if any. Event
    /// loops sleep until this deadline.
    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending
            .as_ref()
            .map(|(_, submitted)| *submitted + self.delay)
    }

    /// Take the pending value if its quiet period has elapsed by `now`.
    /// Returns `None` while input is still settling.
    pub fn poll(&mut self, now: Instant) -> Option<String> {
        let due = self
            .pending
            .as_ref()
            .is_some_and(|(_, submitted)| now.duration_since(*submitted) >= self.delay);
        if due {
            self.pending.take().map(|(value, _)| value)
        } else {
            None
        }
    }

    /// Drop any pending value without firing.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(500);

    #[test]
    fn fires_only_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.submit("wid".into(), start);
        assert_eq!(debouncer.poll(start + Duration::from_millis(499)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(500)),
            Some("wid".into())
        );
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn newer_input_supersedes_and_restarts_the_clock() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.submit("wid".into(), start);
        debouncer.submit("widget".into(), start + Duration::from_millis(300));

        // The first value's deadline passes without firing.
        assert_eq!(debouncer.poll(start + Duration::from_millis(600)), None);
        assert_eq!(
            debouncer.poll(start + Duration::from_millis(800)),
            Some("widget".into())
        );
    }

    #[test]
    fn cancel_discards_pending_input() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);

        debouncer.submit("wid".into(), start);
        debouncer.cancel();
        assert_eq!(debouncer.poll(start + Duration::from_secs(10)), None);
        assert_eq!(debouncer.deadline(), None);
    }

    #[test]
    fn deadline_tracks_latest_submission() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(DELAY);
        assert_eq!(debouncer.deadline(), None);

        debouncer.submit("a".into(), start);
        assert_eq!(debouncer.deadline(), Some(start + DELAY));

        let later = start + Duration::from_millis(200);
        debouncer.submit("ab".into(), later);
        assert_eq!(debouncer.deadline(), Some(later + DELAY));
    }
}
