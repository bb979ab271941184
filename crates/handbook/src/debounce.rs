//! Trailing-edge coalescing of rapid query submissions.
//!
//! Searching is a pure function of (index, query); deciding *when* to run a
//! query is a caller-side concern and lives here, outside the index. The
//! [`Debouncer`] coalesces a burst of submissions so that only the latest
//! query fires, and only once the configured delay has passed with no newer
//! submission.
//!
//! The implementation is synchronous and clock-injected: the caller passes
//! explicit [`Instant`]s, so there are no timers or threads and behavior is
//! fully deterministic under test.

use std::time::{Duration, Instant};

/// Coalesces rapid query submissions down to the trailing edge.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<Pending>,
}

#[derive(Debug, Clone)]
struct Pending {
    query: String,
    deadline: Instant,
}

impl Debouncer {
    /// Create a debouncer with the given trailing-edge delay.
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// The configured delay.
    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Submit a query at the given instant.
    ///
    /// Replaces any pending query and re-arms the deadline; a newer
    /// submission simply supersedes an older one.
    pub fn submit_at(&mut self, query: impl Into<String>, now: Instant) {
        self.pending = Some(Pending {
            query: query.into(),
            deadline: now + self.delay,
        });
    }

    /// Poll for a ready query at the given instant.
    ///
    /// Returns the pending query once its deadline has passed, clearing it;
    /// returns `None` while the delay is still running or when nothing is
    /// pending.
    pub fn poll_at(&mut self, now: Instant) -> Option<String> {
        let ready = self.pending.as_ref().is_some_and(|p| now >= p.deadline);
        if ready {
            self.pending.take().map(|p| p.query)
        } else {
            None
        }
    }

    /// Check whether a query is pending (submitted but not yet fired).
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Drop any pending query without firing it.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DELAY: Duration = Duration::from_millis(300);

    #[test]
    fn test_fires_after_delay() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.submit_at("top", start);
        assert_eq!(debouncer.poll_at(start + DELAY), Some("top".to_string()));
    }

    #[test]
    fn test_does_not_fire_early() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.submit_at("top", start);
        assert_eq!(debouncer.poll_at(start + DELAY / 2), None);
        assert!(debouncer.is_pending());
    }

    #[test]
    fn test_newer_submission_supersedes_older() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.submit_at("t", start);
        debouncer.submit_at("to", start + Duration::from_millis(100));
        debouncer.submit_at("top", start + Duration::from_millis(200));

        // The older deadlines no longer matter; only the last query fires.
        assert_eq!(debouncer.poll_at(start + Duration::from_millis(400)), None);
        assert_eq!(
            debouncer.poll_at(start + Duration::from_millis(500)),
            Some("top".to_string())
        );
    }

    #[test]
    fn test_fires_at_most_once() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.submit_at("top", start);
        assert!(debouncer.poll_at(start + DELAY).is_some());
        assert_eq!(debouncer.poll_at(start + DELAY * 2), None);
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_poll_with_nothing_pending() {
        let mut debouncer = Debouncer::new(DELAY);
        assert_eq!(debouncer.poll_at(Instant::now()), None);
    }

    #[test]
    fn test_cancel_drops_pending() {
        let mut debouncer = Debouncer::new(DELAY);
        let start = Instant::now();

        debouncer.submit_at("top", start);
        debouncer.cancel();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll_at(start + DELAY), None);
    }

    #[test]
    fn test_zero_delay_fires_immediately() {
        let mut debouncer = Debouncer::new(Duration::ZERO);
        let start = Instant::now();

        debouncer.submit_at("top", start);
        assert_eq!(debouncer.poll_at(start), Some("top".to_string()));
    }
}
