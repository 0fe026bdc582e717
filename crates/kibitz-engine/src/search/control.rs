//! Search control: shared stop flag and wall-clock budget.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Controls when a search should stop.
///
/// Polled by the search every 1024 nodes. The stop flag is shared with the
/// caller racing the deadline, which raises it once the result is no longer
/// wanted; the search then returns early with no result.
#[derive(Debug)]
pub struct SearchControl {
    stopped: Arc<AtomicBool>,
    start: Instant,
    limit: Option<Duration>,
}

impl SearchControl {
    /// Create control without a time limit; only the stop flag ends the search.
    pub fn new_unbounded(stopped: Arc<AtomicBool>) -> Self {
        Self {
            stopped,
            start: Instant::now(),
            limit: None,
        }
    }

    /// Create control that also stops once `limit` has elapsed. The clock
    /// starts immediately.
    pub fn new_timed(stopped: Arc<AtomicBool>, limit: Duration) -> Self {
        Self {
            stopped,
            start: Instant::now(),
            limit: Some(limit),
        }
    }

    /// Check whether the search should abort immediately.
    ///
    /// The clock is only read every 1024 nodes. When the limit fires the stop
    /// flag is raised so later calls return without touching the clock.
    pub fn should_stop(&self, nodes: u64) -> bool {
        if self.stopped.load(Ordering::Relaxed) {
            return true;
        }

        if nodes & 1023 != 0 {
            return false;
        }

        if let Some(limit) = self.limit
            && self.elapsed() >= limit
        {
            self.stop();
            return true;
        }

        false
    }

    /// Raise the stop flag.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Release);
    }

    /// Return `true` once the stop flag is raised.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Acquire)
    }

    /// Elapsed time since the control was created.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use std::time::Duration;

    use super::SearchControl;

    #[test]
    fn unbounded_runs_until_flag() {
        let control = SearchControl::new_unbounded(Arc::new(AtomicBool::new(false)));
        assert!(!control.should_stop(0));
        assert!(!control.should_stop(1024));
        control.stop();
        assert!(control.should_stop(1));
        assert!(control.is_stopped());
    }

    #[test]
    fn shared_flag_is_observed() {
        let flag = Arc::new(AtomicBool::new(false));
        let control = SearchControl::new_unbounded(Arc::clone(&flag));
        flag.store(true, std::sync::atomic::Ordering::Release);
        assert!(control.should_stop(7));
    }

    #[test]
    fn expired_limit_raises_flag_on_poll() {
        let control = SearchControl::new_timed(Arc::new(AtomicBool::new(false)), Duration::ZERO);
        // Off-interval polls skip the clock.
        assert!(!control.should_stop(1));
        assert!(control.should_stop(1024));
        assert!(control.is_stopped());
    }
}
