//! Fixed-timestep frame pacing.

use std::time::{Duration, Instant};

/// Sleeps away the remainder of each tick to hold a target frame rate
#[derive(Debug, Clone)]
pub struct FramePacer {
    period: Duration,
    next: Option<Instant>,
}

impl FramePacer {
    /// Creates a pacer for `fps` ticks per second (at least 1)
    #[must_use]
    pub fn new(fps: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / fps.max(1),
            next: None,
        }
    }

    /// Duration of one tick
    #[must_use]
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Blocks until the next tick is due
    ///
    /// A late tick does not try to catch up; the schedule restarts from now.
    pub fn wait(&mut self) {
        let now = Instant::now();
        let due = self.next.unwrap_or(now);
        if due > now {
            std::thread::sleep(due - now);
            self.next = Some(due + self.period);
        } else {
            self.next = Some(now + self.period);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_fps() {
        assert_eq!(FramePacer::new(50).period(), Duration::from_millis(20));
        assert_eq!(FramePacer::new(0).period(), Duration::from_secs(1));
    }

    #[test]
    fn test_first_wait_returns_immediately() {
        let mut pacer = FramePacer::new(1);
        let start = Instant::now();
        pacer.wait();
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[test]
    fn test_second_wait_holds_the_period() {
        let mut pacer = FramePacer::new(100);
        let start = Instant::now();
        pacer.wait();
        pacer.wait();
        pacer.wait();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
