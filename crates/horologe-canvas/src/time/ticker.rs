use std::thread;
use std::time::{Duration, Instant};

/// Frame pacer enforcing a minimum inter-frame delay.
///
/// `wait` blocks until `interval` has elapsed since the previous tick. The
/// interval is a minimum, not a deadline: a frame that overruns its slot makes
/// the next tick start immediately, and late ticks are never skipped or
/// batched to catch up.
///
/// One `Ticker` per loop; the baseline is taken at construction.
#[derive(Debug)]
pub struct Ticker {
    interval: Duration,
    last: Instant,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Instant::now(),
        }
    }

    /// Blocks out the remainder of the current frame slot.
    pub fn wait(&mut self) {
        let deadline = self.last + self.interval;
        let now = Instant::now();
        if now < deadline {
            thread::sleep(deadline - now);
        }
        // Re-baseline on the actual wake time so an overrun shifts the
        // schedule instead of producing a burst of catch-up frames.
        self.last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wait_enforces_minimum_delay() {
        let interval = Duration::from_millis(20);
        let mut ticker = Ticker::new(interval);
        let start = Instant::now();
        ticker.wait();
        assert!(start.elapsed() >= interval);
    }

    #[test]
    fn zero_interval_returns_promptly() {
        let mut ticker = Ticker::new(Duration::ZERO);
        let start = Instant::now();
        for _ in 0..100 {
            ticker.wait();
        }
        assert!(start.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn overrun_does_not_batch_ticks() {
        let interval = Duration::from_millis(10);
        let mut ticker = Ticker::new(interval);

        // Simulate a slow frame, twice the slot.
        thread::sleep(interval * 2);
        ticker.wait();

        // The next wait still honors the full minimum delay.
        let start = Instant::now();
        ticker.wait();
        assert!(start.elapsed() >= interval);
    }
}
