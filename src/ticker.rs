//! Fixed-interval frame pacing.

use std::thread;
use std::time::{Duration, Instant};

/// Paces a loop against absolute deadlines: each wait sleeps off whatever
/// is left of the current tick, so a slow frame eats into the next sleep
/// instead of stretching every later tick.
pub struct Ticker {
    interval: Duration,
    deadline: Instant,
}

impl Ticker {
    pub fn new(interval: Duration) -> Ticker {
        Ticker {
            interval,
            deadline: Instant::now(),
        }
    }

    /// Sleeps until the current deadline, then advances it one interval.
    pub fn wait(&mut self) {
        if let Some(remaining) = self.deadline.checked_duration_since(Instant::now()) {
            thread::sleep(remaining);
        }
        self.deadline += self.interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_at_least_the_interval() {
        let interval = Duration::from_millis(10);
        let start = Instant::now();
        let mut ticker = Ticker::new(interval);
        ticker.wait(); // first tick fires immediately
        ticker.wait();
        ticker.wait();
        assert!(start.elapsed() >= 2 * interval);
    }
}
