//! Real-time cadence between ticks.

use std::time::Duration;

/// Decides how long the loop waits after each tick.
pub trait Pacer {
    fn pace(&mut self);
}

/// Runs ticks back to back.  Use for tests and batch runs.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoPacing;

impl Pacer for NoPacing {
    #[inline]
    fn pace(&mut self) {}
}

/// Sleeps a fixed interval after every tick.
#[derive(Copy, Clone, Debug)]
pub struct SleepPacer {
    pub interval: Duration,
}

impl SleepPacer {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }
}

impl Pacer for SleepPacer {
    fn pace(&mut self) {
        if !self.interval.is_zero() {
            std::thread::sleep(self.interval);
        }
    }
}
