// inputmodule/src/utils/ticker.rs
//! Fixed-cadence gate for game and animation loops.

use std::time::{Duration, Instant};

/// Fixed-cadence gate. `due()` answers whether a full period has elapsed
/// since the last accepted tick; earlier calls are no-ops. The period is
/// measured from the previously accepted tick, not from an absolute
/// schedule, so a late tick does not cause a burst of catch-up ticks.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    last: Instant,
}

impl Ticker {
    /// A ticker whose first tick is due one period from now
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            last: Instant::now(),
        }
    }

    /// Accept a tick if the period has elapsed
    pub fn due(&mut self) -> bool {
        self.due_at(Instant::now())
    }

    fn due_at(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last) >= self.period {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// The configured period
    pub fn period(&self) -> Duration {
        self.period
    }
}
