//! Time-based contact debouncing.

use embassy_time::{Duration, Instant};

/// Tracks a raw boolean sample stream and reports stable transitions.
/// A transition is accepted once the raw level has held steady for the
/// settle time.
pub struct Debouncer {
    stable: bool,
    last_raw: bool,
    changed_at: Instant,
    settle: Duration,
}

impl Debouncer {
    pub fn new(initial: bool, settle: Duration) -> Self {
        Self {
            stable: initial,
            last_raw: initial,
            changed_at: Instant::now(),
            settle,
        }
    }

    /// Feed one raw sample. Returns `Some(new_level)` exactly once per
    /// accepted transition.
    pub fn sample(&mut self, raw: bool) -> Option<bool> {
        if raw != self.last_raw {
            self.last_raw = raw;
            self.changed_at = Instant::now();
            return None;
        }

        if raw != self.stable && self.changed_at.elapsed() >= self.settle {
            self.stable = raw;
            return Some(raw);
        }

        None
    }

    pub fn stable(&self) -> bool {
        self.stable
    }
}
