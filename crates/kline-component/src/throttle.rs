// File: crates/kline-component/src/throttle.rs
// Summary: Leading-edge rate gate for repeated notifications.

use std::time::{Duration, Instant};

/// Lets at most one request through per interval. The first request of a
/// window passes and opens the window; later requests inside it are dropped,
/// not queued. Callers supply the clock, so tests never sleep.
#[derive(Clone, Copy, Debug)]
pub struct Throttle {
    interval: Duration,
    window_start: Option<Instant>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            window_start: None,
        }
    }

    /// Whether a request arriving at `now` passes the gate. A passing
    /// request starts a new window at `now`.
    pub fn allow(&mut self, now: Instant) -> bool {
        match self.window_start {
            Some(start) if now.duration_since(start) < self.interval => false,
            _ => {
                self.window_start = Some(now);
                true
            }
        }
    }
}
