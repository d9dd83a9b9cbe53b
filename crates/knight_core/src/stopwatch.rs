//! Attempt timer.
//!
//! The elapsed time of a round is display-only and never gates a state
//! transition. The stopwatch is frozen when a route is completed and cleared
//! when the round is reset or replaced, so a stale reading can never leak into
//! the next round.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default)]
pub struct Stopwatch {
    /// When the first move was made
    started: Option<Instant>,
    /// Final reading once stopped
    frozen: Option<Duration>,
}

impl Stopwatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the clock. Does nothing if it was already started.
    pub fn start(&mut self) {
        if self.started.is_none() {
            self.started = Some(Instant::now());
        }
    }

    /// Freeze the reading and return it (None if never started).
    pub fn stop(&mut self) -> Option<Duration> {
        if self.frozen.is_none() {
            self.frozen = self.started.map(|s| s.elapsed());
        }
        self.frozen
    }

    /// Cancel and clear.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Live reading while running, frozen reading once stopped.
    pub fn elapsed(&self) -> Option<Duration> {
        self.frozen.or_else(|| self.started.map(|s| s.elapsed()))
    }
}

#[cfg(test)]
#[path = "stopwatch_tests.rs"]
mod stopwatch_tests;
