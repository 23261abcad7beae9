//! Frame pacing
//!
//! The loop is single-threaded with a fixed tick: every frame blocks until the
//! target frame duration has passed since the previous one, then measures the
//! real elapsed time as the frame's delta.

use std::thread;
use std::time::{Duration, Instant};

/// Monotonic millisecond ticks plus a blocking wait
pub trait Clock {
    fn ticks_ms(&self) -> u64;
    fn sleep_ms(&mut self, ms: u64);
}

/// Wall clock, ticking from the moment it is created
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn ticks_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn sleep_ms(&mut self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Simulated clock; sleeping advances it instantly
#[derive(Debug, Clone, Copy, Default)]
pub struct ManualClock {
    pub now_ms: u64,
    pub slept_ms: u64, // Total time spent in sleep_ms
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate work taking `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.now_ms += ms;
    }
}

impl Clock for ManualClock {
    fn ticks_ms(&self) -> u64 {
        self.now_ms
    }

    fn sleep_ms(&mut self, ms: u64) {
        self.now_ms += ms;
        self.slept_ms += ms;
    }
}

/// Caps the frame rate and produces the clamped delta time
#[derive(Debug)]
pub struct FramePacer<C: Clock> {
    clock: C,
    last_frame_ms: u64,
    target_ms: u64,
    max_dt: f32,
}

impl<C: Clock> FramePacer<C> {
    /// The first frame is measured from tick zero of `clock`
    pub fn new(clock: C, target_ms: u64, max_dt: f32) -> Self {
        Self {
            clock,
            last_frame_ms: 0,
            target_ms,
            max_dt,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Wait out the rest of the frame budget and return the delta in seconds
    pub fn tick(&mut self) -> f32 {
        let elapsed = self.clock.ticks_ms().saturating_sub(self.last_frame_ms);
        if elapsed < self.target_ms {
            self.clock.sleep_ms(self.target_ms - elapsed);
        }

        let now = self.clock.ticks_ms();
        let dt = now.saturating_sub(self.last_frame_ms) as f32 / 1000.0;
        self.last_frame_ms = now;
        dt.min(self.max_dt)
    }
}
