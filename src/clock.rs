//! Time sources and frame pacing.
//!
//! The simulation never reads the wall clock itself; callers pass a
//! millisecond timestamp from a [`Clock`] into each frame.

use crate::constants::{FRAME_INTERVAL_MS, TARGET_FPS};
use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic milliseconds since some fixed origin.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock measured from process start.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Deterministic clock that only moves when told to.
#[derive(Debug, Clone, Default)]
pub struct FixedStepClock {
    now: Cell<u64>,
    step_ms: u64,
}

impl FixedStepClock {
    pub fn new(step_ms: u64) -> Self {
        Self {
            now: Cell::new(0),
            step_ms,
        }
    }

    /// One step per frame at the target frame rate.
    pub fn per_frame() -> Self {
        Self::new(FRAME_INTERVAL_MS)
    }

    pub fn advance(&self) {
        self.now.set(self.now.get() + self.step_ms);
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }
}

impl Clock for FixedStepClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// Sleeps so that frames start at a steady rate, like a `tick(fps)` limiter.
#[derive(Debug)]
pub struct FrameLimiter {
    frame: Duration,
    next_frame: Instant,
}

impl FrameLimiter {
    pub fn new(fps: u32) -> Self {
        let frame = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        Self {
            frame,
            next_frame: Instant::now(),
        }
    }

    pub fn target() -> Self {
        Self::new(TARGET_FPS)
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Block until the next frame is due. A late frame does not try to
    /// catch up; the schedule restarts from now.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next_frame > now {
            std::thread::sleep(self.next_frame - now);
            self.next_frame += self.frame;
        } else {
            self.next_frame = now + self.frame;
        }
    }
}
