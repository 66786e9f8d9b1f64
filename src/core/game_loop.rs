//! Frame pacing for the real-time loop.
//!
//! Each frame measures the wall-clock time since the previous one, clamps it
//! to [`MAX_FRAME_DT`] so a stall never produces one huge simulation step,
//! and sleeps off whatever is left of the target frame interval.

use super::constants::{MAX_FRAME_DT, MAX_TARGET_FPS, MIN_TARGET_FPS};
use std::time::{Duration, Instant};

/// Convert a raw frame gap into a simulation step in seconds.
pub fn clamp_delta(elapsed: Duration, max_dt: f32) -> f32 {
    elapsed.as_secs_f32().min(max_dt)
}

/// Time left in the frame budget, or `None` if the frame ran long.
pub fn remaining_budget(frame_work: Duration, target: Duration) -> Option<Duration> {
    target.checked_sub(frame_work).filter(|d| !d.is_zero())
}

/// Target interval for a frame rate, clamped to the supported range.
pub fn frame_interval(target_fps: u32) -> Duration {
    let fps = target_fps.clamp(MIN_TARGET_FPS, MAX_TARGET_FPS);
    Duration::from_secs_f64(1.0 / fps as f64)
}

#[derive(Debug)]
pub struct FrameClock {
    interval: Duration,
    max_dt: f32,
    last_frame: Instant,
    frame_start: Instant,
}

impl FrameClock {
    pub fn new(target_fps: u32) -> Self {
        let now = Instant::now();
        Self {
            interval: frame_interval(target_fps),
            max_dt: MAX_FRAME_DT,
            last_frame: now,
            frame_start: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start a new frame and return its clamped delta time.
    pub fn begin_frame(&mut self) -> f32 {
        let now = Instant::now();
        let dt = clamp_delta(now.duration_since(self.last_frame), self.max_dt);
        self.last_frame = now;
        self.frame_start = now;
        dt
    }

    /// Sleep for the rest of the current frame interval, if any is left.
    pub fn end_frame(&self) {
        if let Some(rest) = remaining_budget(self.frame_start.elapsed(), self.interval) {
            std::thread::sleep(rest);
        }
    }
}
