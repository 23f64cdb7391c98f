//! Frame timing for the render loop.
//!
//! The driver measures wall-clock time between frames and hands the pool a
//! delta capped at [`MAX_FRAME_DELTA`](crate::config::MAX_FRAME_DELTA), so a
//! stalled frame cannot blow up the Euler integration.
//!
//! # Example
//!
//! ```ignore
//! use fountain::time::FrameClock;
//!
//! let mut clock = FrameClock::new(0.1);
//!
//! // In your render loop:
//! let dt = clock.update();
//! pool.step(dt);
//!
//! println!("Frame {} at {:.1} FPS", clock.frame(), clock.fps());
//! ```

use std::time::{Duration, Instant};

/// How often the FPS estimate is refreshed.
pub const FPS_UPDATE_INTERVAL: Duration = Duration::from_millis(500);

/// Per-frame delta tracking with an upper bound on the reported delta.
#[derive(Debug)]
pub struct FrameClock {
    /// When the clock was created or last reset.
    start: Instant,
    /// When the last frame occurred.
    last_frame: Instant,
    /// Largest delta handed out, in seconds.
    max_delta: f32,
    /// Measured time since last frame, before clamping.
    raw_delta_secs: f32,
    /// Clamped time since last frame.
    delta_secs: f32,
    /// Total elapsed time in seconds.
    elapsed_secs: f32,
    /// Total frames since start.
    frame_count: u64,
    /// Frames per second, refreshed every `FPS_UPDATE_INTERVAL`.
    fps: f32,
    /// Frame count at last FPS update.
    fps_frame_count: u64,
    /// Time of last FPS calculation.
    fps_update_time: Instant,
}

impl FrameClock {
    /// Clock starting now.
    pub fn new(max_delta: f32) -> Self {
        Self::starting_at(Instant::now(), max_delta)
    }

    /// Clock whose first frame is measured from `now`.
    pub fn starting_at(now: Instant, max_delta: f32) -> Self {
        Self {
            start: now,
            last_frame: now,
            max_delta,
            raw_delta_secs: 0.0,
            delta_secs: 0.0,
            elapsed_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
        }
    }

    /// Mark a new frame and return the clamped delta in seconds.
    pub fn update(&mut self) -> f32 {
        self.update_at(Instant::now())
    }

    /// Mark a new frame observed at `now`.
    pub fn update_at(&mut self, now: Instant) -> f32 {
        self.raw_delta_secs = now.saturating_duration_since(self.last_frame).as_secs_f32();
        self.delta_secs = self.raw_delta_secs.min(self.max_delta);
        self.last_frame = now;
        self.elapsed_secs = now.saturating_duration_since(self.start).as_secs_f32();
        self.frame_count += 1;

        let fps_elapsed = now.saturating_duration_since(self.fps_update_time);
        if fps_elapsed >= FPS_UPDATE_INTERVAL {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }

        self.delta_secs
    }

    /// Whether the last `update` refreshed the FPS estimate.
    #[inline]
    pub fn fps_refreshed(&self) -> bool {
        self.frame_count > 0 && self.fps_frame_count == self.frame_count
    }

    /// Clamped delta of the last frame.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Unclamped delta of the last frame.
    #[inline]
    pub fn raw_delta(&self) -> f32 {
        self.raw_delta_secs
    }

    #[inline]
    pub fn max_delta(&self) -> f32 {
        self.max_delta
    }

    /// Seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }

    /// Restart timing from now. The next delta is measured from this call.
    pub fn reset(&mut self) {
        *self = Self::new(self.max_delta);
    }
}
