//! Session time accumulation and wall-clock frame pacing.

use web_time::{Duration, Instant};

/// Session clock: accumulates frame deltas into elapsed session time and
/// keeps a smoothed FPS estimate.
///
/// Motion models read the elapsed time, camera movement reads the delta.
pub struct FrameTiming {
    /// Seconds since the session started
    elapsed: f32,
    /// Delta of the most recent frame
    last_delta: f32,
    /// Frames advanced so far
    frame_count: u64,
    /// Smoothed FPS using exponential moving average
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0)
    smoothing: f32,
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameTiming {
    /// Create a clock at session time zero.
    pub fn new() -> Self {
        Self {
            elapsed: 0.0,
            last_delta: 0.0,
            frame_count: 0,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Advance by one frame of `dt` seconds and return the new elapsed
    /// session time. Negative or non-finite deltas count as zero.
    pub fn advance(&mut self, dt: f32) -> f32 {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.elapsed += dt;
        self.last_delta = dt;
        self.frame_count += 1;

        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }
        self.elapsed
    }

    /// Seconds since the session started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Delta passed to the latest [`advance`](Self::advance).
    pub fn last_delta(&self) -> f32 {
        self.last_delta
    }

    /// Number of frames advanced.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the current FPS (smoothed)
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

/// Wall-clock frame pacer for hosts that drive the session in real time.
pub struct FramePacer {
    /// Minimum frame duration based on target FPS
    min_frame_duration: Duration,
    /// Last frame timestamp
    last_frame: Instant,
}

impl FramePacer {
    /// Pacer targeting `target_fps` (0 = unlimited).
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };
        Self {
            min_frame_duration,
            last_frame: Instant::now(),
        }
    }

    /// Whether enough time has passed since the last frame to render.
    pub fn should_render(&self) -> bool {
        self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// Mark a frame boundary and return the seconds since the previous one.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_accumulates_elapsed() {
        let mut timing = FrameTiming::new();
        for _ in 0..60 {
            let _ = timing.advance(1.0 / 60.0);
        }
        assert!((timing.elapsed() - 1.0).abs() < 1e-4);
        assert_eq!(timing.frame_count(), 60);
        assert!((timing.fps() - 60.0).abs() < 1e-2);
    }

    #[test]
    fn bad_deltas_do_not_move_time() {
        let mut timing = FrameTiming::new();
        assert_eq!(timing.advance(-1.0), 0.0);
        assert_eq!(timing.advance(f32::NAN), 0.0);
        assert_eq!(timing.last_delta(), 0.0);
        assert_eq!(timing.frame_count(), 2);
    }

    #[test]
    fn unlimited_pacer_always_renders() {
        let mut pacer = FramePacer::new(0);
        assert!(pacer.should_render());
        assert!(pacer.tick() >= 0.0);
    }
}
