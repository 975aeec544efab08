//! Simulated frame clock for headless runs.
//!
//! The game is gated on elapsed time, so a headless driver needs a time source
//! that advances by a fixed frame duration instead of the wall clock.

use std::time::Duration;

/// Monotonic time advancing by a fixed frame duration.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame_dt: Duration,
    now: Duration,
    frames: u64,
}

impl FrameClock {
    /// Clock running at `fps` frames per second, starting at zero.
    ///
    /// # Panics
    ///
    /// Panics if `fps` is zero.
    pub fn new(fps: u32) -> Self {
        assert!(fps > 0, "frame rate must be positive");
        Self {
            frame_dt: Duration::from_secs(1) / fps,
            now: Duration::ZERO,
            frames: 0,
        }
    }

    /// Move to the next frame and return its timestamp.
    pub fn advance(&mut self) -> Duration {
        self.now += self.frame_dt;
        self.frames += 1;
        self.now
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn frame_dt(&self) -> Duration {
        self.frame_dt
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_at_zero() {
        let clock = FrameClock::new(60);
        assert_eq!(clock.now(), Duration::ZERO);
        assert_eq!(clock.frames(), 0);
    }

    #[test]
    fn test_advance_accumulates() {
        let mut clock = FrameClock::new(50);
        assert_eq!(clock.frame_dt(), Duration::from_millis(20));
        for _ in 0..50 {
            clock.advance();
        }
        assert_eq!(clock.now(), Duration::from_secs(1));
        assert_eq!(clock.frames(), 50);
    }

    #[test]
    #[should_panic(expected = "frame rate must be positive")]
    fn test_zero_fps_panics() {
        let _ = FrameClock::new(0);
    }
}
