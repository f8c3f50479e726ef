//! Frame timing
//!
//! The simulation is stepped with the real time since the previous frame,
//! capped from below by the frame-rate cap and from above by `MAX_FRAME_DT`.

use std::time::{Duration, Instant};

use crate::consts::MAX_FRAME_DT;

/// Milliseconds since the clock was created
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    start: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Timing for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTiming {
    /// Seconds to simulate
    pub dt: f32,
    pub now_ms: u64,
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    fps_cap: u32,
    last_ms: Option<u64>,
    // FPS tracking
    frame_times: [u64; 60],
    frame_index: usize,
    frames_seen: usize,
    fps: u32,
}

impl FrameClock {
    pub fn new(fps_cap: u32) -> Self {
        Self {
            fps_cap: fps_cap.max(1),
            last_ms: None,
            frame_times: [0; 60],
            frame_index: 0,
            frames_seen: 0,
            fps: 0,
        }
    }

    /// Shortest time a frame may take
    pub fn frame_budget(&self) -> Duration {
        Duration::from_micros(1_000_000 / self.fps_cap as u64)
    }

    /// Start a frame at `now_ms` and measure dt since the previous one
    pub fn tick(&mut self, now_ms: u64) -> FrameTiming {
        let min_dt = 1.0 / self.fps_cap as f32;
        let dt = match self.last_ms {
            Some(last) => (now_ms.saturating_sub(last) as f32 / 1000.0).clamp(min_dt, MAX_FRAME_DT),
            None => min_dt,
        };
        self.last_ms = Some(now_ms);

        // Oldest of the last 60 frame times sits at the write index
        let oldest = self.frame_times[self.frame_index];
        self.frame_times[self.frame_index] = now_ms;
        self.frame_index = (self.frame_index + 1) % self.frame_times.len();
        self.frames_seen += 1;
        if self.frames_seen > self.frame_times.len() {
            let elapsed = now_ms.saturating_sub(oldest);
            if elapsed > 0 {
                self.fps = (60_000.0 / elapsed as f64).round() as u32;
            }
        }

        FrameTiming { dt, now_ms }
    }

    /// Time left in the frame that started at `frame_start_ms`
    pub fn remaining(&self, frame_start_ms: u64, now_ms: u64) -> Duration {
        self.frame_budget()
            .saturating_sub(Duration::from_millis(now_ms.saturating_sub(frame_start_ms)))
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame_uses_cap() {
        let mut clock = FrameClock::new(60);
        let timing = clock.tick(1234);
        assert!((timing.dt - 1.0 / 60.0).abs() < 1e-6);
        assert_eq!(timing.now_ms, 1234);
    }

    #[test]
    fn test_dt_is_clamped() {
        let mut clock = FrameClock::new(60);
        clock.tick(0);
        // Faster than the cap
        assert!((clock.tick(5).dt - 1.0 / 60.0).abs() < 1e-6);
        // Normal frame
        assert!((clock.tick(25).dt - 0.020).abs() < 1e-6);
        // Long stall
        assert_eq!(clock.tick(2025).dt, MAX_FRAME_DT);
    }

    #[test]
    fn test_fps_measurement() {
        let mut clock = FrameClock::new(60);
        for frame in 0..=120u64 {
            clock.tick(frame * 20);
        }
        assert_eq!(clock.fps(), 50);
    }

    #[test]
    fn test_remaining_budget() {
        let clock = FrameClock::new(50);
        assert_eq!(clock.remaining(100, 105), Duration::from_millis(15));
        assert_eq!(clock.remaining(100, 200), Duration::ZERO);
    }
}
