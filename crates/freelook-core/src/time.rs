//! Frame clock
//!
//! Tracks real elapsed time and a clamped per-frame delta for the host loop.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the frame clock
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeConfig {
    /// Maximum delta time, so a long stall doesn't teleport the actor
    pub max_delta_time: f32,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            max_delta_time: 0.25,
        }
    }
}

/// Frame time tracking
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    /// Configuration
    pub config: TimeConfig,
    /// Real time since start in seconds, never clamped
    pub real_time: f64,
    /// Delta time for this frame, clamped to `max_delta_time`
    pub delta_time: f32,
    /// Frame counter
    pub frame_count: u64,
}

impl FrameClock {
    /// Advance the clock by the real time elapsed since the previous frame
    pub fn update(&mut self, elapsed: Duration) {
        self.real_time += elapsed.as_secs_f64();
        self.delta_time = elapsed.as_secs_f32().min(self.config.max_delta_time);
        self.frame_count += 1;
    }

    /// Wall-clock seconds since the clock started
    pub fn now(&self) -> f64 {
        self.real_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock() {
        let mut clock = FrameClock::default();
        clock.update(Duration::from_millis(16));

        assert!((clock.delta_time - 0.016).abs() < 1e-6);
        assert_eq!(clock.frame_count, 1);
        assert!((clock.now() - 0.016).abs() < 1e-9);
    }

    #[test]
    fn test_stall_clamps_delta_but_not_time() {
        let mut clock = FrameClock::default();
        clock.update(Duration::from_secs(3));

        assert_eq!(clock.delta_time, 0.25);
        assert!((clock.now() - 3.0).abs() < 1e-9);
    }
}
