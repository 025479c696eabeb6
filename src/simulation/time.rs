//! Per-frame time context passed into every core call.

/// Frame rate and time dilation for one simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeContext {
    /// Frames per second the simulation is stepped at.
    pub fps: f32,
    /// Global time dilation; 1.0 is real time, 2.0 runs twice as fast.
    pub time_factor: f32,
}

impl TimeContext {
    /// Real-time context at `fps`.
    pub fn new(fps: f32) -> Self {
        Self {
            fps,
            time_factor: 1.0,
        }
    }

    /// Same frame rate with a different time dilation.
    pub fn with_time_factor(self, time_factor: f32) -> Self {
        Self {
            time_factor,
            ..self
        }
    }

    /// Simulated seconds covered by one frame.
    pub fn dt(&self) -> f32 {
        self.time_factor / self.fps
    }

    /// Frames that make up one simulated second.
    pub fn frames_per_simulated_second(&self) -> f32 {
        self.fps / self.time_factor
    }
}
