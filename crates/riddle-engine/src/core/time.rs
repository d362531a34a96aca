/// Maximum number of catch-up steps one frame may produce.
///
/// Browsers stop animation frames for background tabs; on return the host
/// hands us one huge delta. The pacing timers only need to fire once, not
/// replay an hour of ticks, so the backlog is capped.
const MAX_CATCHUP_STEPS: u32 = 10;

/// Fixed timestep accumulator.
///
/// Converts the host's variable frame deltas into a whole number of
/// fixed-size steps so the flow's scheduled transitions advance at a stable,
/// deterministic rate.
pub struct FixedTimestep {
    /// Duration of one step in seconds.
    dt: f32,
    /// Frame time carried over from previous frames.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            accumulator: 0.0,
        }
    }

    /// Add one frame's elapsed time. Returns how many fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.max(0.0);
        self.accumulator = self.accumulator.min(self.dt * MAX_CATCHUP_STEPS as f32);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// Duration of one fixed step in seconds.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}
