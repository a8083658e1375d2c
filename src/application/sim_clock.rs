/// Bounds and step applied to every interval adjustment
const MIN_INTERVAL_MS: u32 = 1;
const MAX_INTERVAL_MS: u32 = 1000;
const ADJUST_STEP_MS: u32 = 25;

/// Interval the clock starts with
const INITIAL_INTERVAL_MS: u32 = 200;

/// SimClock decides when a simulation step is due.
///
/// The check is a synchronous poll the frame loop makes once per frame:
/// frame deltas accumulate here, and each time they reach the interval the
/// accumulator resets and one step is granted. Pausing does not stop the
/// cadence - tick opportunities keep elapsing and are discarded - so
/// unpausing resumes on schedule instead of firing immediately.
///
/// One interval drives both the tick cadence and the on-screen speed
/// readout; there is no second copy to fall out of sync.
pub struct SimClock {
    interval_ms: u32,
    elapsed_ms: f32,
    paused: bool,
}

impl SimClock {
    pub fn new() -> Self {
        Self {
            interval_ms: INITIAL_INTERVAL_MS,
            elapsed_ms: 0.0,
            paused: false,
        }
    }

    /// Account for one rendered frame. Returns true when a step should
    /// run now: the interval has elapsed and the clock is not paused.
    /// Grants at most one step per call.
    pub fn poll(&mut self, frame_dt: f32) -> bool {
        self.elapsed_ms += frame_dt * 1000.0;
        if self.elapsed_ms < self.interval_ms as f32 {
            return false;
        }

        self.elapsed_ms = 0.0;
        !self.paused
    }

    /// Shorten the interval by one step, snapping to the lower bound
    pub fn speed_up(&mut self) {
        self.interval_ms = self
            .interval_ms
            .saturating_sub(ADJUST_STEP_MS)
            .max(MIN_INTERVAL_MS);
    }

    /// Lengthen the interval by one step, snapping to the upper bound
    pub fn slow_down(&mut self) {
        self.interval_ms = (self.interval_ms + ADJUST_STEP_MS).min(MAX_INTERVAL_MS);
    }

    /// Flip the paused flag, returning the new value
    pub fn toggle_paused(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    pub const fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// The value the speed overlay shows: 0.0 at the slowest interval,
    /// 9.99 at the fastest. Derived from the interval that drives `poll`,
    /// so the readout cannot drift from the real cadence.
    pub fn speed_value(&self) -> f32 {
        (MAX_INTERVAL_MS - self.interval_ms) as f32 / 100.0
    }
}

impl Default for SimClock {
    fn default() -> Self {
        Self::new()
    }
}
