use std::time::{Duration, Instant};

/// Wall-clock timer for hosts driving the scheduler from a real frame loop.
pub struct Timer {
    start_time: Instant,
    last_update: Instant,
    /// Time since the last tick.
    pub delta: Duration,
    /// Total elapsed time since creation.
    pub elapsed: Duration,
    /// Total number of ticks.
    pub tick_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Creates a new timer starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            tick_count: 0,
        }
    }

    /// Advances the timer and measures the delta since the previous tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        self.delta = now - self.last_update;
        self.elapsed = now - self.start_time;
        self.last_update = now;
        self.tick_count += 1;
    }

    #[must_use]
    pub fn dt_seconds(&self) -> f32 {
        self.delta.as_secs_f32()
    }
}
