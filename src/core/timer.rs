/// Self-contained timers - each accumulates delta time and decides when to fire

/// Simulation accumulator - yields fixed timesteps for deterministic stepping
#[derive(Debug, Clone)]
pub struct Accumulator {
    timestep: f32,
    accumulator: f32,
    max_steps: u8,
}

impl Accumulator {
    /// Create accumulator with fixed timestep
    pub fn new(hz: f32, max_steps: u8) -> Self {
        Self {
            timestep: 1.0 / hz,
            accumulator: 0.0,
            max_steps,
        }
    }

    /// Update with delta, returns iterator of fixed timesteps to execute
    ///
    /// Time beyond `max_steps` is dropped (keeping at most one step of backlog)
    /// so a long stall does not turn into a burst of catch-up steps.
    pub fn tick(&mut self, delta: f32) -> impl Iterator<Item = f32> {
        self.accumulator += delta.max(0.0);

        let available = (self.accumulator / self.timestep) as usize;
        let steps = available.min(self.max_steps as usize);

        self.accumulator -= steps as f32 * self.timestep;
        if available > steps {
            self.accumulator = self.accumulator.min(self.timestep);
        }

        std::iter::repeat(self.timestep).take(steps)
    }

    pub fn timestep(&self) -> f32 {
        self.timestep
    }
}

/// Throttled timer - minimum interval between fires
#[derive(Debug, Clone, Copy)]
pub struct Throttled {
    min_interval: f32,
    time_since_last: f32,
}

impl Throttled {
    /// Create throttled timer with minimum interval
    pub fn new(min_interval: f32) -> Self {
        Self {
            min_interval,
            time_since_last: min_interval, // Allow immediate first tick
        }
    }

    /// Attempt to fire, returns true if enough time has passed
    pub fn try_tick(&mut self, delta: f32) -> bool {
        self.time_since_last += delta;

        if self.time_since_last >= self.min_interval {
            self.time_since_last = 0.0;
            true
        } else {
            false
        }
    }
}
