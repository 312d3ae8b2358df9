//! Tick clock with fixed-timestep accumulator

/// Longest frame the clock will account for, in seconds
const MAX_FRAME_TIME: f64 = 0.25;

/// Turns elapsed time into whole animation ticks
#[derive(Debug, Clone)]
pub struct TickClock {
    /// Fixed tick interval (default: 1/60 second)
    timestep: f64,
    /// Accumulated time not yet turned into ticks
    accumulator: f64,
}

impl Default for TickClock {
    fn default() -> Self {
        Self::with_rate(60.0)
    }
}

impl TickClock {
    /// Create a clock ticking `hz` times per second
    pub fn with_rate(hz: f64) -> Self {
        Self {
            timestep: 1.0 / hz,
            accumulator: 0.0,
        }
    }

    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Bank `elapsed` seconds and return how much was actually taken.
    /// Negative time is ignored and long frames are clamped.
    pub fn advance_by(&mut self, elapsed: f64) -> f64 {
        // Clamp to avoid spiral of death
        let taken = elapsed.clamp(0.0, MAX_FRAME_TIME);
        self.accumulator += taken;
        taken
    }

    /// Consume one tick's worth of banked time. Returns false if not enough
    /// has built up.
    pub fn next_tick(&mut self) -> bool {
        if self.accumulator < self.timestep {
            return false;
        }
        self.accumulator -= self.timestep;
        true
    }
}
