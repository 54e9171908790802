//! Fixed-timestep frame clock.
//!
//! Simulation runs at a fixed tick rate regardless of display refresh:
//! elapsed wall time accrues in an accumulator and is consumed in whole
//! ticks, so per-tick semantics (ripple decay, particle ages) behave the
//! same at 60 Hz and 144 Hz. On a 30 Hz display each frame simply consumes
//! two ticks.

/// Simulation tick rate (Hz). All per-tick constants assume this rate.
pub const TICK_HZ: f64 = 60.0;

/// Most ticks consumed per rendered frame. After a longer stall the backlog
/// is dropped instead of replayed, so the app never spirals trying to catch
/// up.
const MAX_CATCH_UP: u32 = 4;

pub struct FrameClock {
    step_dt: f64,
    accumulator: f64,
    sim_time: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            step_dt: 1.0 / TICK_HZ,
            accumulator: 0.0,
            sim_time: 0.0,
        }
    }

    /// Accrue `real_dt` seconds of wall time and return how many whole ticks
    /// the caller should simulate.
    pub fn advance(&mut self, real_dt: f64) -> u32 {
        self.accumulator += real_dt.max(0.0);
        let steps = (self.accumulator / self.step_dt) as u32;
        if steps > MAX_CATCH_UP {
            self.accumulator = 0.0;
            MAX_CATCH_UP
        } else {
            self.accumulator -= steps as f64 * self.step_dt;
            steps
        }
    }

    /// Consume one tick and return the new simulation time in seconds.
    pub fn tick(&mut self) -> f32 {
        self.sim_time += self.step_dt;
        self.sim_time as f32
    }

    /// Simulation time of the last consumed tick (seconds).
    pub fn time_s(&self) -> f32 {
        self.sim_time as f32
    }

    /// Duration of one tick (seconds).
    pub fn step_dt_s(&self) -> f32 {
        self.step_dt as f32
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
