use std::time::Instant;

use super::TimeStep;
use crate::ClockMode;

/// Time axis of the energy trace.
#[derive(Debug, Clone, Copy)]
pub enum Clock {
    /// Advances by each executed burst.
    Logical { elapsed: f64 },
    WallClock { start: Instant },
}

impl Clock {
    pub fn start(mode: ClockMode) -> Self {
        match mode {
            ClockMode::Logical => Clock::Logical { elapsed: 0.0 },
            ClockMode::WallClock => Clock::WallClock { start: Instant::now() },
        }
    }

    /// Account for `burst_time` ms of execution and return elapsed seconds.
    pub fn advance(&mut self, burst_time: TimeStep) -> f64 {
        match self {
            Clock::Logical { elapsed } => {
                *elapsed += burst_time as f64 / 1000.0;
                *elapsed
            }
            Clock::WallClock { start } => start.elapsed().as_secs_f64(),
        }
    }
}
