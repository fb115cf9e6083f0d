use crate::Frequency;

pub const MIN_FREQUENCY: Frequency = 500;
pub const MAX_FREQUENCY: Frequency = 2000;
pub const DEFAULT_FREQUENCY: Frequency = 1000;

pub const LOW_FREQUENCY: Frequency = 800;
pub const MEDIUM_FREQUENCY: Frequency = 1200;
pub const HIGH_FREQUENCY: Frequency = 1800;

/// Burst/deadline ratio at which the policy leaves the low frequency.
pub const MEDIUM_RATIO_THRESHOLD: f64 = 0.3;
/// Burst/deadline ratio at which the policy switches to the high frequency.
pub const HIGH_RATIO_THRESHOLD: f64 = 0.7;

pub const STATIC_POWER: f64 = 0.2; // W
pub const CAPACITANCE: f64 = 1e-8;

pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 10;

pub const DEFAULT_CHART_WIDTH: usize = 50;

/// How the trace's time axis advances.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClockMode {
    /// Sum of executed burst times, in seconds.
    #[default]
    Logical,
    /// Real time elapsed since the run started.
    WallClock,
}
