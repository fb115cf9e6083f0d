use super::{Frequency, TimeStep, ID};

/// What happened when one task was executed.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionRecord {
    pub task_id: ID,
    pub priority: u8,
    pub burst_time: TimeStep,
    pub deadline: TimeStep,
    pub utilization: f64, // system utilization at selection time, informational
    pub time_ratio: f64,
    pub frequency: Frequency,
    pub power: f64,             // W
    pub energy: f64,            // J used by this task
    pub cumulative_energy: f64, // J
    pub time: f64,              // s, trace time axis
}
