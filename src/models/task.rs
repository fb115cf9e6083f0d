use std::time::SystemTime;

use super::{TimeStep, ID};
use crate::constants::{MAX_PRIORITY, MIN_PRIORITY};
use crate::SchedulingError;

/// One unit of work submitted to the scheduler.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    id: ID,
    priority: u8,         // 1..=10, informational only
    burst_time: TimeStep, // ms of simulated execution
    deadline: TimeStep,   // ms, relative to scheduling start
    is_completed: bool,
    arrival_time: SystemTime,
}

impl Task {
    /// Creates a task, rejecting parameters outside the accepted ranges.
    ///
    /// # Arguments
    /// * `id` - Caller-assigned identifier, 1-based in arrival order.
    /// * `priority` - Between 1 and 10. Recorded but not used for ordering.
    /// * `burst_time` - Execution time in milliseconds, must be positive.
    /// * `deadline` - Relative deadline in milliseconds, must be positive.
    pub fn new(
        id: ID,
        priority: u8,
        burst_time: TimeStep,
        deadline: TimeStep,
    ) -> Result<Self, SchedulingError> {
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&priority) {
            return Err(SchedulingError::PriorityOutOfRange { id, priority });
        }
        if burst_time == 0 {
            return Err(SchedulingError::ZeroBurstTime { id });
        }
        if deadline == 0 {
            return Err(SchedulingError::ZeroDeadline { id });
        }

        Ok(Self {
            id,
            priority,
            burst_time,
            deadline,
            is_completed: false,
            arrival_time: SystemTime::now(),
        })
    }

    pub fn id(&self) -> ID {
        self.id
    }

    pub fn priority(&self) -> u8 {
        self.priority
    }

    pub fn burst_time(&self) -> TimeStep {
        self.burst_time
    }

    pub fn deadline(&self) -> TimeStep {
        self.deadline
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    pub fn arrival_time(&self) -> SystemTime {
        self.arrival_time
    }

    /// Burst-to-deadline tightness. Can exceed 1 when the burst is longer
    /// than the deadline.
    pub fn time_ratio(&self) -> f64 {
        self.burst_time as f64 / self.deadline as f64
    }

    /// `time_ratio` clamped to 1, used as the activity factor of the power model.
    pub fn utilization_share(&self) -> f64 {
        self.time_ratio().min(1.0)
    }
}
