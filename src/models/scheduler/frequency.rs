use crate::constants::{
    HIGH_FREQUENCY, HIGH_RATIO_THRESHOLD, LOW_FREQUENCY, MAX_FREQUENCY, MEDIUM_FREQUENCY,
    MEDIUM_RATIO_THRESHOLD, MIN_FREQUENCY,
};
use crate::{Frequency, Task};

/// Whether the processor can run at `frequency` MHz.
pub fn is_supported(frequency: Frequency) -> bool {
    (MIN_FREQUENCY..=MAX_FREQUENCY).contains(&frequency)
}

/// DVFS policy: picks a frequency from the task's own burst/deadline ratio.
///
/// `utilization` is accepted but does not influence the choice; the
/// decision only looks at the task about to run.
pub fn calculate_optimal_frequency(task: &Task, _utilization: f64) -> Frequency {
    let time_ratio = task.time_ratio();
    if time_ratio < MEDIUM_RATIO_THRESHOLD {
        LOW_FREQUENCY
    } else if time_ratio < HIGH_RATIO_THRESHOLD {
        MEDIUM_FREQUENCY
    } else {
        HIGH_FREQUENCY
    }
}
