pub mod scheduler;
pub mod edf_scheduler;
pub mod frequency;

pub use scheduler::{Scheduler, SchedulerOptions, SchedulerState, SimulationReport};
pub use edf_scheduler::EarliestDeadlineFirst;
