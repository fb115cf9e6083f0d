//! Earliest-Deadline-First scheduling with a per-task DVFS policy,
//! accounting the energy drawn by a simulated processor.

pub mod core;
pub mod input;
pub mod models;
pub mod report;
pub mod utils;

pub use models::scheduler;
pub use models::{
    EnergyTrace, ExecutionRecord, Frequency, Job, PowerModel, Task, TaskSet, TimeStep,
    TraceSample, ID,
};
pub use scheduler::{Scheduler, SchedulerOptions, SchedulerState, SimulationReport};
pub use utils::constants;
pub use utils::{ClockMode, SchedulingError};
