mod clock;
mod job;
pub mod power;
pub mod record;
pub mod scheduler;
pub mod task;
pub mod taskset;
pub mod trace;

pub use clock::Clock;
pub use job::Job;
pub use power::PowerModel;
pub use record::ExecutionRecord;
pub use task::Task;
pub use taskset::TaskSet;
pub use trace::{EnergyTrace, TraceSample};

/// Milliseconds.
pub type TimeStep = u32;

/// MHz.
pub type Frequency = u32;

pub type ID = u32;
