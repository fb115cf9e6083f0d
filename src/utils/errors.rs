use thiserror::Error;

use crate::models::ID;

/// Errors raised when a task set is assembled for the scheduler.
///
/// Once a task has been accepted no error can occur inside the
/// scheduling loop itself.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchedulingError {
    #[error("task {id}: priority {priority} is outside 1..=10")]
    PriorityOutOfRange { id: ID, priority: u8 },

    #[error("task {id}: burst time must be positive")]
    ZeroBurstTime { id: ID },

    #[error("task {id}: deadline must be positive")]
    ZeroDeadline { id: ID },

    #[error("task {id} was already added")]
    DuplicateTask { id: ID },

    #[error("cannot add task {id}: a run has already started")]
    RunInProgress { id: ID },
}
