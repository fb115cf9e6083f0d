use std::cmp::Ordering;

use super::{Task, TimeStep, ID};

/// Copy of a task as it sits in the ready queue.
///
/// Jobs compare by deadline only, reversed, so that a `BinaryHeap<Job>`
/// pops the earliest deadline first. Equal deadlines compare equal and
/// leave the pop order unspecified.
#[derive(Debug, Clone)]
pub struct Job {
    task: Task,
}

impl Job {
    pub fn new(task: Task) -> Self {
        Self { task }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn task_id(&self) -> ID {
        self.task.id()
    }

    pub fn deadline(&self) -> TimeStep {
        self.task.deadline()
    }
}

impl From<Task> for Job {
    fn from(task: Task) -> Self {
        Self::new(task)
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.deadline() == other.deadline()
    }
}

impl Eq for Job {}

impl PartialOrd for Job {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Job {
    fn cmp(&self, other: &Self) -> Ordering {
        other.deadline().cmp(&self.deadline())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn test_heap_pops_earliest_deadline() {
        let mut heap: BinaryHeap<Job> = [(1, 2000), (2, 500), (3, 1000)]
            .into_iter()
            .map(|(id, deadline)| Job::from(Task::new(id, 1, 100, deadline).unwrap()))
            .collect();

        assert_eq!(heap.pop().map(|j| j.task_id()), Some(2));
        assert_eq!(heap.pop().map(|j| j.task_id()), Some(3));
        assert_eq!(heap.pop().map(|j| j.task_id()), Some(1));
        assert!(heap.pop().is_none());
    }
}
