use std::collections::BinaryHeap;

use crate::{Job, TaskSet};

/// Ready queue that hands out jobs earliest deadline first.
#[derive(Debug, Default)]
pub struct EarliestDeadlineFirst {
    ready: BinaryHeap<Job>,
}

impl EarliestDeadlineFirst {
    /// Copies every task of `taskset` into the queue.
    pub fn from_taskset(taskset: &TaskSet) -> Self {
        Self {
            ready: taskset.iter().cloned().map(Job::from).collect(),
        }
    }

    pub fn schedule(&mut self) -> Option<Job> {
        self.ready.pop()
    }

    pub fn peek(&self) -> Option<&Job> {
        self.ready.peek()
    }

    pub fn len(&self) -> usize {
        self.ready.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ready.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Task;

    #[test]
    fn test_schedule_drains_in_deadline_order() {
        let taskset = TaskSet::new(vec![
            Task::new(1, 9, 10, 300).unwrap(),
            Task::new(2, 1, 10, 100).unwrap(),
            Task::new(3, 5, 10, 200).unwrap(),
        ])
        .unwrap();
        let mut queue = EarliestDeadlineFirst::from_taskset(&taskset);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek().map(|j| j.task_id()), Some(2));

        let order: Vec<_> = std::iter::from_fn(|| queue.schedule()).map(|j| j.task_id()).collect();
        assert_eq!(order, vec![2, 3, 1]);
        assert!(queue.is_empty());
        // the taskset itself is untouched
        assert_eq!(taskset.len(), 3);
    }
}
