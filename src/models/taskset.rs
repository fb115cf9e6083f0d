use super::{Task, ID};
use crate::SchedulingError;

/// Tasks in the order they were submitted.
#[derive(Debug, Clone, Default)]
pub struct TaskSet {
    tasks: Vec<Task>,
}

impl TaskSet {
    pub fn new_empty() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Builds a task set, rejecting duplicate ids.
    pub fn new(tasks: Vec<Task>) -> Result<Self, SchedulingError> {
        let mut taskset = Self::new_empty();
        for task in tasks {
            taskset.add_task(task)?;
        }
        Ok(taskset)
    }

    pub fn add_task(&mut self, task: Task) -> Result<(), SchedulingError> {
        if self.task_exists(task.id()) {
            return Err(SchedulingError::DuplicateTask { id: task.id() });
        }
        self.tasks.push(task);
        Ok(())
    }

    pub fn task_exists(&self, id: ID) -> bool {
        self.tasks.iter().any(|t| t.id() == id)
    }

    /// Id for the next task in 1-based arrival order.
    pub fn next_id(&self) -> ID {
        self.tasks.len() as ID + 1
    }

    pub fn get_tasks(&self) -> &Vec<Task> {
        &self.tasks
    }

    /// Sum of burst/deadline ratios over pending tasks, clamped to 1.
    pub fn utilisation(&self) -> f64 {
        self.tasks
            .iter()
            .filter(|t| !t.is_completed())
            .map(|t| t.time_ratio())
            .sum::<f64>()
            .min(1.0)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<Task> {
        self.tasks.iter()
    }
}

impl IntoIterator for TaskSet {
    type Item = Task;
    type IntoIter = std::vec::IntoIter<Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn task(id: ID, burst: u32, deadline: u32) -> Task {
        Task::new(id, 5, burst, deadline).unwrap()
    }

    #[test]
    fn test_add_task_rejects_duplicates() {
        let mut taskset = TaskSet::new_empty();
        taskset.add_task(task(1, 10, 100)).unwrap();

        assert_eq!(
            taskset.add_task(task(1, 20, 100)),
            Err(SchedulingError::DuplicateTask { id: 1 })
        );
        assert_eq!(taskset.len(), 1);
        assert_eq!(taskset.next_id(), 2);
    }

    #[test]
    fn test_utilisation_is_clamped() {
        let light = TaskSet::new(vec![task(1, 10, 100), task(2, 20, 100)]).unwrap();
        assert_approx_eq!(light.utilisation(), 0.3);

        let heavy = TaskSet::new(vec![task(1, 90, 100), task(2, 50, 100)]).unwrap();
        assert_approx_eq!(heavy.utilisation(), 1.0);

        assert_approx_eq!(TaskSet::new_empty().utilisation(), 0.0);
    }
}
