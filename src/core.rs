use crate::{Scheduler, SchedulerOptions, SchedulingError, SimulationReport, TaskSet};

/// Runs `taskset` on a fresh scheduler and returns its report.
pub fn simulation(taskset: TaskSet, options: SchedulerOptions) -> Result<SimulationReport, SchedulingError> {
    let mut scheduler = Scheduler::with_options(options);

    for task in taskset {
        scheduler.add_task(task)?;
    }

    Ok(scheduler.run_edf_with_dvfs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Task;
    use assert_approx_eq::assert_approx_eq;

    #[test]
    fn test_simulation_runs_every_task() {
        let taskset = TaskSet::new(vec![
            Task::new(1, 3, 200, 1000).unwrap(),
            Task::new(2, 8, 450, 900).unwrap(),
            Task::new(3, 1, 100, 100).unwrap(),
        ])
        .unwrap();

        let report = simulation(taskset, SchedulerOptions::default()).unwrap();

        assert_eq!(report.trace.len(), 3);
        assert_eq!(report.records.iter().map(|r| r.task_id).collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(report.records.iter().map(|r| r.frequency).collect::<Vec<_>>(), vec![1800, 1200, 800]);
        assert_approx_eq!(report.total_energy, report.records.iter().map(|r| r.energy).sum::<f64>());
    }

    #[test]
    fn test_simulation_empty_taskset() {
        let report = simulation(TaskSet::new_empty(), SchedulerOptions::default()).unwrap();
        assert_eq!(report.total_energy, 0.0);
        assert!(report.trace.is_empty());
    }
}
