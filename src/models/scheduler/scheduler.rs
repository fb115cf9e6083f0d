use std::thread;
use std::time::Duration;

use log::{debug, info};

use super::frequency;
use super::EarliestDeadlineFirst;
use crate::constants::DEFAULT_FREQUENCY;
use crate::models::Clock;
use crate::{
    ClockMode, EnergyTrace, ExecutionRecord, Frequency, PowerModel, SchedulingError, Task, TaskSet,
};

/// Where the scheduler stands in its run.
///
/// `Adjusting`, `Executing` and `Completed` only exist inside
/// `Scheduler::step`; between calls the state is `Idle`, `SelectingNext`
/// or `Drained`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    SelectingNext,
    Adjusting,
    Executing,
    Completed,
    Drained,
}

/// Per-run settings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchedulerOptions {
    pub clock: ClockMode,
    /// Sleep after each task. Only affects the wall clock axis.
    pub pacing: Duration,
    pub power_model: PowerModel,
}

/// Outcome of a finished run, handed to the presentation side.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub total_energy: f64,
    pub trace: EnergyTrace,
    pub records: Vec<ExecutionRecord>,
}

/// Non-preemptive EDF scheduler with a per-task DVFS policy.
///
/// Owns the task set and every accumulator of a single run. Build a fresh
/// instance for each simulation.
#[derive(Debug)]
pub struct Scheduler {
    tasks: TaskSet,
    current_frequency: Frequency, // MHz
    total_energy: f64,            // J
    trace: EnergyTrace,
    records: Vec<ExecutionRecord>,
    state: SchedulerState,
    ready_queue: EarliestDeadlineFirst,
    clock: Clock,
    options: SchedulerOptions,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_options(SchedulerOptions::default())
    }

    pub fn with_options(options: SchedulerOptions) -> Self {
        Self {
            tasks: TaskSet::new_empty(),
            current_frequency: DEFAULT_FREQUENCY,
            total_energy: 0.0,
            trace: EnergyTrace::new(),
            records: Vec::new(),
            state: SchedulerState::Idle,
            ready_queue: EarliestDeadlineFirst::default(),
            clock: Clock::start(options.clock),
            options,
        }
    }

    /// Appends a task. Only allowed before the run starts.
    pub fn add_task(&mut self, task: Task) -> Result<(), SchedulingError> {
        if self.state != SchedulerState::Idle {
            return Err(SchedulingError::RunInProgress { id: task.id() });
        }
        self.tasks.add_task(task)
    }

    pub fn tasks(&self) -> &TaskSet {
        &self.tasks
    }

    pub fn current_frequency(&self) -> Frequency {
        self.current_frequency
    }

    pub fn total_energy(&self) -> f64 {
        self.total_energy
    }

    pub fn trace(&self) -> &EnergyTrace {
        &self.trace
    }

    pub fn records(&self) -> &[ExecutionRecord] {
        &self.records
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Switches to `new_freq` MHz. Requests outside the supported range are
    /// ignored and the previous frequency is kept.
    pub fn adjust_frequency(&mut self, new_freq: Frequency) -> bool {
        if !frequency::is_supported(new_freq) {
            debug!("Ignoring unsupported frequency {} MHz", new_freq);
            return false;
        }
        self.current_frequency = new_freq;
        info!("Adjusted CPU frequency to {} MHz", self.current_frequency);
        true
    }

    /// Sum of burst/deadline over tasks not yet completed, clamped to 1.
    pub fn calculate_system_utilization(&self) -> f64 {
        self.tasks.utilisation()
    }

    pub fn calculate_optimal_frequency(&self, task: &Task, utilization: f64) -> Frequency {
        frequency::calculate_optimal_frequency(task, utilization)
    }

    /// Executes the next task in deadline order.
    ///
    /// Returns `None` once the ready queue is drained. The first call
    /// starts the run and freezes the task set.
    pub fn step(&mut self) -> Option<ExecutionRecord> {
        match self.state {
            SchedulerState::Drained => return None,
            SchedulerState::Idle => self.start(),
            _ => {}
        }

        let Some(job) = self.ready_queue.schedule() else {
            self.drain();
            return None;
        };
        let task = job.task();

        self.state = SchedulerState::Adjusting;
        // Informational: the policy only looks at the task's own ratio.
        let utilization = self.calculate_system_utilization();
        let time_ratio = task.time_ratio();
        debug!("System utilization {:.3}, task ratio {:.3}", utilization, time_ratio);
        let target = self.calculate_optimal_frequency(task, utilization);
        self.adjust_frequency(target);

        self.state = SchedulerState::Executing;
        info!(
            "Executing Task {} (Priority: {}, Burst: {}ms, Deadline: {}ms) at {} MHz",
            task.id(),
            task.priority(),
            task.burst_time(),
            task.deadline(),
            self.current_frequency
        );
        let power = self
            .options
            .power_model
            .calculate_power(self.current_frequency, task.utilization_share());
        let execution_time = task.burst_time() as f64 / 1000.0;
        let energy = power * execution_time;
        self.total_energy += energy;

        let time = self.clock.advance(task.burst_time());
        self.trace.push(time, self.total_energy);

        if !self.options.pacing.is_zero() {
            thread::sleep(self.options.pacing);
        }

        self.state = SchedulerState::Completed;
        info!("Completed Task {}. Energy used: {:.6} J", task.id(), energy);

        let record = ExecutionRecord {
            task_id: task.id(),
            priority: task.priority(),
            burst_time: task.burst_time(),
            deadline: task.deadline(),
            utilization,
            time_ratio,
            frequency: self.current_frequency,
            power,
            energy,
            cumulative_energy: self.total_energy,
            time,
        };
        self.records.push(record.clone());

        if self.ready_queue.is_empty() {
            self.drain();
        } else {
            self.state = SchedulerState::SelectingNext;
        }

        Some(record)
    }

    /// Runs every task to completion and reports the result.
    ///
    /// Calling it again after the run has drained returns the same report.
    pub fn run_edf_with_dvfs(&mut self) -> SimulationReport {
        while self.step().is_some() {}
        self.report()
    }

    pub fn report(&self) -> SimulationReport {
        SimulationReport {
            total_energy: self.total_energy,
            trace: self.trace.clone(),
            records: self.records.clone(),
        }
    }

    fn start(&mut self) {
        self.ready_queue = EarliestDeadlineFirst::from_taskset(&self.tasks);
        self.clock = Clock::start(self.options.clock);
        self.state = SchedulerState::SelectingNext;
        debug!("Starting run with {} tasks", self.ready_queue.len());
    }

    fn drain(&mut self) {
        self.state = SchedulerState::Drained;
        info!("Total energy consumed: {:.6} J", self.total_energy);
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}
