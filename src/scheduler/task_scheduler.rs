//! Owner object for the assignment → local search → statistics pipeline.
//!
//! # State
//!
//! A `TaskScheduler` owns its task list, its current schedule and the
//! timing of the last assignment. `run_greedy_assignment` discards the
//! current schedule and rebuilds it from scratch; `run_local_search`
//! refines whatever schedule is current. Results hand out owned
//! snapshots, so a caller never holds a view that a later run mutates.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use super::{LocalSearchOptimizer, LocalSearchResult, LptAssignment, ScheduleStatistics};
use crate::clock::{Clock, MonotonicClock};
use crate::models::{Schedule, Task};
use crate::validation::{validate_input, ValidationErrors};

/// Outcome of a greedy assignment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentResult {
    /// Snapshot of the schedule produced.
    pub schedule: Schedule,
    /// Makespan of that schedule.
    pub makespan: i64,
    /// Wall-clock time of the assignment.
    pub elapsed: Duration,
}

/// Identical parallel machine scheduler.
///
/// # Example
///
/// ```
/// use lpt_schedule::scheduler::TaskScheduler;
///
/// let mut scheduler = TaskScheduler::new(&[10, 5, 8, 7, 12, 15, 6, 9, 11, 4], 3).unwrap();
///
/// let assignment = scheduler.run_greedy_assignment();
/// assert_eq!(assignment.makespan, 31);
///
/// let search = scheduler.run_local_search_default();
/// assert!(search.final_makespan <= assignment.makespan);
///
/// let stats = scheduler.statistics();
/// assert_eq!(stats.total_work, 87);
/// ```
#[derive(Debug, Clone)]
pub struct TaskScheduler {
    tasks: Vec<Task>,
    schedule: Schedule,
    assignment_time: Duration,
    clock: Arc<dyn Clock>,
}

impl TaskScheduler {
    /// Creates a scheduler for the given durations and machine count.
    ///
    /// # Errors
    /// Returns every validation issue if the machine count is zero, any
    /// duration is negative, or the total work overflows `i64`. No
    /// scheduler is created in that case.
    pub fn new(durations: &[i64], machine_count: usize) -> Result<Self, ValidationErrors> {
        validate_input(durations, machine_count)?;
        Ok(Self {
            tasks: Task::from_durations(durations),
            schedule: Schedule::new(machine_count),
            assignment_time: Duration::ZERO,
            clock: Arc::new(MonotonicClock::new()),
        })
    }

    /// Replaces the clock used for timing.
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Uses a clock shared with other components.
    pub fn with_shared_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Rebuilds the schedule with greedy LPT assignment.
    ///
    /// Any previous schedule, including local search moves, is discarded.
    pub fn run_greedy_assignment(&mut self) -> AssignmentResult {
        let start = self.clock.monotonic();
        self.schedule = LptAssignment::assign(&self.tasks, self.machine_count());
        self.assignment_time = self.clock.elapsed_since(start);

        debug!(
            "Greedy assignment: makespan {} in {:?}",
            self.schedule.makespan(),
            self.assignment_time
        );
        AssignmentResult {
            schedule: self.schedule.clone(),
            makespan: self.schedule.makespan(),
            elapsed: self.assignment_time,
        }
    }

    /// Refines the current schedule with at most `max_iterations` moves.
    pub fn run_local_search(&mut self, max_iterations: usize) -> LocalSearchResult {
        let optimizer = LocalSearchOptimizer::new().with_max_iterations(max_iterations);
        self.run_local_search_with(&optimizer)
    }

    /// Refines the current schedule with the default iteration cap.
    pub fn run_local_search_default(&mut self) -> LocalSearchResult {
        self.run_local_search_with(&LocalSearchOptimizer::new())
    }

    /// Refines the current schedule with a configured optimizer.
    pub fn run_local_search_with(&mut self, optimizer: &LocalSearchOptimizer) -> LocalSearchResult {
        let initial_makespan = self.schedule.makespan();
        let start = self.clock.monotonic();
        let (final_makespan, iterations) = optimizer.optimize(&mut self.schedule);
        let elapsed = self.clock.elapsed_since(start);

        LocalSearchResult {
            initial_makespan,
            final_makespan,
            iterations,
            elapsed,
        }
    }

    /// Computes statistics for the current schedule.
    pub fn statistics(&self) -> ScheduleStatistics {
        ScheduleStatistics::calculate(&self.tasks, &self.schedule, self.assignment_time)
    }

    /// Input tasks, indexed by ID.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Number of machines.
    pub fn machine_count(&self) -> usize {
        self.schedule.machine_count()
    }

    /// Current schedule.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Current per-machine loads.
    pub fn loads(&self) -> Vec<i64> {
        self.schedule.loads()
    }

    /// Current makespan.
    pub fn makespan(&self) -> i64 {
        self.schedule.makespan()
    }

    /// Time taken by the last greedy assignment.
    pub fn assignment_time(&self) -> Duration {
        self.assignment_time
    }
}
