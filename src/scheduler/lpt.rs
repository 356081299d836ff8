//! Longest Processing Time first (LPT) list scheduling.
//!
//! # Algorithm
//!
//! 1. Sort tasks by duration descending, ties by ascending task ID.
//! 2. Keep a min-heap of `(load, machine_id)`, all loads 0.
//! 3. Pop the least loaded machine (lowest ID on equal load), append the
//!    next task, push the updated load back.
//!
//! # Complexity
//! O(n log n) for the sort plus O(n log m) heap operations.
//!
//! # Reference
//! Graham (1969), "Bounds on Multiprocessing Timing Anomalies" (4/3 - 1/3m bound)

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;

use crate::models::{Schedule, Task};

/// Greedy LPT assignment.
///
/// Stateless: every call builds a fresh schedule from scratch and never
/// touches the input slice.
///
/// # Example
///
/// ```
/// use lpt_schedule::models::Task;
/// use lpt_schedule::scheduler::LptAssignment;
///
/// let tasks = Task::from_durations(&[5, 5, 5, 5]);
/// let schedule = LptAssignment::assign(&tasks, 2);
/// assert_eq!(schedule.loads(), vec![10, 10]);
/// assert_eq!(schedule.makespan(), 10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LptAssignment;

impl LptAssignment {
    /// Assigns `tasks` to `machine_count` identical machines.
    ///
    /// Tasks are expected to be validated (non-negative durations). With
    /// zero machines the returned schedule is empty and no task is placed.
    pub fn assign(tasks: &[Task], machine_count: usize) -> Schedule {
        let mut schedule = Schedule::new(machine_count);
        if machine_count == 0 {
            return schedule;
        }

        let order = Self::priority_order(tasks);

        let mut heap: BinaryHeap<Reverse<(i64, usize)>> =
            (0..machine_count).map(|id| Reverse((0, id))).collect();

        for &idx in &order {
            let task = tasks[idx];
            let Some(Reverse((load, machine_id))) = heap.pop() else {
                break;
            };
            schedule.assign(machine_id, task);
            heap.push(Reverse((load + task.duration, machine_id)));
        }

        debug!(
            "LPT placed {} tasks on {} machines, makespan {}",
            tasks.len(),
            machine_count,
            schedule.makespan()
        );
        schedule
    }

    /// Task indices in LPT order: duration descending, then ID ascending.
    pub fn priority_order(tasks: &[Task]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..tasks.len()).collect();
        indices.sort_unstable_by(|&a, &b| {
            tasks[b]
                .duration
                .cmp(&tasks[a].duration)
                .then(tasks[a].id.cmp(&tasks[b].id))
        });
        indices
    }
}
