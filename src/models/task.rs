//! Task model.
//!
//! A task is an indivisible unit of work with a fixed processing duration.
//! Tasks are identified by their position in the input list.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 1

use serde::{Deserialize, Serialize};

/// A task to be placed on exactly one machine.
///
/// # Time Representation
/// Durations are unitless integers. The consumer defines the unit
/// (minutes, milliseconds, machine cycles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    /// Original input position, in `[0, n)`.
    pub id: usize,
    /// Processing duration (non-negative once validated).
    pub duration: i64,
}

impl Task {
    /// Creates a new task.
    pub fn new(id: usize, duration: i64) -> Self {
        Self { id, duration }
    }

    /// Builds tasks from a duration list, using each position as the ID.
    pub fn from_durations(durations: &[i64]) -> Vec<Self> {
        durations
            .iter()
            .enumerate()
            .map(|(id, &duration)| Self::new(id, duration))
            .collect()
    }

    /// Total duration of a task slice.
    pub fn total_duration(tasks: &[Task]) -> i64 {
        tasks.iter().map(|t| t.duration).sum()
    }

    /// Longest single duration (0 for an empty slice).
    pub fn max_duration(tasks: &[Task]) -> i64 {
        tasks.iter().map(|t| t.duration).max().unwrap_or(0)
    }
}
