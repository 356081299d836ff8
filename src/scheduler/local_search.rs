//! Bottleneck-relief local search.
//!
//! # Neighborhood
//!
//! One move per iteration: the longest task on the most loaded machine
//! (the bottleneck) is relocated to the least loaded machine (the trough).
//! The move is committed only if it strictly lowers the makespan; the
//! first non-improving move ends the search.
//!
//! No swaps and no alternative candidates are tried, so the result is a
//! local optimum only with respect to this single move.
//!
//! # Termination
//! Each commit strictly lowers an integer makespan bounded below by the
//! longest task, and the iteration cap bounds the loop regardless.

use std::time::Duration;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::models::Schedule;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Local search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalSearchConfig {
    /// Maximum number of committed moves.
    pub max_iterations: usize,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Outcome of one local search run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LocalSearchResult {
    /// Makespan before the first move.
    pub initial_makespan: i64,
    /// Makespan after the last committed move.
    pub final_makespan: i64,
    /// Number of committed (strictly improving) moves.
    pub iterations: usize,
    /// Wall-clock time of the search.
    pub elapsed: Duration,
}

impl LocalSearchResult {
    /// Makespan reduction achieved.
    pub fn improvement(&self) -> i64 {
        self.initial_makespan - self.final_makespan
    }

    /// Makespan reduction as a percentage of the initial makespan.
    pub fn improvement_percent(&self) -> f64 {
        if self.initial_makespan > 0 {
            self.improvement() as f64 / self.initial_makespan as f64 * 100.0
        } else {
            0.0
        }
    }
}

/// A candidate relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {
    from: usize,
    position: usize,
    to: usize,
    makespan: i64,
}

/// Bottleneck-to-trough local search optimizer.
///
/// # Example
///
/// ```
/// use lpt_schedule::models::{Schedule, Task};
/// use lpt_schedule::scheduler::LocalSearchOptimizer;
///
/// let mut schedule = Schedule::new(2);
/// for task in Task::from_durations(&[7, 3, 2]) {
///     schedule.assign(0, task);
/// }
///
/// let (makespan, iterations) = LocalSearchOptimizer::new().optimize(&mut schedule);
/// assert_eq!(makespan, 7);
/// assert_eq!(iterations, 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocalSearchOptimizer {
    config: LocalSearchConfig,
}

impl LocalSearchOptimizer {
    /// Creates an optimizer with the default iteration cap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the iteration cap.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.max_iterations = max_iterations;
        self
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: LocalSearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Current configuration.
    pub fn config(&self) -> &LocalSearchConfig {
        &self.config
    }

    /// Improves `schedule` in place.
    ///
    /// Returns `(final_makespan, iterations_performed)`.
    pub fn optimize(&self, schedule: &mut Schedule) -> (i64, usize) {
        let mut makespan = schedule.makespan();
        let mut iterations = 0;

        trace!("Local search starting at makespan {makespan}");
        while iterations < self.config.max_iterations {
            let Some(mv) = Self::candidate_move(schedule) else {
                trace!("No candidate move, stopping at {makespan}");
                break;
            };
            if mv.makespan >= makespan {
                trace!(
                    "Move M{} -> M{} gives {}, not below {makespan}; stopping",
                    mv.from,
                    mv.to,
                    mv.makespan
                );
                break;
            }
            if schedule.move_task(mv.from, mv.position, mv.to).is_none() {
                break;
            }
            makespan = mv.makespan;
            iterations += 1;
            trace!("Moved task M{} -> M{}, makespan {makespan}", mv.from, mv.to);
        }

        debug!("Local search finished: makespan {makespan} after {iterations} moves");
        (makespan, iterations)
    }

    /// The single move this neighborhood considers, with its resulting makespan.
    ///
    /// `None` when the bottleneck is empty or is also the trough (one
    /// machine, or all loads equal).
    fn candidate_move(schedule: &Schedule) -> Option<Move> {
        let from = schedule.bottleneck()?;
        let to = schedule.least_loaded()?;
        if from == to {
            return None;
        }

        let bottleneck = schedule.machine(from)?;
        let position = bottleneck.longest_task_position()?;
        let duration = bottleneck.tasks()[position].duration;
        let trough_load = schedule.machine(to)?.load();

        let others = schedule
            .machines()
            .iter()
            .filter(|m| m.id != from && m.id != to)
            .map(|m| m.load())
            .max()
            .unwrap_or(0);
        let makespan = others
            .max(bottleneck.load() - duration)
            .max(trough_load + duration);

        Some(Move {
            from,
            position,
            to,
            makespan,
        })
    }
}
