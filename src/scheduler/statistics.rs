//! Schedule quality metrics.
//!
//! Computes load-balance and efficiency indicators from a schedule and
//! its input tasks. Pure: nothing is mutated, so it can be evaluated at
//! any point after assignment.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Total work | Sum of task durations |
//! | Average load | Total work / m |
//! | Load variance | Sample variance of machine loads (0 when m < 2) |
//! | Utilization | load / makespan × 100 per machine |
//! | Efficiency | average load / makespan × 100 |
//! | Lower bound | max(average load, longest task) |
//! | Approximation ratio | makespan / lower bound |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 5.1: The Makespan without Preemptions

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{Schedule, Task};

/// Load-balance and efficiency statistics of a schedule.
///
/// Percentages are on a 0..100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStatistics {
    /// Number of input tasks.
    pub total_tasks: usize,
    /// Number of machines.
    pub num_machines: usize,
    /// Sum of all task durations.
    pub total_work: i64,
    /// Largest machine load.
    pub makespan: i64,
    /// Total work divided evenly over all machines.
    pub average_load: f64,
    /// Sample standard deviation of machine loads.
    pub load_std_dev: f64,
    /// Sample variance of machine loads.
    pub load_variance: f64,
    /// Smallest machine load.
    pub min_load: i64,
    /// Largest machine load.
    pub max_load: i64,
    /// Per-machine utilization (%), indexed by machine ID.
    pub utilizations: Vec<f64>,
    /// Mean of `utilizations` (%).
    pub average_utilization: f64,
    /// Average load relative to makespan (%).
    pub efficiency: f64,
    /// max(average load, longest task).
    pub lower_bound: f64,
    /// makespan / lower bound (1.0 when the bound is 0).
    pub approximation_ratio: f64,
    /// Time taken by the assignment that produced the schedule.
    pub execution_time: Duration,
}

impl ScheduleStatistics {
    /// Computes statistics from a schedule and its input tasks.
    ///
    /// # Arguments
    /// * `tasks` - The input tasks (for total work and the longest task).
    /// * `schedule` - The schedule to evaluate.
    /// * `execution_time` - Timing to report alongside the metrics.
    pub fn calculate(tasks: &[Task], schedule: &Schedule, execution_time: Duration) -> Self {
        let num_machines = schedule.machine_count();
        let loads = schedule.loads();
        let makespan = schedule.makespan();

        let total_work = Task::total_duration(tasks);
        let average_load = if num_machines == 0 {
            0.0
        } else {
            total_work as f64 / num_machines as f64
        };

        let load_variance = sample_variance(&loads);
        let load_std_dev = load_variance.sqrt();

        let utilizations: Vec<f64> = loads
            .iter()
            .map(|&load| percent(load as f64, makespan))
            .collect();
        let average_utilization = if utilizations.is_empty() {
            0.0
        } else {
            utilizations.iter().sum::<f64>() / utilizations.len() as f64
        };

        let efficiency = percent(average_load, makespan);

        let lower_bound = average_load.max(Task::max_duration(tasks) as f64);
        let approximation_ratio = if lower_bound > 0.0 {
            makespan as f64 / lower_bound
        } else {
            1.0
        };

        Self {
            total_tasks: tasks.len(),
            num_machines,
            total_work,
            makespan,
            average_load,
            load_std_dev,
            load_variance,
            min_load: schedule.min_load(),
            max_load: makespan,
            utilizations,
            average_utilization,
            efficiency,
            lower_bound,
            approximation_ratio,
            execution_time,
        }
    }

    /// Spread between the most and least loaded machine.
    pub fn load_range(&self) -> i64 {
        self.max_load - self.min_load
    }

    /// Whether the makespan provably matches the optimum.
    pub fn is_provably_optimal(&self) -> bool {
        (self.makespan as f64 - self.lower_bound).abs() < 1e-9
    }
}

/// `value / makespan × 100`, or 0 for an idle schedule.
fn percent(value: f64, makespan: i64) -> f64 {
    if makespan > 0 {
        value / makespan as f64 * 100.0
    } else {
        0.0
    }
}

/// Sample variance (n − 1 denominator); 0 for fewer than two values.
fn sample_variance(values: &[i64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let mean = values.iter().sum::<i64>() as f64 / n as f64;
    let sum_sq: f64 = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum();
    sum_sq / (n - 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::LptAssignment;

    fn stats_for(durations: &[i64], machine_count: usize) -> ScheduleStatistics {
        let tasks = Task::from_durations(durations);
        let schedule = LptAssignment::assign(&tasks, machine_count);
        ScheduleStatistics::calculate(&tasks, &schedule, Duration::ZERO)
    }

    #[test]
    fn test_worked_trace_stats() {
        // Loads [28, 28, 31], total 87
        let stats = stats_for(&[10, 5, 8, 7, 12, 15, 6, 9, 11, 4], 3);
        assert_eq!(stats.total_tasks, 10);
        assert_eq!(stats.num_machines, 3);
        assert_eq!(stats.total_work, 87);
        assert_eq!(stats.makespan, 31);
        assert_eq!(stats.min_load, 28);
        assert_eq!(stats.max_load, 31);
        assert_eq!(stats.load_range(), 3);
        assert!((stats.average_load - 29.0).abs() < 1e-10);
        // Deviations -1, -1, 2 → (1 + 1 + 4) / 2 = 3
        assert!((stats.load_variance - 3.0).abs() < 1e-10);
        assert!((stats.load_std_dev - 3.0_f64.sqrt()).abs() < 1e-10);
        assert!((stats.lower_bound - 29.0).abs() < 1e-10);
        assert!((stats.approximation_ratio - 31.0 / 29.0).abs() < 1e-10);
        assert!((stats.efficiency - 29.0 / 31.0 * 100.0).abs() < 1e-10);
        assert!((stats.utilizations[2] - 100.0).abs() < 1e-10);
        assert!((stats.utilizations[0] - 28.0 / 31.0 * 100.0).abs() < 1e-10);
        assert!((stats.average_utilization - 87.0 / 93.0 * 100.0).abs() < 1e-10);
        assert!(!stats.is_provably_optimal());
    }

    #[test]
    fn test_empty_schedule_stats() {
        let stats = stats_for(&[], 3);
        assert_eq!(stats.total_tasks, 0);
        assert_eq!(stats.makespan, 0);
        assert_eq!(stats.utilizations, vec![0.0, 0.0, 0.0]);
        assert!((stats.efficiency - 0.0).abs() < 1e-10);
        assert!((stats.average_utilization - 0.0).abs() < 1e-10);
        assert!((stats.lower_bound - 0.0).abs() < 1e-10);
        assert!((stats.approximation_ratio - 1.0).abs() < 1e-10);
        assert!((stats.load_variance - 0.0).abs() < 1e-10);
        assert!(stats.is_provably_optimal());
    }

    #[test]
    fn test_single_machine_no_variance() {
        let stats = stats_for(&[4, 6], 1);
        assert_eq!(stats.makespan, 10);
        assert!((stats.load_variance - 0.0).abs() < 1e-10);
        assert!((stats.load_std_dev - 0.0).abs() < 1e-10);
        assert!((stats.efficiency - 100.0).abs() < 1e-10);
        assert!((stats.approximation_ratio - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_long_task_dominates_lower_bound() {
        // One 20-unit task on 4 machines: average 6.25, bound 20
        let stats = stats_for(&[20, 3, 1, 1], 4);
        assert!((stats.lower_bound - 20.0).abs() < 1e-10);
        assert!((stats.approximation_ratio - 1.0).abs() < 1e-10);
        assert!(stats.is_provably_optimal());
    }

    #[test]
    fn test_execution_time_carried() {
        let tasks = Task::from_durations(&[1]);
        let schedule = LptAssignment::assign(&tasks, 1);
        let stats = ScheduleStatistics::calculate(&tasks, &schedule, Duration::from_millis(7));
        assert_eq!(stats.execution_time, Duration::from_millis(7));
    }

    #[test]
    fn test_serializes_named_fields() {
        let stats = stats_for(&[5, 5, 5, 5], 2);
        let json = serde_json::to_value(&stats).unwrap();
        assert_eq!(json["makespan"], 10);
        assert_eq!(json["num_machines"], 2);
        assert_eq!(json["total_work"], 20);
        assert!(json.get("approximation_ratio").is_some());
        assert!(json.get("utilizations").unwrap().is_array());
    }
}
