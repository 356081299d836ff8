//! Makespan schedulers and schedule evaluation.
//!
//! Provides the two-stage pipeline for identical parallel machines
//! (P||C_max) and the metrics used to judge its output.
//!
//! # Algorithm
//!
//! 1. `LptAssignment` builds an initial schedule with Longest Processing
//!    Time first list scheduling.
//! 2. `LocalSearchOptimizer` relieves the bottleneck machine one task at a
//!    time while the makespan strictly improves.
//!
//! Neither stage is optimal; P||C_max is strongly NP-hard.
//!
//! # Statistics
//!
//! `ScheduleStatistics` computes load balance, utilization, efficiency,
//! the standard lower bound and the approximation ratio against it.
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 5

mod local_search;
mod lpt;
mod statistics;
mod task_scheduler;

pub use local_search::{
    LocalSearchConfig, LocalSearchOptimizer, LocalSearchResult, DEFAULT_MAX_ITERATIONS,
};
pub use lpt::LptAssignment;
pub use statistics::ScheduleStatistics;
pub use task_scheduler::{AssignmentResult, TaskScheduler};
