//! Makespan scheduling on identical parallel machines.
//!
//! Assigns a fixed set of tasks with static durations to `m` identical
//! machines, minimizing the completion time of the last machine (P||C_max).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Task`, `Machine`, `Schedule`
//! - **`scheduler`**: Greedy LPT assignment, bottleneck local search,
//!   schedule statistics, and the `TaskScheduler` pipeline owner
//! - **`validation`**: Input checks (machine count, negative durations)
//! - **`clock`**: Injectable monotonic clocks for stage timing
//! - **`workload`**: Seedable synthetic duration generators
//!
//! # Example
//!
//! ```
//! use lpt_schedule::scheduler::TaskScheduler;
//!
//! let mut scheduler = TaskScheduler::new(&[5, 5, 5, 5], 2).unwrap();
//! let assignment = scheduler.run_greedy_assignment();
//! assert_eq!(assignment.makespan, 10);
//!
//! let search = scheduler.run_local_search(100);
//! assert_eq!(search.iterations, 0);
//! ```
//!
//! # References
//!
//! - Graham (1969), "Bounds on Multiprocessing Timing Anomalies"
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod clock;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;
