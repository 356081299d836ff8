//! Scheduling domain models.
//!
//! Provides the data types for the identical parallel machine problem
//! (P||C_max): a fixed set of tasks with static durations, a fixed number
//! of interchangeable machines, and the schedule mapping one onto the other.
//!
//! # Domain Mappings
//!
//! | lpt-schedule | Manufacturing | Computing | Logistics |
//! |--------------|--------------|-----------|-----------|
//! | Task | Work Order | Job | Shipment |
//! | Machine | Assembly Station | Worker / Core | Truck |
//! | Schedule | Station Plan | Job Placement | Load Plan |

mod machine;
mod schedule;
mod task;

pub use machine::Machine;
pub use schedule::Schedule;
pub use task::Task;
