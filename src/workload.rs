//! Synthetic workload generation.
//!
//! Produces task duration lists for experiments and tests. Generic over
//! [`rand::Rng`] so runs can be reproduced with a seeded generator.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A band of task durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationTier {
    /// Number of tasks drawn from this band.
    pub count: usize,
    /// Shortest duration (inclusive).
    pub min: i64,
    /// Longest duration (inclusive).
    pub max: i64,
}

impl DurationTier {
    /// Creates a tier of `count` tasks with durations in `[min, max]`.
    pub fn new(count: usize, min: i64, max: i64) -> Self {
        Self { count, min, max }
    }
}

/// Draws `count` durations uniformly from `[min, max]`.
///
/// Bounds given in the wrong order are swapped.
pub fn uniform_durations<R: Rng>(rng: &mut R, count: usize, min: i64, max: i64) -> Vec<i64> {
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    (0..count).map(|_| rng.random_range(lo..=hi)).collect()
}

/// Draws each tier in turn, then shuffles the combined list.
///
/// Models mixed workloads such as 20% simple, 50% medium and 30% complex
/// work orders.
///
/// # Example
///
/// ```
/// use lpt_schedule::workload::{tiered_durations, DurationTier};
/// use rand::rngs::SmallRng;
/// use rand::SeedableRng;
///
/// let mut rng = SmallRng::seed_from_u64(123);
/// let tiers = [
///     DurationTier::new(20, 5, 15),
///     DurationTier::new(50, 15, 45),
///     DurationTier::new(30, 45, 80),
/// ];
/// let durations = tiered_durations(&mut rng, &tiers);
/// assert_eq!(durations.len(), 100);
/// ```
pub fn tiered_durations<R: Rng>(rng: &mut R, tiers: &[DurationTier]) -> Vec<i64> {
    let mut durations: Vec<i64> = tiers
        .iter()
        .flat_map(|tier| uniform_durations(&mut *rng, tier.count, tier.min, tier.max))
        .collect();
    durations.shuffle(rng);
    durations
}
