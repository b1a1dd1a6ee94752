//! Two-point scaling estimate per algorithm
//!
//! `scale_factor = (time_max / time_min) / (size_max / size_min)` using only
//! the smallest and largest measured sizes under the reference distribution.
//! About 1.0 means linear growth; clearly above 1.0 means super-linear.
//! An algorithm whose time at the smallest size is zero gets no estimate.

use crate::storage::{BenchmarkRecord, RecordStore};
use tracing::warn;

/// Scaling estimate for one algorithm
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleEstimate {
    /// Algorithm name
    pub algorithm: String,
    /// Smallest measured size
    pub size_min: u64,
    /// Time at the smallest size (ms)
    pub time_min: f64,
    /// Largest measured size
    pub size_max: u64,
    /// Time at the largest size (ms)
    pub time_max: f64,
    /// Time growth relative to linear growth in size
    pub scale_factor: f64,
}

/// Estimate scaling for every algorithm under one distribution
///
/// Algorithms appear in first-seen order. An algorithm with fewer than two
/// distinct sizes, or with a zero time at its smallest size, gets no estimate.
#[must_use]
pub fn estimate_scaling(store: &RecordStore, distribution: &str) -> Vec<ScaleEstimate> {
    store
        .algorithms()
        .into_iter()
        .filter_map(|algorithm| {
            let runs = store
                .distribution(distribution)
                .filter(|r| r.algorithm() == algorithm);
            estimate(algorithm, runs)
        })
        .collect()
}

/// Two-point estimate over one algorithm's runs
///
/// Ties at either extreme go to the first matching record.
#[allow(clippy::cast_precision_loss)]
fn estimate<'a>(
    algorithm: &str,
    runs: impl Iterator<Item = &'a BenchmarkRecord>,
) -> Option<ScaleEstimate> {
    let mut smallest: Option<&BenchmarkRecord> = None;
    let mut largest: Option<&BenchmarkRecord> = None;

    for run in runs {
        if smallest.map_or(true, |s| run.array_size() < s.array_size()) {
            smallest = Some(run);
        }
        if largest.map_or(true, |l| run.array_size() > l.array_size()) {
            largest = Some(run);
        }
    }

    let (min, max) = (smallest?, largest?);
    if min.array_size() == max.array_size() {
        return None;
    }
    if min.execution_time_ms() == 0.0 {
        warn!(algorithm, size = min.array_size(), "zero time at smallest size, scaling undefined");
        return None;
    }

    let time_growth = max.execution_time_ms() / min.execution_time_ms();
    let size_growth = max.array_size() as f64 / min.array_size() as f64;

    Some(ScaleEstimate {
        algorithm: algorithm.to_string(),
        size_min: min.array_size(),
        time_min: min.execution_time_ms(),
        size_max: max.array_size(),
        time_max: max.execution_time_ms(),
        scale_factor: time_growth / size_growth,
    })
}
