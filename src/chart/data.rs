//! Panel data for the comparison figure
//!
//! Everything here is computed from the store and the analysis before any
//! drawing happens, so the figure's content is testable without a backend.

use crate::aggregate::{Aggregator, Pivot};
use crate::analysis::Analysis;
use crate::config::AnalysisConfig;
use crate::storage::{BenchmarkRecord, RecordStore};

/// One labelled line: `(array_size, value)` points in ascending size order
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend label
    pub label: String,
    /// Points sorted by array size
    pub points: Vec<(u64, f64)>,
}

/// Min / mean / max execution time of one algorithm at a fixed size
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSpread {
    /// Algorithm name
    pub algorithm: String,
    /// Fastest run (ms)
    pub min_ms: f64,
    /// Mean run (ms)
    pub mean_ms: f64,
    /// Slowest run (ms)
    pub max_ms: f64,
    /// Number of runs
    pub runs: usize,
}

/// Content of the six-panel figure
#[derive(Debug, Clone, PartialEq)]
pub struct ChartData {
    /// Distribution the per-size panels are restricted to
    pub distribution: String,
    /// Execution time vs size per algorithm
    pub time_series: Vec<Series>,
    /// Character comparisons vs size per algorithm
    pub comparison_series: Vec<Series>,
    /// Size used for `time_at_size`
    pub heatmap_size: u64,
    /// Execution time by algorithm × distribution at `heatmap_size`
    pub time_at_size: Pivot,
    /// Adaptive/baseline ratio vs size per adaptive algorithm
    pub ratio_series: Vec<Series>,
    /// Size used for `spread`
    pub spread_size: u64,
    /// Time spread per algorithm at `spread_size`
    pub spread: Vec<TimeSpread>,
    /// Mean time by algorithm × distribution, relative to each algorithm's best distribution
    pub relative_by_type: Pivot,
}

impl ChartData {
    /// Assemble panel data from the store and a finished analysis
    #[must_use]
    pub fn build(store: &RecordStore, analysis: &Analysis, config: &AnalysisConfig) -> Self {
        let distribution = config.reference_distribution();
        let aggregator = Aggregator::new(store);

        #[allow(clippy::cast_precision_loss)]
        let comparison_series = series_by_algorithm(store, distribution, |r| {
            r.character_comparisons() as f64
        });

        let ratio_series = config
            .baselines()
            .iter()
            .map(|(algorithm, _)| Series {
                label: algorithm.to_string(),
                points: analysis
                    .ratios
                    .iter()
                    .filter(|sample| sample.algorithm == algorithm)
                    .map(|sample| (sample.array_size, sample.ratio))
                    .collect(),
            })
            .filter(|series| !series.points.is_empty())
            .collect();

        Self {
            distribution: distribution.to_string(),
            time_series: series_by_algorithm(store, distribution, BenchmarkRecord::execution_time_ms),
            comparison_series,
            heatmap_size: config.heatmap_size(),
            time_at_size: aggregator.time_pivot_at_size(config.heatmap_size()),
            ratio_series,
            spread_size: config.spread_size(),
            spread: spread_at(store, distribution, config.spread_size()),
            relative_by_type: aggregator.mean_time_pivot().normalized_by_row_min(),
        }
    }
}

fn series_by_algorithm(
    store: &RecordStore,
    distribution: &str,
    value: impl Fn(&BenchmarkRecord) -> f64,
) -> Vec<Series> {
    store
        .algorithms()
        .into_iter()
        .filter_map(|algorithm| {
            let mut points: Vec<(u64, f64)> = store
                .distribution(distribution)
                .filter(|r| r.algorithm() == algorithm)
                .map(|r| (r.array_size(), value(r)))
                .collect();
            if points.is_empty() {
                return None;
            }
            points.sort_by_key(|(size, _)| *size);
            Some(Series {
                label: algorithm.to_string(),
                points,
            })
        })
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn spread_at(store: &RecordStore, distribution: &str, array_size: u64) -> Vec<TimeSpread> {
    store
        .algorithms()
        .into_iter()
        .filter_map(|algorithm| {
            let times: Vec<f64> = store
                .distribution(distribution)
                .filter(|r| r.algorithm() == algorithm && r.array_size() == array_size)
                .map(BenchmarkRecord::execution_time_ms)
                .collect();
            let min_ms = times.iter().copied().reduce(f64::min)?;
            let max_ms = times.iter().copied().reduce(f64::max)?;
            Some(TimeSpread {
                algorithm: algorithm.to_string(),
                min_ms,
                mean_ms: times.iter().sum::<f64>() / times.len() as f64,
                max_ms,
                runs: times.len(),
            })
        })
        .collect()
}
