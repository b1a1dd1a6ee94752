//! Analysis pipeline: store → aggregates → ratios / scaling
//!
//! The ratio and scaling passes are independent and read-only over the store.
//! With the `rayon` feature they run on the rayon pool; results are identical
//! either way.

use crate::aggregate::{Aggregator, GroupStat, TypeStat};
use crate::config::AnalysisConfig;
use crate::ratio::{RatioAnalyzer, RatioSample};
use crate::scaling::{estimate_scaling, ScaleEstimate};
use crate::storage::{BenchmarkRecord, RecordStore};
use tracing::{debug, info_span};

/// Dataset shape shown at the top of the report
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Overview {
    /// Total record count
    pub records: usize,
    /// Distinct algorithms, first-seen order
    pub algorithms: Vec<String>,
    /// Distinct distribution labels, first-seen order
    pub array_types: Vec<String>,
    /// Smallest and largest array size
    pub size_range: Option<(u64, u64)>,
}

impl Overview {
    /// Summarize the store
    #[must_use]
    pub fn of(store: &RecordStore) -> Self {
        Self {
            records: store.len(),
            algorithms: owned(store.algorithms()),
            array_types: owned(store.array_types()),
            size_range: store.size_range(),
        }
    }
}

/// Every derived value the report needs
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    /// Dataset shape
    pub overview: Overview,
    /// Per-algorithm means
    pub group_stats: Vec<GroupStat>,
    /// Fastest algorithm per distribution
    pub best_per_type: Vec<TypeStat>,
    /// Two-point scaling estimates under the reference distribution
    pub scaling: Vec<ScaleEstimate>,
    /// Adaptive/baseline ratios under the reference distribution
    pub ratios: Vec<RatioSample>,
    /// Runs flagged unsorted by the experiment
    pub unsorted_runs: Vec<BenchmarkRecord>,
}

impl Analysis {
    /// Run every analysis pass over the store
    #[must_use]
    pub fn run(store: &RecordStore, config: &AnalysisConfig) -> Self {
        let _span = info_span!("analysis", records = store.len()).entered();

        let aggregator = Aggregator::new(store);
        let group_stats = aggregator.mean_by_algorithm();
        let best_per_type = aggregator.best_per_type();

        let distribution = config.reference_distribution();
        let ratio_pass = || RatioAnalyzer::new(config.baselines(), distribution).analyze(store);
        let scaling_pass = || estimate_scaling(store, distribution);

        #[cfg(feature = "rayon")]
        let (ratios, scaling) = rayon::join(ratio_pass, scaling_pass);
        #[cfg(not(feature = "rayon"))]
        let (ratios, scaling) = (ratio_pass(), scaling_pass());

        debug!(
            groups = group_stats.len(),
            ratios = ratios.len(),
            estimates = scaling.len(),
            "analysis complete"
        );

        Self {
            overview: Overview::of(store),
            group_stats,
            best_per_type,
            scaling,
            ratios,
            unsorted_runs: store.unsorted_runs().into_iter().cloned().collect(),
        }
    }
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}
