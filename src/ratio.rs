//! Adaptive-vs-baseline performance ratios
//!
//! Every adaptive string-sorting algorithm is paired with a generic baseline
//! (`QuickSort` or `MergeSort`) through an explicit [`BaselineTable`]. For each
//! array size under the reference distribution the analyzer emits
//! `adaptive_time / baseline_time`. A ratio below 1.0 means the adaptive
//! variant is faster. A size whose baseline time is zero yields no sample
//! rather than an infinite ratio.

use crate::storage::{BenchmarkRecord, RecordStore};
use std::collections::BTreeSet;
use std::fmt;
use tracing::{debug, warn};

/// Generic baseline an adaptive algorithm is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BaselineFamily {
    /// Compared against `QuickSort`
    QuickSort,
    /// Compared against `MergeSort`
    MergeSort,
}

impl BaselineFamily {
    /// Name of the baseline algorithm as it appears in the results table
    #[must_use]
    pub const fn baseline_algorithm(self) -> &'static str {
        match self {
            Self::QuickSort => "QuickSort",
            Self::MergeSort => "MergeSort",
        }
    }

    /// Family implied by the experiment's naming convention
    ///
    /// Names containing `Quick` belong to the quicksort family, everything else
    /// to the mergesort family. Use this only to seed a [`BaselineTable`];
    /// the analyzer dispatches through the table.
    #[must_use]
    pub fn classify(algorithm: &str) -> Self {
        if algorithm.contains("Quick") {
            Self::QuickSort
        } else {
            Self::MergeSort
        }
    }
}

impl fmt::Display for BaselineFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.baseline_algorithm())
    }
}

/// Ordered mapping from adaptive algorithm to its baseline family
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaselineTable {
    entries: Vec<(String, BaselineFamily)>,
}

impl Default for BaselineTable {
    /// The adaptive algorithms measured by the string-sorting experiment
    fn default() -> Self {
        Self::empty()
            .with_adaptive("StringQuickSort", BaselineFamily::QuickSort)
            .with_adaptive("StringMergeSort", BaselineFamily::MergeSort)
            .with_adaptive("MSDRadixSort", BaselineFamily::MergeSort)
            .with_adaptive("MSDRadixSortWithQuickSort", BaselineFamily::QuickSort)
    }
}

impl BaselineTable {
    /// Table with no adaptive algorithms
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add or replace an adaptive algorithm
    ///
    /// A replaced entry keeps its original position.
    #[must_use]
    pub fn with_adaptive(mut self, algorithm: impl Into<String>, family: BaselineFamily) -> Self {
        let algorithm = algorithm.into();
        match self.entries.iter_mut().find(|(name, _)| *name == algorithm) {
            Some(entry) => entry.1 = family,
            None => self.entries.push((algorithm, family)),
        }
        self
    }

    /// Baseline family for an adaptive algorithm, `None` if it is not adaptive
    #[must_use]
    pub fn family_of(&self, algorithm: &str) -> Option<BaselineFamily> {
        self.entries
            .iter()
            .find(|(name, _)| name == algorithm)
            .map(|(_, family)| *family)
    }

    /// Adaptive algorithms in table order
    pub fn iter(&self) -> impl Iterator<Item = (&str, BaselineFamily)> {
        self.entries.iter().map(|(name, family)| (name.as_str(), *family))
    }

    /// Number of adaptive algorithms
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no adaptive algorithms are configured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One adaptive/baseline time ratio at a given array size
#[derive(Debug, Clone, PartialEq)]
pub struct RatioSample {
    /// Adaptive algorithm name
    pub algorithm: String,
    /// Array size both runs were measured at
    pub array_size: u64,
    /// Baseline the algorithm was compared against
    pub baseline: BaselineFamily,
    /// `adaptive_time / baseline_time`
    pub ratio: f64,
}

/// Computes [`RatioSample`]s under one distribution
#[derive(Debug, Clone)]
pub struct RatioAnalyzer<'a> {
    table: &'a BaselineTable,
    distribution: &'a str,
}

impl<'a> RatioAnalyzer<'a> {
    /// Create an analyzer for the given table and reference distribution
    #[must_use]
    pub const fn new(table: &'a BaselineTable, distribution: &'a str) -> Self {
        Self {
            table,
            distribution,
        }
    }

    /// Ratio samples in ascending size order, then table order
    ///
    /// - A size missing one baseline only skips the algorithms of that family.
    /// - An adaptive algorithm with no run at a size yields no sample there.
    /// - The first matching record wins when a cell has repeated runs.
    /// - A zero baseline time has no defined ratio and is skipped.
    #[must_use]
    pub fn analyze(&self, store: &RecordStore) -> Vec<RatioSample> {
        let records: Vec<&BenchmarkRecord> = store.distribution(self.distribution).collect();
        let sizes: BTreeSet<u64> = records.iter().map(|r| r.array_size()).collect();

        let mut samples = Vec::new();
        for size in sizes {
            let at_size = |algorithm: &str| {
                records
                    .iter()
                    .find(|r| r.array_size() == size && r.algorithm() == algorithm)
                    .map(|r| r.execution_time_ms())
            };

            let quick = at_size(BaselineFamily::QuickSort.baseline_algorithm());
            let merge = at_size(BaselineFamily::MergeSort.baseline_algorithm());

            for (algorithm, family) in self.table.iter() {
                let Some(adaptive_time) = at_size(algorithm) else {
                    continue;
                };
                let baseline_time = match family {
                    BaselineFamily::QuickSort => quick,
                    BaselineFamily::MergeSort => merge,
                };
                let Some(baseline_time) = baseline_time else {
                    debug!(algorithm, size, baseline = %family, "baseline missing, ratio skipped");
                    continue;
                };
                if baseline_time == 0.0 {
                    warn!(algorithm, size, baseline = %family, "baseline time is zero, ratio undefined");
                    continue;
                }

                samples.push(RatioSample {
                    algorithm: algorithm.to_string(),
                    array_size: size,
                    baseline: family,
                    ratio: adaptive_time / baseline_time,
                });
            }
        }

        samples
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(algorithm: &str, size: u64, array_type: &str, time: f64) -> BenchmarkRecord {
        BenchmarkRecord::new(algorithm, size, array_type, time, 0)
    }

    #[test]
    fn test_default_table_matches_naming_convention() {
        let table = BaselineTable::default();
        assert_eq!(table.len(), 4);
        for (name, family) in table.iter() {
            assert_eq!(BaselineFamily::classify(name), family, "{name}");
        }
        assert_eq!(table.family_of("QuickSort"), None);
    }

    #[test]
    fn test_with_adaptive_replaces_in_place() {
        let table = BaselineTable::default().with_adaptive("StringMergeSort", BaselineFamily::QuickSort);
        assert_eq!(table.len(), 4);
        assert_eq!(table.family_of("StringMergeSort"), Some(BaselineFamily::QuickSort));
        assert_eq!(table.iter().nth(1).map(|(n, _)| n), Some("StringMergeSort"));
    }

    #[test]
    fn test_ratio_samples_scenario() {
        let store = RecordStore::new(vec![
            rec("QuickSort", 100, "Random", 5.0),
            rec("StringQuickSort", 100, "Random", 4.0),
            rec("QuickSort", 1000, "Random", 60.0),
            rec("StringQuickSort", 1000, "Random", 50.0),
        ]);
        let table = BaselineTable::default();
        let samples = RatioAnalyzer::new(&table, "Random").analyze(&store);

        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].array_size, 100);
        assert!((samples[0].ratio - 0.8).abs() < 1e-12);
        assert!((samples[1].ratio - 50.0 / 60.0).abs() < 1e-12);
        assert_eq!(samples[1].baseline, BaselineFamily::QuickSort);
    }

    #[test]
    fn test_missing_baseline_only_blocks_its_family() {
        let store = RecordStore::new(vec![
            rec("MergeSort", 100, "Random", 10.0),
            rec("StringQuickSort", 100, "Random", 4.0),
            rec("StringMergeSort", 100, "Random", 5.0),
        ]);
        let table = BaselineTable::default();
        let samples = RatioAnalyzer::new(&table, "Random").analyze(&store);

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].algorithm, "StringMergeSort");
        assert!((samples[0].ratio - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_other_distributions_ignored() {
        let store = RecordStore::new(vec![
            rec("QuickSort", 100, "Sorted", 5.0),
            rec("StringQuickSort", 100, "Sorted", 4.0),
        ]);
        let table = BaselineTable::default();
        assert!(RatioAnalyzer::new(&table, "Random").analyze(&store).is_empty());
    }

    #[test]
    fn test_equal_time_is_exactly_one() {
        let store = RecordStore::new(vec![
            rec("MergeSort", 500, "Random", 7.125),
            rec("MSDRadixSort", 500, "Random", 7.125),
        ]);
        let table = BaselineTable::default();
        let samples = RatioAnalyzer::new(&table, "Random").analyze(&store);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].ratio, 1.0);
    }

    #[test]
    fn test_zero_baseline_skipped() {
        let store = RecordStore::new(vec![
            rec("QuickSort", 10, "Random", 0.0),
            rec("StringQuickSort", 10, "Random", 0.001),
        ]);
        let table = BaselineTable::default();
        assert!(RatioAnalyzer::new(&table, "Random").analyze(&store).is_empty());
    }

    #[test]
    fn test_unlisted_algorithm_has_no_samples() {
        let store = RecordStore::new(vec![
            rec("QuickSort", 10, "Random", 1.0),
            rec("BurstSort", 10, "Random", 0.5),
        ]);
        let table = BaselineTable::default();
        assert!(RatioAnalyzer::new(&table, "Random").analyze(&store).is_empty());
    }
}
