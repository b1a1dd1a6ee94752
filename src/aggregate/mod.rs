//! Group-wise statistics over the record store
//!
//! All queries are pure and recomputed from the store on each call. Groups are
//! reported in first-seen order, which is also the tie-break order for
//! [`Aggregator::best_algorithm_for`].

mod pivot;

pub use pivot::Pivot;

use crate::storage::{BenchmarkRecord, RecordStore};
use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Per-algorithm means over every size and distribution
#[derive(Debug, Clone, PartialEq)]
pub struct GroupStat {
    /// Algorithm name
    pub algorithm: String,
    /// Mean execution time (ms)
    pub mean_time_ms: f64,
    /// Mean character comparisons
    pub mean_comparisons: f64,
    /// Number of records averaged
    pub runs: usize,
}

/// Per-(algorithm, distribution) mean execution time
#[derive(Debug, Clone, PartialEq)]
pub struct TypeStat {
    /// Algorithm name
    pub algorithm: String,
    /// Distribution label
    pub array_type: String,
    /// Mean execution time (ms)
    pub mean_time_ms: f64,
    /// Number of records averaged
    pub runs: usize,
}

/// Read-only aggregation queries over a [`RecordStore`]
#[derive(Debug, Clone, Copy)]
pub struct Aggregator<'a> {
    store: &'a RecordStore,
}

impl<'a> Aggregator<'a> {
    /// Create an aggregator borrowing the store
    #[must_use]
    pub const fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }

    /// Mean execution time and mean comparisons per algorithm
    #[must_use]
    pub fn mean_by_algorithm(&self) -> Vec<GroupStat> {
        group_by(self.store.records(), BenchmarkRecord::algorithm)
            .into_iter()
            .map(|group| GroupStat {
                algorithm: group.key.to_string(),
                mean_time_ms: group.mean_time(),
                mean_comparisons: group.mean_comparisons(),
                runs: group.runs,
            })
            .collect()
    }

    /// Mean execution time per (algorithm, distribution) pair
    #[must_use]
    pub fn mean_by_algorithm_and_type(&self) -> Vec<TypeStat> {
        group_by(self.store.records(), |r| (r.algorithm(), r.array_type()))
            .into_iter()
            .map(|group| TypeStat {
                algorithm: group.key.0.to_string(),
                array_type: group.key.1.to_string(),
                mean_time_ms: group.mean_time(),
                runs: group.runs,
            })
            .collect()
    }

    /// Algorithm with the lowest mean time under one distribution
    ///
    /// Exact ties go to the algorithm seen first. Returns `None` when the
    /// distribution has no records.
    #[must_use]
    pub fn best_algorithm_for(&self, array_type: &str) -> Option<TypeStat> {
        self.mean_by_algorithm_and_type()
            .into_iter()
            .filter(|stat| stat.array_type == array_type)
            .reduce(|best, candidate| {
                if candidate.mean_time_ms < best.mean_time_ms {
                    candidate
                } else {
                    best
                }
            })
    }

    /// Best algorithm for every distribution, in first-seen distribution order
    #[must_use]
    pub fn best_per_type(&self) -> Vec<TypeStat> {
        self.store
            .array_types()
            .into_iter()
            .filter_map(|array_type| self.best_algorithm_for(array_type))
            .collect()
    }

    /// Mean execution time pivot (algorithm × distribution) over all sizes
    #[must_use]
    pub fn mean_time_pivot(&self) -> Pivot {
        let stats = self.mean_by_algorithm_and_type();
        Pivot::from_entries(
            stats
                .iter()
                .map(|s| (s.algorithm.as_str(), s.array_type.as_str(), s.mean_time_ms)),
        )
    }

    /// Execution time pivot (algorithm × distribution) at one array size
    ///
    /// Repeated runs of the same cell are averaged.
    #[must_use]
    pub fn time_pivot_at_size(&self, array_size: u64) -> Pivot {
        let groups = group_by(
            self.store
                .records()
                .iter()
                .filter(|r| r.array_size() == array_size),
            |r| (r.algorithm(), r.array_type()),
        );
        Pivot::from_entries(
            groups
                .iter()
                .map(|g| (g.key.0, g.key.1, g.mean_time())),
        )
    }
}

struct Group<K> {
    key: K,
    time_sum: f64,
    comparison_sum: f64,
    runs: usize,
}

impl<K> Group<K> {
    #[allow(clippy::cast_precision_loss)]
    fn mean_time(&self) -> f64 {
        self.time_sum / self.runs as f64
    }

    #[allow(clippy::cast_precision_loss)]
    fn mean_comparisons(&self) -> f64 {
        self.comparison_sum / self.runs as f64
    }
}

/// Single pass group-by keeping first-seen key order
#[allow(clippy::cast_precision_loss)]
fn group_by<'a, K, I, F>(records: I, key: F) -> Vec<Group<K>>
where
    K: Eq + Hash + Copy,
    I: IntoIterator<Item = &'a BenchmarkRecord>,
    F: Fn(&'a BenchmarkRecord) -> K,
{
    let mut index: FxHashMap<K, usize> = FxHashMap::default();
    let mut groups: Vec<Group<K>> = Vec::new();

    for record in records {
        let k = key(record);
        let slot = *index.entry(k).or_insert_with(|| {
            groups.push(Group {
                key: k,
                time_sum: 0.0,
                comparison_sum: 0.0,
                runs: 0,
            });
            groups.len() - 1
        });
        let group = &mut groups[slot];
        group.time_sum += record.execution_time_ms();
        group.comparison_sum += record.character_comparisons() as f64;
        group.runs += 1;
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> RecordStore {
        RecordStore::new(vec![
            BenchmarkRecord::new("QuickSort", 100, "Random", 4.0, 100),
            BenchmarkRecord::new("MergeSort", 100, "Random", 3.0, 300),
            BenchmarkRecord::new("QuickSort", 200, "Random", 8.0, 300),
            BenchmarkRecord::new("MergeSort", 200, "Random", 7.0, 500),
            BenchmarkRecord::new("QuickSort", 100, "Sorted", 1.0, 50),
            BenchmarkRecord::new("MergeSort", 100, "Sorted", 2.0, 60),
        ])
    }

    #[test]
    fn test_mean_by_algorithm() {
        let store = store();
        let stats = Aggregator::new(&store).mean_by_algorithm();
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].algorithm, "QuickSort");
        assert!((stats[0].mean_time_ms - 13.0 / 3.0).abs() < 1e-12);
        assert!((stats[0].mean_comparisons - 150.0).abs() < 1e-12);
        assert_eq!(stats[1].runs, 3);
    }

    #[test]
    fn test_mean_by_algorithm_and_type() {
        let store = store();
        let stats = Aggregator::new(&store).mean_by_algorithm_and_type();
        assert_eq!(stats.len(), 4);
        let quick_random = &stats[0];
        assert_eq!(quick_random.array_type, "Random");
        assert!((quick_random.mean_time_ms - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_best_algorithm_for() {
        let store = store();
        let agg = Aggregator::new(&store);
        assert_eq!(agg.best_algorithm_for("Random").unwrap().algorithm, "MergeSort");
        assert_eq!(agg.best_algorithm_for("Sorted").unwrap().algorithm, "QuickSort");
        assert!(agg.best_algorithm_for("PrefixBased").is_none());
        assert_eq!(agg.best_per_type().len(), 2);
    }

    #[test]
    fn test_best_algorithm_tie_breaks_first_seen() {
        let store = RecordStore::new(vec![
            BenchmarkRecord::new("StringMergeSort", 100, "Random", 5.0, 1),
            BenchmarkRecord::new("MSDRadixSort", 100, "Random", 5.0, 1),
        ]);
        let best = Aggregator::new(&store).best_algorithm_for("Random").unwrap();
        assert_eq!(best.algorithm, "StringMergeSort");
    }

    #[test]
    fn test_time_pivot_at_size() {
        let store = store();
        let pivot = Aggregator::new(&store).time_pivot_at_size(100);
        assert_eq!(pivot.get("MergeSort", "Sorted"), Some(2.0));
        assert_eq!(pivot.rows().len(), 2);
        assert!(Aggregator::new(&store).time_pivot_at_size(1000).is_empty());
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::default();
        let agg = Aggregator::new(&store);
        assert!(agg.mean_by_algorithm().is_empty());
        assert!(agg.best_per_type().is_empty());
        assert!(agg.mean_time_pivot().is_empty());
    }
}
