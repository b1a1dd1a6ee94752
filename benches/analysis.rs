//! Analysis pass benchmarks
//!
//! Result tables are small (hundreds to low thousands of rows); these measure
//! the group-by and ratio passes at and well beyond that scale.
//!
//! Run with: cargo bench --bench analysis

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use sortbench_analyzer::{
    estimate_scaling, Aggregator, Analysis, AnalysisConfig, BaselineTable, BenchmarkRecord,
    RatioAnalyzer, RecordStore,
};

const ALGORITHMS: [&str; 6] = [
    "QuickSort",
    "MergeSort",
    "StringQuickSort",
    "StringMergeSort",
    "MSDRadixSort",
    "MSDRadixSortWithQuickSort",
];
const DISTRIBUTIONS: [&str; 4] = ["Random", "ReverseSorted", "NearlySorted", "PrefixBased"];

/// Experiment-shaped store: every algorithm × distribution × size, `repeats` times
#[allow(clippy::cast_precision_loss)]
fn generate_store(sizes: usize, repeats: usize) -> RecordStore {
    let mut rng = StdRng::seed_from_u64(42);
    let mut records = Vec::with_capacity(sizes * repeats * ALGORITHMS.len() * DISTRIBUTIONS.len());
    for step in 1..=sizes {
        let size = (step * 100) as u64;
        for _ in 0..repeats {
            for distribution in DISTRIBUTIONS {
                for algorithm in ALGORITHMS {
                    let n = size as f64;
                    let time = n * n.log2() * rng.gen_range(0.0005..0.0015);
                    let comparisons = (n * n.log2() * rng.gen_range(5.0..20.0)) as u64;
                    records.push(BenchmarkRecord::new(algorithm, size, distribution, time, comparisons));
                }
            }
        }
    }
    RecordStore::new(records)
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");

    for (sizes, repeats) in [(30, 1), (30, 10), (100, 25)] {
        let store = generate_store(sizes, repeats);
        group.bench_with_input(
            BenchmarkId::new("mean_by_algorithm", store.len()),
            &store,
            |b, store| b.iter(|| Aggregator::new(black_box(store)).mean_by_algorithm()),
        );
        group.bench_with_input(
            BenchmarkId::new("best_per_type", store.len()),
            &store,
            |b, store| b.iter(|| Aggregator::new(black_box(store)).best_per_type()),
        );
    }

    group.finish();
}

fn bench_ratio_and_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("ratio_scaling");
    let table = BaselineTable::default();

    for (sizes, repeats) in [(30, 1), (100, 25)] {
        let store = generate_store(sizes, repeats);
        group.bench_with_input(BenchmarkId::new("ratios", store.len()), &store, |b, store| {
            b.iter(|| RatioAnalyzer::new(&table, "Random").analyze(black_box(store)));
        });
        group.bench_with_input(BenchmarkId::new("scaling", store.len()), &store, |b, store| {
            b.iter(|| estimate_scaling(black_box(store), "Random"));
        });
    }

    group.finish();
}

fn bench_full_analysis(c: &mut Criterion) {
    let store = generate_store(30, 1);
    let config = AnalysisConfig::default();
    c.bench_function("analysis_run_720_rows", |b| {
        b.iter(|| Analysis::run(black_box(&store), &config));
    });
}

criterion_group!(benches, bench_aggregation, bench_ratio_and_scaling, bench_full_analysis);
criterion_main!(benches);
