//! # sortbench-analyzer: String-Sorting Benchmark Analysis
//!
//! Turns the per-run results of a string-sorting experiment (algorithm, array
//! size, input distribution, elapsed time, character comparisons) into a
//! textual summary and a six-panel comparison figure.
//!
//! ## Pipeline
//!
//! ```text
//! RecordStore ──> Aggregator ──┬──> RatioAnalyzer ──────┐
//!  (CSV/Parquet)               └──> Scalability estimate ┴──> SummaryReport / ChartRenderer
//! ```
//!
//! The store is loaded once and is read-only afterwards; every analysis pass
//! borrows it.
//!
//! ## Example Usage
//!
//! ```rust
//! use sortbench_analyzer::{Analysis, AnalysisConfig, RecordStore, SummaryReport};
//!
//! let csv = "\
//! Algorithm,ArraySize,ArrayType,ExecutionTime_ms,CharacterComparisons
//! QuickSort,100,Random,5.0,1000
//! StringQuickSort,100,Random,4.0,800
//! QuickSort,1000,Random,60.0,15000
//! StringQuickSort,1000,Random,50.0,12000
//! ";
//! let store = RecordStore::from_csv_reader(csv.as_bytes())?;
//! let config = AnalysisConfig::default();
//! let analysis = Analysis::run(&store, &config);
//!
//! assert!((analysis.ratios[0].ratio - 0.8).abs() < 1e-12);
//! println!("{}", SummaryReport::new(&analysis, config.reference_distribution()));
//! # Ok::<(), sortbench_analyzer::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod aggregate;
pub mod analysis;
pub mod chart;
pub mod config;
pub mod error;
pub mod ratio;
pub mod report;
pub mod scaling;
pub mod storage;

pub use aggregate::{Aggregator, GroupStat, Pivot, TypeStat};
pub use analysis::{Analysis, Overview};
pub use chart::{ChartContext, ChartData, ChartRenderer, PlottersRenderer};
pub use config::AnalysisConfig;
pub use error::{Error, Result};
pub use ratio::{BaselineFamily, BaselineTable, RatioAnalyzer, RatioSample};
pub use report::SummaryReport;
pub use scaling::{estimate_scaling, ScaleEstimate};
pub use storage::{BenchmarkRecord, RecordStore};
