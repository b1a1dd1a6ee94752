//! Textual summary report
//!
//! Pure formatting over an [`Analysis`]; no derived logic lives here.

use crate::analysis::Analysis;
use crate::storage::schema::{CHARACTER_COMPARISONS, EXECUTION_TIME_MS};
use std::fmt;

const RULE_WIDTH: usize = 60;
const NO_DATA: &str = "(no data)";

/// Human-readable summary of an analysis run
#[derive(Debug, Clone, Copy)]
pub struct SummaryReport<'a> {
    analysis: &'a Analysis,
    reference_distribution: &'a str,
}

impl<'a> SummaryReport<'a> {
    /// Wrap an analysis for display
    #[must_use]
    pub const fn new(analysis: &'a Analysis, reference_distribution: &'a str) -> Self {
        Self {
            analysis,
            reference_distribution,
        }
    }

    fn write_overview(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let overview = &self.analysis.overview;
        writeln!(f, "Records: {}", overview.records)?;
        writeln!(f, "Algorithms: {}", overview.algorithms.join(", "))?;
        writeln!(f, "Distribution types: {}", overview.array_types.join(", "))?;
        match overview.size_range {
            Some((min, max)) => writeln!(f, "Size range: {min} - {max}"),
            None => writeln!(f, "Size range: {NO_DATA}"),
        }
    }

    fn write_means(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nMEAN PERFORMANCE BY ALGORITHM:")?;
        let stats = &self.analysis.group_stats;
        if stats.is_empty() {
            return writeln!(f, "{NO_DATA}");
        }

        let width = stats
            .iter()
            .map(|s| s.algorithm.len())
            .chain(std::iter::once("Algorithm".len()))
            .max()
            .unwrap_or_default();
        writeln!(
            f,
            "{:<width$}  {:>18}  {:>22}",
            "Algorithm", EXECUTION_TIME_MS, CHARACTER_COMPARISONS
        )?;
        for stat in stats {
            writeln!(
                f,
                "{:<width$}  {:>18.2}  {:>22.2}",
                stat.algorithm, stat.mean_time_ms, stat.mean_comparisons
            )?;
        }
        Ok(())
    }

    fn write_best(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nBEST ALGORITHM BY DISTRIBUTION (mean time):")?;
        if self.analysis.best_per_type.is_empty() {
            return writeln!(f, "{NO_DATA}");
        }
        for best in &self.analysis.best_per_type {
            writeln!(
                f,
                "{}: {} ({:.2} ms)",
                best.array_type, best.algorithm, best.mean_time_ms
            )?;
        }
        Ok(())
    }

    fn write_scaling(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\nSCALABILITY ({}):", self.reference_distribution)?;
        if self.analysis.scaling.is_empty() {
            return writeln!(f, "{NO_DATA}");
        }
        for estimate in &self.analysis.scaling {
            writeln!(
                f,
                "{}: scale factor {:.2}",
                estimate.algorithm, estimate.scale_factor
            )?;
        }
        Ok(())
    }

    fn write_ratios(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "\nADAPTIVE / BASELINE TIME RATIO ({}):",
            self.reference_distribution
        )?;
        if self.analysis.ratios.is_empty() {
            return writeln!(f, "{NO_DATA}");
        }
        for sample in &self.analysis.ratios {
            writeln!(
                f,
                "{} vs {} @ {}: {:.3}",
                sample.algorithm, sample.baseline, sample.array_size, sample.ratio
            )?;
        }
        Ok(())
    }

    fn write_unsorted(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unsorted = &self.analysis.unsorted_runs;
        if unsorted.is_empty() {
            return Ok(());
        }
        writeln!(f, "\nWARNING: {} run(s) produced unsorted output:", unsorted.len())?;
        for run in unsorted {
            writeln!(
                f,
                "  {} @ {} ({})",
                run.algorithm(),
                run.array_size(),
                run.array_type()
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for SummaryReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "STRING SORTING EXPERIMENT SUMMARY")?;
        writeln!(f, "{rule}")?;
        self.write_overview(f)?;
        self.write_means(f)?;
        self.write_best(f)?;
        self.write_scaling(f)?;
        self.write_ratios(f)?;
        self.write_unsorted(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnalysisConfig;
    use crate::storage::{BenchmarkRecord, RecordStore};

    fn render(store: &RecordStore) -> String {
        let analysis = Analysis::run(store, &AnalysisConfig::default());
        SummaryReport::new(&analysis, "Random").to_string()
    }

    #[test]
    fn test_report_sections() {
        let store = RecordStore::new(vec![
            BenchmarkRecord::new("QuickSort", 100, "Random", 5.0, 1000),
            BenchmarkRecord::new("StringQuickSort", 100, "Random", 4.0, 800),
            BenchmarkRecord::new("QuickSort", 1000, "Random", 60.0, 15000),
            BenchmarkRecord::new("StringQuickSort", 1000, "Random", 50.0, 12000).with_is_sorted(false),
        ]);
        let text = render(&store);

        assert!(text.contains("Records: 4"));
        assert!(text.contains("Algorithms: QuickSort, StringQuickSort"));
        assert!(text.contains("Size range: 100 - 1000"));
        assert!(text.contains("32.50"));
        assert!(text.contains("8000.00"));
        assert!(text.contains("Random: StringQuickSort (27.00 ms)"));
        assert!(text.contains("QuickSort: scale factor 1.20"));
        assert!(text.contains("StringQuickSort vs QuickSort @ 100: 0.800"));
        assert!(text.contains("StringQuickSort vs QuickSort @ 1000: 0.833"));
        assert!(text.contains("WARNING: 1 run(s) produced unsorted output"));
    }

    #[test]
    fn test_report_empty_store() {
        let text = render(&RecordStore::default());
        assert!(text.contains("Records: 0"));
        assert!(text.contains("Size range: (no data)"));
        assert_eq!(text.matches(NO_DATA).count(), 5);
        assert!(!text.contains("WARNING"));
    }
}
