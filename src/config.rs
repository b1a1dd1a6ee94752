//! Analysis configuration
//!
//! Defaults reproduce the experiment's canonical comparison condition: the
//! `Random` distribution, the four adaptive algorithms, and the array sizes
//! used for the heatmap and spread panels.

use crate::ratio::BaselineTable;
use crate::storage::RANDOM_DISTRIBUTION;

/// Array size for the absolute-time heatmap panel
pub const DEFAULT_HEATMAP_SIZE: u64 = 1000;

/// Array size for the time-spread panel
pub const DEFAULT_SPREAD_SIZE: u64 = 1500;

/// Settings shared by every analysis pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    reference_distribution: String,
    baselines: BaselineTable,
    heatmap_size: u64,
    spread_size: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl AnalysisConfig {
    /// Create a configuration builder
    #[must_use]
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }

    /// Distribution used for ratios, scaling and the per-size charts
    #[must_use]
    pub fn reference_distribution(&self) -> &str {
        &self.reference_distribution
    }

    /// Adaptive → baseline mapping
    #[must_use]
    pub const fn baselines(&self) -> &BaselineTable {
        &self.baselines
    }

    /// Array size for the absolute-time heatmap
    #[must_use]
    pub const fn heatmap_size(&self) -> u64 {
        self.heatmap_size
    }

    /// Array size for the time-spread panel
    #[must_use]
    pub const fn spread_size(&self) -> u64 {
        self.spread_size
    }
}

/// Builder for [`AnalysisConfig`]
#[derive(Debug, Clone)]
pub struct AnalysisConfigBuilder {
    reference_distribution: String,
    baselines: BaselineTable,
    heatmap_size: u64,
    spread_size: u64,
}

impl Default for AnalysisConfigBuilder {
    fn default() -> Self {
        Self {
            reference_distribution: RANDOM_DISTRIBUTION.to_string(),
            baselines: BaselineTable::default(),
            heatmap_size: DEFAULT_HEATMAP_SIZE,
            spread_size: DEFAULT_SPREAD_SIZE,
        }
    }
}

impl AnalysisConfigBuilder {
    /// Set the reference distribution
    #[must_use]
    pub fn reference_distribution(mut self, distribution: impl Into<String>) -> Self {
        self.reference_distribution = distribution.into();
        self
    }

    /// Replace the baseline table
    #[must_use]
    pub fn baselines(mut self, baselines: BaselineTable) -> Self {
        self.baselines = baselines;
        self
    }

    /// Set the heatmap array size
    #[must_use]
    pub const fn heatmap_size(mut self, size: u64) -> Self {
        self.heatmap_size = size;
        self
    }

    /// Set the spread array size
    #[must_use]
    pub const fn spread_size(mut self, size: u64) -> Self {
        self.spread_size = size;
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> AnalysisConfig {
        AnalysisConfig {
            reference_distribution: self.reference_distribution,
            baselines: self.baselines,
            heatmap_size: self.heatmap_size,
            spread_size: self.spread_size,
        }
    }
}
