//! Benchmark Record - one measured sorting run

/// Distribution label used as the canonical comparison condition.
pub const RANDOM_DISTRIBUTION: &str = "Random";

/// One measured run of a sorting algorithm.
///
/// Records are immutable once loaded; all fields are required.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkRecord {
    algorithm: String,
    array_size: u64,
    array_type: String,
    execution_time_ms: f64,
    character_comparisons: u64,
    is_sorted: Option<bool>,
}

impl BenchmarkRecord {
    /// Create a new record.
    ///
    /// # Arguments
    ///
    /// * `algorithm` - Sorting algorithm identifier
    /// * `array_size` - Number of elements sorted
    /// * `array_type` - Input distribution label (e.g. "Random")
    /// * `execution_time_ms` - Elapsed time in milliseconds
    /// * `character_comparisons` - Per-character comparisons performed
    #[must_use]
    pub fn new(
        algorithm: impl Into<String>,
        array_size: u64,
        array_type: impl Into<String>,
        execution_time_ms: f64,
        character_comparisons: u64,
    ) -> Self {
        Self {
            algorithm: algorithm.into(),
            array_size,
            array_type: array_type.into(),
            execution_time_ms,
            character_comparisons,
            is_sorted: None,
        }
    }

    /// Attach the experiment's own sortedness check for this run.
    #[must_use]
    pub const fn with_is_sorted(mut self, is_sorted: bool) -> Self {
        self.is_sorted = Some(is_sorted);
        self
    }

    /// Get the algorithm name.
    #[must_use]
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Get the number of elements sorted.
    #[must_use]
    pub const fn array_size(&self) -> u64 {
        self.array_size
    }

    /// Get the input distribution label.
    #[must_use]
    pub fn array_type(&self) -> &str {
        &self.array_type
    }

    /// Get the elapsed time in milliseconds.
    #[must_use]
    pub const fn execution_time_ms(&self) -> f64 {
        self.execution_time_ms
    }

    /// Get the per-character comparison count.
    #[must_use]
    pub const fn character_comparisons(&self) -> u64 {
        self.character_comparisons
    }

    /// Get the sortedness flag, if the source carried one.
    #[must_use]
    pub const fn is_sorted(&self) -> Option<bool> {
        self.is_sorted
    }

    /// Whether this run was measured under the given distribution.
    #[must_use]
    pub fn is_distribution(&self, array_type: &str) -> bool {
        self.array_type == array_type
    }
}
