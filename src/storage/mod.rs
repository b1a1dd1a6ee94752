//! Record store (Arrow CSV/Parquet ingestion)
//!
//! The store is loaded once and is read-only afterwards. Every analysis pass
//! borrows it; none of them mutate it.
//!
//! Ingestion goes through Arrow `RecordBatch`es for both formats:
//! - CSV with a header row (what the sorting experiment writes)
//! - Parquet (detected by the `.parquet` extension)
//!
//! Validation order: source readable, then required columns present, then
//! per-row values. Any failure aborts the load; no partial store is returned.

mod record;
pub mod schema;

pub use record::{BenchmarkRecord, RANDOM_DISTRIBUTION};

use crate::{Error, Result};
use arrow::csv::reader::Format;
use arrow::csv::ReaderBuilder;
use arrow::record_batch::RecordBatch;
use std::collections::BTreeSet;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info};

/// Default results file written by the sorting experiment
pub const DEFAULT_RESULTS_FILE: &str = "experiment_results.csv";

/// In-memory, ordered collection of benchmark records
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<BenchmarkRecord>,
}

impl RecordStore {
    /// Create a store from already-built records, preserving their order
    #[must_use]
    pub fn new(records: Vec<BenchmarkRecord>) -> Self {
        Self { records }
    }

    /// Load a results table from disk
    ///
    /// Files ending in `.parquet` are read as Parquet, everything else as CSV.
    ///
    /// # Errors
    /// - [`Error::Load`] if the file is missing, unreadable or unparseable
    /// - [`Error::Schema`] if a required column is absent
    /// - [`Error::InvalidRecord`] if a required value is null or out of range
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let is_parquet = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));

        let store = if is_parquet {
            Self::load_parquet(path)?
        } else {
            let file = std::fs::File::open(path)
                .map_err(|e| Error::Load(format!("failed to open {}: {e}", path.display())))?;
            Self::from_csv_reader(file)?
        };

        info!(path = %path.display(), records = store.len(), "loaded benchmark results");
        Ok(store)
    }

    /// Parse CSV text (with header row) from any reader
    ///
    /// # Errors
    /// Same as [`RecordStore::load`].
    pub fn from_csv_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut bytes = Vec::new();
        reader
            .read_to_end(&mut bytes)
            .map_err(|e| Error::Load(format!("failed to read CSV input: {e}")))?;

        let format = Format::default().with_header(true);
        let (schema, _) = format
            .infer_schema(Cursor::new(bytes.as_slice()), None)
            .map_err(|e| Error::Load(format!("failed to parse CSV: {e}")))?;
        schema::validate_schema(&schema)?;
        debug!(columns = schema.fields().len(), "inferred CSV schema");

        let csv = ReaderBuilder::new(Arc::new(schema))
            .with_header(true)
            .build(Cursor::new(bytes.as_slice()))
            .map_err(|e| Error::Load(format!("failed to create CSV reader: {e}")))?;

        let mut batches = Vec::new();
        for batch in csv {
            let batch = batch.map_err(|e| Error::Load(format!("failed to read CSV rows: {e}")))?;
            batches.push(batch);
        }

        Self::from_batches(&batches)
    }

    /// Load a results table from a Parquet file
    ///
    /// # Errors
    /// Same as [`RecordStore::load`].
    pub fn load_parquet<P: AsRef<Path>>(path: P) -> Result<Self> {
        use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
        use std::fs::File;

        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| Error::Load(format!("failed to open {}: {e}", path.display())))?;

        let builder = ParquetRecordBatchReaderBuilder::try_new(file)
            .map_err(|e| Error::Load(format!("failed to parse Parquet file: {e}")))?;
        schema::validate_schema(builder.schema())?;

        let reader = builder
            .build()
            .map_err(|e| Error::Load(format!("failed to create Parquet reader: {e}")))?;

        let mut batches = Vec::new();
        for batch in reader {
            let batch = batch.map_err(|e| Error::Load(format!("failed to read record batch: {e}")))?;
            batches.push(batch);
        }

        Self::from_batches(&batches)
    }

    /// Decode records from Arrow batches, in batch order
    ///
    /// # Errors
    /// Returns [`Error::Schema`] or [`Error::InvalidRecord`] on the first bad batch.
    pub fn from_batches(batches: &[RecordBatch]) -> Result<Self> {
        let mut records = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());
        for batch in batches {
            let decoded = schema::decode_batch(batch, records.len())?;
            records.extend(decoded);
        }
        Ok(Self { records })
    }

    /// All records in load order
    #[must_use]
    pub fn records(&self) -> &[BenchmarkRecord] {
        &self.records
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct algorithm names in first-seen order
    #[must_use]
    pub fn algorithms(&self) -> Vec<&str> {
        first_seen(self.records.iter().map(BenchmarkRecord::algorithm))
    }

    /// Distinct distribution labels in first-seen order
    #[must_use]
    pub fn array_types(&self) -> Vec<&str> {
        first_seen(self.records.iter().map(BenchmarkRecord::array_type))
    }

    /// Distinct array sizes in ascending order
    #[must_use]
    pub fn sizes(&self) -> Vec<u64> {
        self.records
            .iter()
            .map(BenchmarkRecord::array_size)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Smallest and largest array size, or `None` when empty
    #[must_use]
    pub fn size_range(&self) -> Option<(u64, u64)> {
        let sizes = self.records.iter().map(BenchmarkRecord::array_size);
        Some((sizes.clone().min()?, sizes.max()?))
    }

    /// Records measured under one distribution, in load order
    pub fn distribution<'a>(
        &'a self,
        array_type: &'a str,
    ) -> impl Iterator<Item = &'a BenchmarkRecord> + 'a {
        self.records
            .iter()
            .filter(move |record| record.is_distribution(array_type))
    }

    /// Runs the experiment itself flagged as producing unsorted output
    #[must_use]
    pub fn unsorted_runs(&self) -> Vec<&BenchmarkRecord> {
        self.records
            .iter()
            .filter(|record| record.is_sorted() == Some(false))
            .collect()
    }
}

fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = rustc_hash::FxHashSet::default();
    values.filter(|value| seen.insert(*value)).collect()
}
