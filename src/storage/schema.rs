//! Results-table schema: required columns, validation and row decoding
//!
//! Column types in the source are whatever the reader inferred; every required
//! column is cast to its canonical type before values are read, so integer-valued
//! time columns and string-typed size columns are accepted as long as each value
//! converts.

use super::BenchmarkRecord;
use crate::{Error, Result};
use arrow::array::{Array, ArrayRef, AsArray, BooleanArray, Float64Array, Int64Array, RecordBatch, StringArray};
use arrow::compute::cast;
use arrow::datatypes::{DataType, Float64Type, Int64Type, Schema};

/// Algorithm name column
pub const ALGORITHM: &str = "Algorithm";
/// Array size column
pub const ARRAY_SIZE: &str = "ArraySize";
/// Distribution label column
pub const ARRAY_TYPE: &str = "ArrayType";
/// Elapsed time column (milliseconds)
pub const EXECUTION_TIME_MS: &str = "ExecutionTime_ms";
/// Per-character comparison count column
pub const CHARACTER_COMPARISONS: &str = "CharacterComparisons";
/// Optional sortedness check written by the experiment
pub const IS_SORTED: &str = "IsSorted";

/// Columns every results table must carry, in validation order.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    ALGORITHM,
    ARRAY_SIZE,
    ARRAY_TYPE,
    EXECUTION_TIME_MS,
    CHARACTER_COMPARISONS,
];

/// Check that every required column is present.
///
/// # Errors
/// Returns [`Error::Schema`] listing all missing columns.
pub fn validate_schema(schema: &Schema) -> Result<()> {
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| schema.index_of(name).is_err())
        .map(|name| (*name).to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::Schema { missing })
    }
}

/// Decode one batch into records.
///
/// `rows_before` is the number of data rows in preceding batches, used to
/// report 1-based row numbers that match the source file.
///
/// # Errors
/// Returns [`Error::Schema`] if a required column is absent and
/// [`Error::InvalidRecord`] for the first null, unconvertible, or
/// out-of-range value.
pub fn decode_batch(batch: &RecordBatch, rows_before: usize) -> Result<Vec<BenchmarkRecord>> {
    validate_schema(&batch.schema())?;

    let algorithms = cast_column(batch, ALGORITHM, &DataType::Utf8)?;
    let sizes = cast_integer_column(batch, ARRAY_SIZE, rows_before)?;
    let types = cast_column(batch, ARRAY_TYPE, &DataType::Utf8)?;
    let times = cast_column(batch, EXECUTION_TIME_MS, &DataType::Float64)?;
    let comparisons = cast_integer_column(batch, CHARACTER_COMPARISONS, rows_before)?;
    let sorted = match batch.column_by_name(IS_SORTED) {
        Some(column) => Some(cast(column.as_ref(), &DataType::Boolean)?),
        None => None,
    };

    let algorithms = strings(&algorithms, ALGORITHM)?;
    let types = strings(&types, ARRAY_TYPE)?;
    let sizes = int64s(&sizes, ARRAY_SIZE)?;
    let comparisons = int64s(&comparisons, CHARACTER_COMPARISONS)?;
    let times: &Float64Array = times
        .as_primitive_opt::<Float64Type>()
        .ok_or_else(|| cast_mismatch(EXECUTION_TIME_MS))?;
    let sorted: Option<&BooleanArray> = sorted.as_ref().and_then(|s| s.as_boolean_opt());

    let mut records = Vec::with_capacity(batch.num_rows());
    for i in 0..batch.num_rows() {
        let row = rows_before + i + 1;

        let algorithm = string_value(algorithms, i, row, ALGORITHM)?;
        let array_type = string_value(types, i, row, ARRAY_TYPE)?;

        require_valid(sizes, i, row, ARRAY_SIZE, "integer")?;
        let array_size = u64::try_from(sizes.value(i))
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| invalid(row, ARRAY_SIZE, "array size must be a positive integer"))?;

        require_valid(times, i, row, EXECUTION_TIME_MS, "number")?;
        let execution_time_ms = times.value(i);
        if !execution_time_ms.is_finite() || execution_time_ms < 0.0 {
            return Err(invalid(
                row,
                EXECUTION_TIME_MS,
                "execution time must be a finite, non-negative number",
            ));
        }

        require_valid(comparisons, i, row, CHARACTER_COMPARISONS, "integer")?;
        let character_comparisons = u64::try_from(comparisons.value(i))
            .map_err(|_| invalid(row, CHARACTER_COMPARISONS, "comparison count must be non-negative"))?;

        let mut record = BenchmarkRecord::new(
            algorithm,
            array_size,
            array_type,
            execution_time_ms,
            character_comparisons,
        );
        if let Some(flag) = sorted.filter(|s| s.is_valid(i)).map(|s| s.value(i)) {
            record = record.with_is_sorted(flag);
        }
        records.push(record);
    }

    Ok(records)
}

fn cast_column(batch: &RecordBatch, name: &str, data_type: &DataType) -> Result<ArrayRef> {
    let column = batch.column_by_name(name).ok_or_else(|| Error::Schema {
        missing: vec![name.to_string()],
    })?;
    Ok(cast(column.as_ref(), data_type)?)
}

/// Cast an integer column, rejecting floating-point sources with a fractional part.
///
/// Arrow's float-to-integer cast truncates, so `100.7` would otherwise read as `100`.
fn cast_integer_column(batch: &RecordBatch, name: &str, rows_before: usize) -> Result<ArrayRef> {
    let column = batch.column_by_name(name).ok_or_else(|| Error::Schema {
        missing: vec![name.to_string()],
    })?;

    if column.data_type().is_floating() {
        let floats = cast(column.as_ref(), &DataType::Float64)?;
        let floats = floats
            .as_primitive_opt::<Float64Type>()
            .ok_or_else(|| cast_mismatch(name))?;
        for (i, value) in floats.iter().enumerate() {
            if value.is_some_and(|v| !v.is_finite() || v.fract().abs() > 0.0) {
                return Err(invalid(rows_before + i + 1, name, "value is not an integer"));
            }
        }
    }

    Ok(cast(column.as_ref(), &DataType::Int64)?)
}

fn strings<'a>(array: &'a ArrayRef, column: &str) -> Result<&'a StringArray> {
    array.as_string_opt::<i32>().ok_or_else(|| cast_mismatch(column))
}

fn int64s<'a>(array: &'a ArrayRef, column: &str) -> Result<&'a Int64Array> {
    array
        .as_primitive_opt::<Int64Type>()
        .ok_or_else(|| cast_mismatch(column))
}

fn string_value(array: &StringArray, i: usize, row: usize, column: &str) -> Result<String> {
    require_valid(array, i, row, column, "string")?;
    let value = array.value(i).trim();
    if value.is_empty() {
        return Err(invalid(row, column, "value is empty"));
    }
    Ok(value.to_string())
}

fn require_valid(array: &dyn Array, i: usize, row: usize, column: &str, expected: &str) -> Result<()> {
    if array.is_null(i) {
        return Err(invalid(row, column, &format!("missing or not a valid {expected}")));
    }
    Ok(())
}

fn invalid(row: usize, column: &str, reason: &str) -> Error {
    Error::InvalidRecord {
        row,
        column: column.to_string(),
        reason: reason.to_string(),
    }
}

fn cast_mismatch(column: &str) -> Error {
    Error::Load(format!("column {column} could not be converted to its canonical type"))
}
