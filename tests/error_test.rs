//! Tests for error types

use sortbench_analyzer::Error;

#[test]
fn test_load_error() {
    let error = Error::Load("failed to open results.csv".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Load error"));
    assert!(error_str.contains("results.csv"));
    assert!(error_str.contains("Run the sorting experiment first"));
    assert!(error.is_fatal());
}

#[test]
fn test_schema_error_lists_columns() {
    let error = Error::Schema {
        missing: vec!["ArrayType".to_string(), "CharacterComparisons".to_string()],
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("missing required columns"));
    assert!(error_str.contains("ArrayType, CharacterComparisons"));
    assert!(error.is_fatal());
}

#[test]
fn test_invalid_record_error() {
    let error = Error::InvalidRecord {
        row: 7,
        column: "ExecutionTime_ms".to_string(),
        reason: "missing or not a valid number".to_string(),
    };
    let error_str = format!("{error}");
    assert!(error_str.contains("data row 7"));
    assert!(error_str.contains("ExecutionTime_ms"));
    assert!(error.is_fatal());
}

#[test]
fn test_render_error_is_not_fatal() {
    let error = Error::Render("font not found".to_string());
    let error_str = format!("{error}");
    assert!(error_str.contains("Render error"));
    assert!(!error.is_fatal());
}

#[test]
fn test_arrow_error_conversion() {
    let arrow_error = arrow::error::ArrowError::CastError("Utf8 to Int64".to_string());
    let error: Error = arrow_error.into();
    let error_str = format!("{error}");
    assert!(error_str.contains("Arrow error"));
    assert!(error.is_fatal());
}

#[test]
fn test_error_debug() {
    let error = Error::Render("x".to_string());
    let debug_str = format!("{error:?}");
    assert!(debug_str.contains("Render"));
}

#[test]
fn test_result_type_alias_error() {
    fn returns_error() -> sortbench_analyzer::Result<i32> {
        Err(Error::Load("test error".to_string()))
    }

    let result = returns_error();
    assert!(result.is_err());
}
