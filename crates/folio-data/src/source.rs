//! Loading raw JSON records from disk.

use std::path::Path;

use folio_core::schema::fields::type_name;
use folio_core::{Error, Issue, Result, ValidationError};
use serde_json::Value;

/// Split a top-level JSON value into records.
///
/// An array yields its elements and a single object yields itself.
///
/// # Errors
///
/// [`ValidationError`] for any other top-level value.
pub fn records_from_value(value: Value) -> std::result::Result<Vec<Value>, ValidationError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(_) => Ok(vec![value]),
        other => Err(ValidationError::new(
            "Validation failed for dataset",
            vec![Issue::new(
                "",
                format!("Expected array, received {}", type_name(&other)),
            )],
            other,
        )),
    }
}

/// Read a JSON file holding one record or an array of records.
///
/// # Errors
///
/// [`Error::Io`] when the file cannot be read, [`Error::Serialization`]
/// for malformed JSON and [`Error::Validation`] for a top-level value that
/// is neither an object nor an array.
pub async fn load_records(path: impl AsRef<Path>) -> Result<Vec<Value>> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))?;
    let value: Value = serde_json::from_str(&text)?;
    let records = records_from_value(value)?;
    log::debug!("Loaded {} record(s) from {}", records.len(), path.display());
    Ok(records)
}
