//! Metadata records for JSON files.

use std::path::Path;

use serde_json::{Map, Value};
use sidecar_model::{ColumnDescriptor, MetadataOptions, MetadataRecord, RecordShape};

use super::reader::read_json_records;
use crate::error::Result;
use crate::sidecar::file_name_of;

/// Returns the runtime type name of a JSON value.
///
/// Names match what a dynamically typed consumer would report for the
/// decoded value (`str`, `int`, `float`, `bool`, `NoneType`, `list`, `dict`).
/// An integer literal outside the `i64`/`u64` range is decoded as `f64` and
/// labelled `float`.
pub fn value_type_label(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

/// Describes a list of records.
///
/// Field descriptors are taken from the first record only; keys that appear
/// only in later records are not reported. An empty list yields no fields.
pub fn describe_records(
    file_name: impl Into<String>,
    records: &[Map<String, Value>],
    options: &MetadataOptions,
) -> MetadataRecord {
    let columns = records
        .first()
        .map(|first| {
            first
                .iter()
                .map(|(key, value)| {
                    ColumnDescriptor::new(key.clone(), value_type_label(value))
                        .with_description(format!("Description of {key}"))
                })
                .collect()
        })
        .unwrap_or_default();

    MetadataRecord::new(
        file_name,
        RecordShape::Records {
            number_of_records: records.len(),
        },
        columns,
        options,
    )
}

/// Reads `path` and builds its metadata record.
///
/// # Errors
///
/// Propagates read, parse and shape failures from [`read_json_records`].
pub fn generate_json_metadata(path: &Path, options: &MetadataOptions) -> Result<MetadataRecord> {
    let file_name = file_name_of(path)?;
    let records = read_json_records(path)?;
    Ok(describe_records(file_name, &records, options))
}
