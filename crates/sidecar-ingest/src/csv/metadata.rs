//! Metadata records for CSV files.

use std::path::Path;

use polars::prelude::DataFrame;
use sidecar_model::{ColumnDescriptor, MetadataOptions, MetadataRecord, RecordShape};

use super::dtype::dtype_label;
use super::reader::read_csv_frame;
use crate::error::Result;
use crate::sidecar::file_name_of;

/// Describes a parsed table.
///
/// Row and column counts come straight from the frame's dimensions; every
/// column gets a descriptor with its dtype label and no description.
pub fn describe_frame(
    file_name: impl Into<String>,
    df: &DataFrame,
    options: &MetadataOptions,
) -> MetadataRecord {
    let columns = df
        .get_columns()
        .iter()
        .map(|col| ColumnDescriptor::new(col.name().to_string(), dtype_label(col)))
        .collect();

    MetadataRecord::new(
        file_name,
        RecordShape::Table {
            number_of_rows: df.height(),
            number_of_columns: df.width(),
        },
        columns,
        options,
    )
}

/// Reads `path` and builds its metadata record.
///
/// # Errors
///
/// Propagates read and parse failures from [`read_csv_frame`].
pub fn generate_csv_metadata(path: &Path, options: &MetadataOptions) -> Result<MetadataRecord> {
    let file_name = file_name_of(path)?;
    let df = read_csv_frame(path)?;
    Ok(describe_frame(file_name, &df, options))
}
