//! Metadata record written as a JSON sidecar.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::options::MetadataOptions;

/// Description of a single column (CSV) or field (JSON).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    /// Column header or object key.
    pub name: String,
    /// Inferred type label, e.g. `int64`, `object`, `str`.
    #[serde(rename = "type")]
    pub data_type: String,
    /// Free-text description. JSON fields carry a generated placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ColumnDescriptor {
    /// Creates a descriptor without a description.
    pub fn new(name: impl Into<String>, data_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: data_type.into(),
            description: None,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Size of the described file.
///
/// Tabular files report rows and columns; record files report a record
/// count only. The variant decides which keys appear in the sidecar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordShape {
    Table {
        number_of_rows: usize,
        number_of_columns: usize,
    },
    Records {
        number_of_records: usize,
    },
}

impl RecordShape {
    /// Number of data rows or records.
    pub fn len(&self) -> usize {
        match self {
            Self::Table { number_of_rows, .. } => *number_of_rows,
            Self::Records { number_of_records } => *number_of_records,
        }
    }

    /// Returns true if the file holds no rows or records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Structural metadata for one data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Last path segment of the described file.
    pub file_name: String,
    /// Date the record was generated, serialized as `YYYY-MM-DD`.
    pub creation_date: NaiveDate,
    pub source: String,
    #[serde(flatten)]
    pub shape: RecordShape,
    pub columns: Vec<ColumnDescriptor>,
    /// Processing steps applied to the data. Always empty when generated.
    pub preprocessing: Vec<String>,
    pub notes: String,
}

impl MetadataRecord {
    /// Builds a fresh record, taking date and placeholders from `options`.
    pub fn new(
        file_name: impl Into<String>,
        shape: RecordShape,
        columns: Vec<ColumnDescriptor>,
        options: &MetadataOptions,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            creation_date: options.creation_date,
            source: options.source.clone(),
            shape,
            columns,
            preprocessing: Vec::new(),
            notes: options.notes.clone(),
        }
    }

    /// Returns the column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}
