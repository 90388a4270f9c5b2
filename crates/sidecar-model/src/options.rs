//! Options shared by the metadata generators.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Placeholder written to `source` until someone documents the origin.
pub const DEFAULT_SOURCE: &str = "Specify the data source";

/// Placeholder written to `notes`.
pub const DEFAULT_NOTES: &str = "Add any additional notes here";

/// Inputs to a metadata record that do not come from the data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataOptions {
    /// Date stamped into `creation_date`. Defaults to today (local time).
    pub creation_date: NaiveDate,
    pub source: String,
    pub notes: String,
}

impl Default for MetadataOptions {
    fn default() -> Self {
        Self {
            creation_date: Local::now().date_naive(),
            source: DEFAULT_SOURCE.to_string(),
            notes: DEFAULT_NOTES.to_string(),
        }
    }
}

impl MetadataOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pins the creation date instead of reading the clock.
    #[must_use]
    pub fn with_creation_date(mut self, date: NaiveDate) -> Self {
        self.creation_date = date;
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}
