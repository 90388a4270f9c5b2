//! Shared types for the metadata sidecar generators.
//!
//! A [`MetadataRecord`] describes the structure of one data file (CSV or
//! JSON) and is what gets written next to it as `<stem>_metadata.json`.
//! The `source`, `notes` and `preprocessing` fields are deliberately left as
//! placeholders for a human to fill in later.

pub mod metadata;
pub mod options;

pub use metadata::{ColumnDescriptor, MetadataRecord, RecordShape};
pub use options::{DEFAULT_NOTES, DEFAULT_SOURCE, MetadataOptions};
