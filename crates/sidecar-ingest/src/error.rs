//! Error types for metadata generation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading data files or writing sidecars.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not a directory.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create or write the sidecar file.
    #[error("failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path has no usable file name to derive a sidecar from.
    #[error("cannot derive a file name from {path}")]
    InvalidFileName { path: PathBuf },

    /// File extension is neither CSV nor JSON.
    #[error("unsupported data file (expected .csv or .json): {path}")]
    UnsupportedFormat { path: PathBuf },

    // === CSV Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    // === JSON Errors ===
    /// File is not valid JSON.
    #[error("failed to parse JSON {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// JSON parsed, but is not an array of objects.
    #[error("JSON file format is not supported. Expected an array of objects: {path}")]
    UnsupportedJsonShape { path: PathBuf },

    /// Failed to serialize the metadata record.
    #[error("failed to serialize metadata for {path}: {source}")]
    JsonWrite {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl IngestError {
    /// Maps an open/read failure to `FileNotFound` or `FileRead`.
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::FileRead { path, source }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
