//! Metadata sidecar generation for tabular data files.
//!
//! This crate reads a CSV or JSON data file, describes its structure as a
//! [`MetadataRecord`](sidecar_model::MetadataRecord) and writes that record
//! next to the source as `<stem>_metadata.json`.
//!
//! # Features
//!
//! - **CSV**: Polars-backed parsing with full-file schema inference and
//!   pandas-style dtype labels (`int64`, `float64`, `bool`, `object`)
//! - **JSON**: array-of-objects validation, field types taken from the first
//!   record
//! - **Sidecars**: one naming policy for both formats
//! - **Discovery**: list the data files of a folder, skipping existing sidecars
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sidecar_ingest::{SidecarLocation, generate_csv_sidecar};
//! use sidecar_model::MetadataOptions;
//!
//! let output = generate_csv_sidecar(
//!     Path::new("data/sales.csv"),
//!     &MetadataOptions::default(),
//!     &SidecarLocation::Alongside,
//! )?;
//! // data/sales_metadata.json
//! println!("{}", output.path.display());
//! ```

mod csv;
mod discovery;
mod error;
mod json;
mod sidecar;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV ===
pub use csv::{describe_frame, dtype_label, generate_csv_metadata, read_csv_frame};

// === JSON ===
pub use json::{describe_records, generate_json_metadata, read_json_records, value_type_label};

// === Sidecar Output ===
pub use sidecar::{
    SIDECAR_SUFFIX, SidecarLocation, SidecarOutput, file_name_of, generate_csv_sidecar,
    generate_json_sidecar, generate_sidecar, is_sidecar, render_sidecar, sidecar_path,
    write_sidecar,
};

// === File Discovery ===
pub use discovery::{DataFormat, list_data_files};
