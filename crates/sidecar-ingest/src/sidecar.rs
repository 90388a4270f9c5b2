//! Sidecar naming and writing.
//!
//! Both generators share one policy: the sidecar for `dir/name.ext` is
//! `dir/name_metadata.json`, unless an explicit output directory is given.
//! Existing sidecars are overwritten. Output directories are never created.

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use sidecar_model::{MetadataOptions, MetadataRecord};

use crate::csv::generate_csv_metadata;
use crate::discovery::DataFormat;
use crate::error::{IngestError, Result};
use crate::json::generate_json_metadata;

/// Suffix appended to the source file stem.
pub const SIDECAR_SUFFIX: &str = "_metadata.json";

/// Where a sidecar is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SidecarLocation {
    /// Same directory as the source file.
    #[default]
    Alongside,
    /// An existing directory, e.g. the invocation directory.
    Directory(PathBuf),
}

/// A sidecar that was written to disk.
#[derive(Debug, Clone)]
pub struct SidecarOutput {
    pub path: PathBuf,
    pub record: MetadataRecord,
}

/// Returns the last path segment of `path` as a string.
pub fn file_name_of(path: &Path) -> Result<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| IngestError::InvalidFileName {
            path: path.to_path_buf(),
        })
}

/// Returns true if `path` looks like a sidecar produced by this crate.
pub fn is_sidecar(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(SIDECAR_SUFFIX))
}

/// Computes the sidecar path for `source`.
pub fn sidecar_path(source: &Path, location: &SidecarLocation) -> Result<PathBuf> {
    let stem = source
        .file_stem()
        .ok_or_else(|| IngestError::InvalidFileName {
            path: source.to_path_buf(),
        })?;
    let name = format!("{}{SIDECAR_SUFFIX}", stem.to_string_lossy());

    Ok(match location {
        SidecarLocation::Alongside => source.with_file_name(name),
        SidecarLocation::Directory(dir) => dir.join(name),
    })
}

/// Renders `record` as JSON indented with four spaces, plus a trailing
/// newline.
pub fn render_sidecar(record: &MetadataRecord) -> serde_json::Result<String> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut serializer)?;
    buf.push(b'\n');
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes `record` to `path`, replacing any existing file.
pub fn write_sidecar(path: &Path, record: &MetadataRecord) -> Result<()> {
    let text = render_sidecar(record).map_err(|e| IngestError::JsonWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    std::fs::write(path, text).map_err(|e| IngestError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::info!(path = %path.display(), "wrote metadata sidecar");
    Ok(())
}

/// Generates and writes the sidecar for a CSV file.
pub fn generate_csv_sidecar(
    source: &Path,
    options: &MetadataOptions,
    location: &SidecarLocation,
) -> Result<SidecarOutput> {
    let record = generate_csv_metadata(source, options)?;
    finish(source, record, location)
}

/// Generates and writes the sidecar for a JSON file.
///
/// Nothing is written when the file fails validation.
pub fn generate_json_sidecar(
    source: &Path,
    options: &MetadataOptions,
    location: &SidecarLocation,
) -> Result<SidecarOutput> {
    let record = generate_json_metadata(source, options)?;
    finish(source, record, location)
}

/// Generates and writes the sidecar for a file, dispatching on its extension.
pub fn generate_sidecar(
    source: &Path,
    options: &MetadataOptions,
    location: &SidecarLocation,
) -> Result<SidecarOutput> {
    match DataFormat::from_path(source)? {
        DataFormat::Csv => generate_csv_sidecar(source, options, location),
        DataFormat::Json => generate_json_sidecar(source, options, location),
    }
}

fn finish(
    source: &Path,
    record: MetadataRecord,
    location: &SidecarLocation,
) -> Result<SidecarOutput> {
    let path = sidecar_path(source, location)?;
    write_sidecar(&path, &record)?;
    Ok(SidecarOutput { path, record })
}
