//! Settings file support.
//!
//! Settings live in `sidecar.toml` in the invocation directory, or in the
//! file named by `--config`. Every field has a default, so a partial file is
//! fine:
//!
//! ```toml
//! [metadata]
//! source = "Exported from the CRM"
//! output_dir = "metadata"
//!
//! [terms]
//! manifest = "pyproject.toml"
//! catalog_dir = ".vscode/catalogs"
//! ```
//!
//! Command-line flags override settings.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use sidecar_ingest::SidecarLocation;
use sidecar_model::{DEFAULT_NOTES, DEFAULT_SOURCE, MetadataOptions};
use sidecar_terms::{DEFAULT_MANIFEST, DEFAULT_OUTPUT_PATH, DEFAULT_SELF_REFERENCES};

/// Settings file looked up in the invocation directory.
pub const DEFAULT_CONFIG_FILE: &str = "sidecar.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub metadata: MetadataSettings,
    pub terms: TermsSettings,
}

/// Settings for the `csv`, `json` and `metadata` commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetadataSettings {
    pub source: String,
    pub notes: String,
    /// Pinned `creation_date` (`"YYYY-MM-DD"`); today when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<NaiveDate>,
    /// Directory for sidecars; next to each source file when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
}

impl Default for MetadataSettings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            notes: DEFAULT_NOTES.to_string(),
            creation_date: None,
            output_dir: None,
        }
    }
}

/// Settings for the `terms` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TermsSettings {
    pub manifest: PathBuf,
    pub output: PathBuf,
    /// Runtime dependency names that are not libraries.
    pub self_references: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_dir: Option<PathBuf>,
    /// Source roots; the Cargo registry cache when empty.
    pub source_roots: Vec<PathBuf>,
}

impl Default for TermsSettings {
    fn default() -> Self {
        Self {
            manifest: PathBuf::from(DEFAULT_MANIFEST),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            self_references: DEFAULT_SELF_REFERENCES
                .iter()
                .map(|name| (*name).to_string())
                .collect(),
            catalog_dir: None,
            source_roots: Vec::new(),
        }
    }
}

impl Settings {
    /// Options for a metadata record.
    pub fn metadata_options(&self) -> MetadataOptions {
        let options = MetadataOptions::new()
            .with_source(self.metadata.source.as_str())
            .with_notes(self.metadata.notes.as_str());
        match self.metadata.creation_date {
            Some(date) => options.with_creation_date(date),
            None => options,
        }
    }

    /// Sidecar location, preferring the command-line directory.
    pub fn sidecar_location(&self, cli_output_dir: Option<&Path>) -> SidecarLocation {
        cli_output_dir
            .map(Path::to_path_buf)
            .or_else(|| self.metadata.output_dir.clone())
            .map_or(SidecarLocation::Alongside, SidecarLocation::Directory)
    }
}

/// Loads settings.
///
/// With an explicit path, a missing or malformed file is an error. Without
/// one, `sidecar.toml` is read if present; a malformed implicit file is
/// reported and ignored.
///
/// # Errors
///
/// Returns an error if an explicitly named settings file cannot be used.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read settings file {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("parse settings file {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded settings");
        return Ok(settings);
    }

    let path = Path::new(DEFAULT_CONFIG_FILE);
    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                tracing::info!(path = %path.display(), "loaded settings");
                Ok(settings)
            }
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to parse settings, using defaults");
                Ok(Settings::default())
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no settings file found, using defaults");
            Ok(Settings::default())
        }
        Err(error) => {
            tracing::warn!(path = %path.display(), %error, "failed to read settings, using defaults");
            Ok(Settings::default())
        }
    }
}

/// Cargo registry source cache: `$CARGO_HOME/registry/src`, falling back to
/// `~/.cargo/registry/src`.
pub fn default_registry_root() -> Option<PathBuf> {
    let cargo_home = std::env::var_os("CARGO_HOME")
        .map(PathBuf::from)
        .or_else(|| BaseDirs::new().map(|dirs| dirs.home_dir().join(".cargo")))?;
    Some(cargo_home.join("registry").join("src"))
}
