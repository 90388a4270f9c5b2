//! Error types for term extraction.

use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors: anything that stops the word list from being produced.
#[derive(Debug, Error)]
pub enum TermsError {
    /// Manifest missing or unreadable.
    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Manifest is not valid TOML.
    #[error("failed to parse TOML manifest {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Manifest has no dependency tables in any known layout.
    #[error("no dependencies or dev-dependencies found in manifest {path}")]
    MissingDependencySections { path: PathBuf },

    /// Output file could not be created or written.
    #[error("failed to write terms to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Per-dependency or per-item failures. These are recorded and skipped,
/// never escalated.
#[derive(Debug, Error)]
pub enum LoadError {
    /// No loader knows a library by this name.
    #[error("library not found: {name}")]
    NotFound { name: String },

    /// A library file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A symbol catalog is not valid JSON.
    #[error("failed to parse symbol catalog {path}: {source}")]
    CatalogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The Rust grammar could not be loaded into the parser.
    #[error("failed to set up the Rust parser: {0}")]
    Parser(#[from] tree_sitter::LanguageError),

    /// Member names for a type symbol are not available.
    #[error("members of {symbol} are not available in {library}")]
    MissingMembers { library: String, symbol: String },
}

/// Result type for fatal term extraction operations.
pub type Result<T> = std::result::Result<T, TermsError>;
