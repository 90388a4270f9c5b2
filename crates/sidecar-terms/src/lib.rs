//! Dependency term extraction for editor spell-checker dictionaries.
//!
//! Reads the dependency names from a project manifest, loads the public
//! symbol surface of each library it can find, and writes every public name
//! (top-level items plus the members of types) to a flat word list.
//!
//! Loading is best effort: a dependency that cannot be loaded is recorded as
//! skipped in the [`TermReport`] and extraction carries on with the rest.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use sidecar_terms::{ChainLoader, CatalogLoader, Manifest, SourceLoader, extract_terms, write_terms};
//!
//! let manifest = Manifest::load(Path::new("pyproject.toml"))?;
//! let names = manifest.candidate_names(&["python".to_string()]);
//!
//! let loader = ChainLoader::new()
//!     .with(CatalogLoader::new(".vscode/catalogs"))
//!     .with(SourceLoader::new(vec!["/home/me/.cargo/registry/src".into()]));
//! let report = extract_terms(&names, &loader);
//! write_terms(Path::new(".vscode/dictionaries/data-science-en.txt"), &report.terms)?;
//! ```

mod error;
mod extract;
mod library;
mod loader;
mod manifest;
mod output;

// === Error Types ===
pub use error::{LoadError, Result, TermsError};

// === Libraries ===
pub use library::{Library, LibraryLoader, StaticLibrary, Symbol, SymbolKind};
pub use loader::{CatalogLoader, ChainLoader, SourceLoader};

// === Manifest ===
pub use manifest::{DEFAULT_MANIFEST, DEFAULT_SELF_REFERENCES, Manifest, ManifestLayout};

// === Extraction ===
pub use extract::{LoadOutcome, TermReport, extract_terms, harvest_library, is_public_term};

// === Output ===
pub use output::{DEFAULT_OUTPUT_PATH, write_terms};
