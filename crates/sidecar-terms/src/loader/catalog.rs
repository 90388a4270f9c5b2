//! Symbol catalogs: pre-computed symbol lists stored as JSON.
//!
//! A catalog is `<dir>/<library>.json`:
//!
//! ```json
//! {
//!   "symbols": [
//!     {"name": "DataFrame", "kind": "type", "members": ["head", "tail"]},
//!     {"name": "read_csv", "kind": "function"}
//!   ]
//! }
//! ```
//!
//! A type without a `members` list loads fine, but its member lookup fails
//! and only that type's members are skipped.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::LoadError;
use crate::library::{Library, LibraryLoader, StaticLibrary, Symbol, SymbolKind};

#[derive(Debug, Deserialize)]
struct Catalog {
    #[serde(default)]
    symbols: Vec<CatalogSymbol>,
}

#[derive(Debug, Deserialize)]
struct CatalogSymbol {
    name: String,
    #[serde(default)]
    kind: SymbolKind,
    #[serde(default)]
    members: Option<Vec<String>>,
}

/// Loads libraries from a directory of JSON symbol catalogs.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    dir: PathBuf,
}

impl CatalogLoader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Catalog file for `name`, trying the name as written and with `-`
    /// replaced by `_`.
    fn catalog_path(&self, name: &str) -> Option<PathBuf> {
        let mut candidates = vec![name.to_string()];
        let underscored = name.replace('-', "_");
        if underscored != name {
            candidates.push(underscored);
        }
        candidates
            .into_iter()
            .map(|candidate| self.dir.join(format!("{candidate}.json")))
            .find(|path| path.is_file())
    }
}

impl LibraryLoader for CatalogLoader {
    fn label(&self) -> &'static str {
        "catalog"
    }

    fn load(&self, name: &str) -> Result<Box<dyn Library>, LoadError> {
        let path = self.catalog_path(name).ok_or_else(|| LoadError::NotFound {
            name: name.to_string(),
        })?;
        let file = File::open(&path).map_err(|e| LoadError::Read {
            path: path.clone(),
            source: e,
        })?;
        let catalog: Catalog = serde_json::from_reader(BufReader::new(file))
            .map_err(|e| LoadError::CatalogParse { path, source: e })?;

        let mut library = StaticLibrary::new(name);
        for entry in catalog.symbols {
            if let Some(members) = entry.members {
                library.add_members(&entry.name, members);
            }
            library.add_symbol(Symbol::new(entry.name, entry.kind));
        }
        Ok(Box::new(library))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_loads_catalog() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("pandas.json"),
            r#"{"symbols": [
                {"name": "DataFrame", "kind": "type", "members": ["groupby"]},
                {"name": "read_csv", "kind": "function"}
            ]}"#,
        )
        .unwrap();

        let loader = CatalogLoader::new(dir.path());
        let library = loader.load("pandas").unwrap();

        assert_eq!(library.symbols().len(), 2);
        assert_eq!(library.members("DataFrame").unwrap(), vec!["groupby"]);
    }

    #[test]
    fn test_hyphenated_name_falls_back_to_underscore() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("typing_extensions.json"), "{}").unwrap();

        let loader = CatalogLoader::new(dir.path());
        assert!(loader.load("typing-extensions").is_ok());
    }

    #[test]
    fn test_missing_catalog() {
        let dir = TempDir::new().unwrap();
        let loader = CatalogLoader::new(dir.path());

        assert!(matches!(
            loader.load("numpy"),
            Err(LoadError::NotFound { .. })
        ));
    }

    #[test]
    fn test_invalid_catalog() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("bad.json"), "{").unwrap();

        let loader = CatalogLoader::new(dir.path());
        assert!(matches!(
            loader.load("bad"),
            Err(LoadError::CatalogParse { .. })
        ));
    }
}
