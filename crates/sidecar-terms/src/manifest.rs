//! Project manifest parsing.
//!
//! Two layouts are understood:
//!
//! - Poetry: `[tool.poetry.dependencies]`, `[tool.poetry.dev-dependencies]`
//!   and `[tool.poetry.group.<name>.dependencies]` (treated as development
//!   dependencies).
//! - Cargo-style: top-level `[dependencies]` and `[dev-dependencies]`.
//!
//! Only the key names matter; version requirements are ignored.

use std::path::Path;

use toml::{Table, Value};

use crate::error::{Result, TermsError};

/// Manifest file name looked up in the invocation directory.
pub const DEFAULT_MANIFEST: &str = "pyproject.toml";

/// Dependency entries that name the language runtime rather than a library.
pub const DEFAULT_SELF_REFERENCES: &[&str] = &["python"];

/// Which table layout the dependencies were read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestLayout {
    Poetry,
    Cargo,
}

impl ManifestLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Poetry => "poetry",
            Self::Cargo => "cargo",
        }
    }
}

/// Dependency names declared by a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub layout: ManifestLayout,
    /// Runtime dependencies.
    pub dependencies: Vec<String>,
    /// Development dependencies (including Poetry groups).
    pub dev_dependencies: Vec<String>,
}

impl Manifest {
    /// Reads and parses a manifest file.
    ///
    /// # Errors
    ///
    /// - [`TermsError::ManifestRead`] if the file is missing or unreadable
    /// - [`TermsError::ManifestParse`] if it is not valid TOML
    /// - [`TermsError::MissingDependencySections`] if no dependency table exists
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| TermsError::ManifestRead {
            path: path.to_path_buf(),
            source,
        })?;
        let manifest = Self::from_toml_str(&content, path)?;
        tracing::debug!(
            path = %path.display(),
            layout = manifest.layout.as_str(),
            dependencies = manifest.dependencies.len(),
            dev_dependencies = manifest.dev_dependencies.len(),
            "loaded manifest"
        );
        Ok(manifest)
    }

    /// Parses manifest text. `path` is only used in error messages.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self> {
        let root: Table = toml::from_str(content).map_err(|source| TermsError::ManifestParse {
            path: path.to_path_buf(),
            source,
        })?;

        if let Some(poetry) = root
            .get("tool")
            .and_then(Value::as_table)
            .and_then(|tool| tool.get("poetry"))
            .and_then(Value::as_table)
            && let Some(manifest) = Self::from_poetry(poetry)
        {
            return Ok(manifest);
        }

        let dependencies = table_keys(&root, "dependencies");
        let dev_dependencies = table_keys(&root, "dev-dependencies");
        if dependencies.is_none() && dev_dependencies.is_none() {
            return Err(TermsError::MissingDependencySections {
                path: path.to_path_buf(),
            });
        }

        Ok(Self {
            layout: ManifestLayout::Cargo,
            dependencies: dependencies.unwrap_or_default(),
            dev_dependencies: dev_dependencies.unwrap_or_default(),
        })
    }

    fn from_poetry(poetry: &Table) -> Option<Self> {
        let dependencies = table_keys(poetry, "dependencies");
        let mut dev_dependencies = table_keys(poetry, "dev-dependencies");

        if let Some(groups) = poetry.get("group").and_then(Value::as_table) {
            for group in groups.values().filter_map(Value::as_table) {
                if let Some(names) = table_keys(group, "dependencies") {
                    dev_dependencies.get_or_insert_with(Vec::new).extend(names);
                }
            }
        }

        if dependencies.is_none() && dev_dependencies.is_none() {
            return None;
        }
        Some(Self {
            layout: ManifestLayout::Poetry,
            dependencies: dependencies.unwrap_or_default(),
            dev_dependencies: dev_dependencies.unwrap_or_default(),
        })
    }

    /// Library names to load: runtime dependencies without the
    /// self-references, then development dependencies. Duplicates keep their
    /// first position.
    pub fn candidate_names(&self, self_references: &[String]) -> Vec<String> {
        let runtime = self
            .dependencies
            .iter()
            .filter(|name| !self_references.contains(name));

        let mut names: Vec<String> = Vec::new();
        for name in runtime.chain(&self.dev_dependencies) {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }
}

/// Keys of the sub-table `key`, or `None` if there is no such table.
fn table_keys(table: &Table, key: &str) -> Option<Vec<String>> {
    table
        .get(key)
        .and_then(Value::as_table)
        .map(|deps| deps.keys().cloned().collect())
}
