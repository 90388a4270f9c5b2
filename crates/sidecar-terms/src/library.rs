//! Library abstraction.
//!
//! A [`LibraryLoader`] turns a dependency name into a [`Library`]: a
//! read-only view of the library's public symbols. Loaders are tried per
//! dependency and a failure only affects that dependency.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::LoadError;

/// Broad category of a public symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    /// A struct, enum, union, trait or class: something with members.
    Type,
    Function,
    Module,
    /// Constants, statics, aliases, re-exports and anything else.
    #[default]
    Value,
}

impl SymbolKind {
    pub fn is_type(&self) -> bool {
        matches!(self, Self::Type)
    }
}

/// A top-level public name of a library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    #[serde(default)]
    pub kind: SymbolKind,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// A loaded library.
pub trait Library {
    /// Dependency name the library was loaded for.
    fn name(&self) -> &str;

    /// Top-level symbols, including private-looking ones. Filtering is the
    /// caller's job.
    fn symbols(&self) -> &[Symbol];

    /// Member names of a type symbol.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::MissingMembers`] when the library cannot list the
    /// members of `symbol`. Callers skip that one symbol.
    fn members(&self, symbol: &str) -> Result<Vec<String>, LoadError>;
}

/// Resolves dependency names to libraries.
pub trait LibraryLoader {
    /// Short label used in logs (e.g. "catalog", "source").
    fn label(&self) -> &'static str;

    /// Loads the library called `name`.
    ///
    /// # Errors
    ///
    /// Any error means "skip this dependency".
    fn load(&self, name: &str) -> Result<Box<dyn Library>, LoadError>;
}

/// In-memory library built by the loaders.
#[derive(Debug, Clone, Default)]
pub struct StaticLibrary {
    name: String,
    symbols: Vec<Symbol>,
    members: BTreeMap<String, Vec<String>>,
}

impl StaticLibrary {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            symbols: Vec::new(),
            members: BTreeMap::new(),
        }
    }

    /// Adds a top-level symbol.
    pub fn add_symbol(&mut self, symbol: Symbol) {
        self.symbols.push(symbol);
    }

    /// Records the members of a type. Repeated calls append, so several
    /// `impl` blocks for one type accumulate.
    pub fn add_members<I, S>(&mut self, owner: &str, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.members
            .entry(owner.to_string())
            .or_default()
            .extend(members.into_iter().map(Into::into));
    }

    /// Builder form of [`add_symbol`](Self::add_symbol).
    #[must_use]
    pub fn with_symbol(mut self, name: &str, kind: SymbolKind) -> Self {
        self.add_symbol(Symbol::new(name, kind));
        self
    }

    /// Builder form of [`add_members`](Self::add_members).
    #[must_use]
    pub fn with_members(mut self, owner: &str, members: &[&str]) -> Self {
        self.add_members(owner, members.iter().copied());
        self
    }
}

impl Library for StaticLibrary {
    fn name(&self) -> &str {
        &self.name
    }

    fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    fn members(&self, symbol: &str) -> Result<Vec<String>, LoadError> {
        self.members
            .get(symbol)
            .cloned()
            .ok_or_else(|| LoadError::MissingMembers {
                library: self.name.clone(),
                symbol: symbol.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_members_accumulate() {
        let mut lib = StaticLibrary::new("demo");
        lib.add_members("Frame", ["head"]);
        lib.add_members("Frame", ["tail"]);

        assert_eq!(lib.members("Frame").unwrap(), vec!["head", "tail"]);
    }

    #[test]
    fn test_missing_members_is_error() {
        let lib = StaticLibrary::new("demo").with_symbol("Frame", SymbolKind::Type);

        assert!(matches!(
            lib.members("Frame"),
            Err(LoadError::MissingMembers { .. })
        ));
    }

    #[test]
    fn test_symbol_kind_deserializes_lowercase() {
        let symbol: Symbol = serde_json::from_str(r#"{"name": "Frame", "kind": "type"}"#).unwrap();
        assert!(symbol.kind.is_type());

        let symbol: Symbol = serde_json::from_str(r#"{"name": "PI"}"#).unwrap();
        assert_eq!(symbol.kind, SymbolKind::Value);
    }
}
