//! Term harvesting.
//!
//! Each dependency gets an explicit [`LoadOutcome`]. A dependency that fails
//! to load is recorded as skipped and never retried; a type whose members
//! cannot be listed loses only its members.

use std::collections::BTreeSet;

use crate::error::LoadError;
use crate::library::{Library, LibraryLoader};

/// Result of loading one dependency.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded { name: String, terms: usize },
    Skipped { name: String, error: LoadError },
}

impl LoadOutcome {
    pub fn name(&self) -> &str {
        match self {
            Self::Loaded { name, .. } | Self::Skipped { name, .. } => name,
        }
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded { .. })
    }
}

/// Terms gathered from all loadable dependencies.
#[derive(Debug, Default)]
pub struct TermReport {
    pub terms: BTreeSet<String>,
    /// One entry per candidate name, in input order.
    pub outcomes: Vec<LoadOutcome>,
}

impl TermReport {
    /// Names of the dependencies that loaded.
    pub fn loaded(&self) -> impl Iterator<Item = &str> {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.is_loaded())
            .map(LoadOutcome::name)
    }

    /// Dependencies that were skipped, with the reason.
    pub fn skipped(&self) -> impl Iterator<Item = (&str, &LoadError)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            LoadOutcome::Skipped { name, error } => Some((name.as_str(), error)),
            LoadOutcome::Loaded { .. } => None,
        })
    }
}

/// A name is a term unless it is empty or starts with `_`.
pub fn is_public_term(name: &str) -> bool {
    !name.is_empty() && !name.starts_with('_')
}

/// Public names of one library: its top-level symbols plus the members of
/// every type symbol.
pub fn harvest_library(library: &dyn Library) -> BTreeSet<String> {
    let mut terms = BTreeSet::new();

    for symbol in library.symbols() {
        if is_public_term(&symbol.name) {
            terms.insert(symbol.name.clone());
        }
        if !symbol.kind.is_type() {
            continue;
        }
        let Ok(members) = library.members(&symbol.name) else {
            continue;
        };
        terms.extend(members.into_iter().filter(|member| is_public_term(member)));
    }

    terms
}

/// Loads every name with `loader` and merges the harvested terms.
pub fn extract_terms(names: &[String], loader: &dyn LibraryLoader) -> TermReport {
    let mut report = TermReport::default();

    for name in names {
        let outcome = match loader.load(name) {
            Ok(library) => {
                let terms = harvest_library(library.as_ref());
                let count = terms.len();
                report.terms.extend(terms);
                LoadOutcome::Loaded {
                    name: name.clone(),
                    terms: count,
                }
            }
            Err(error) => LoadOutcome::Skipped {
                name: name.clone(),
                error,
            },
        };
        report.outcomes.push(outcome);
    }

    tracing::info!(
        loader = loader.label(),
        loaded = report.loaded().count(),
        skipped = report.skipped().count(),
        terms = report.terms.len(),
        "extracted dependency terms"
    );
    report
}
