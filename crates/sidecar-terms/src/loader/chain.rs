//! Loader that tries several loaders in order.

use crate::error::LoadError;
use crate::library::{Library, LibraryLoader};

/// Tries each registered loader in turn; the first success wins.
#[derive(Default)]
pub struct ChainLoader {
    loaders: Vec<Box<dyn LibraryLoader>>,
}

impl ChainLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a loader to the chain.
    pub fn push(&mut self, loader: impl LibraryLoader + 'static) {
        self.loaders.push(Box::new(loader));
    }

    #[must_use]
    pub fn with(mut self, loader: impl LibraryLoader + 'static) -> Self {
        self.push(loader);
        self
    }

    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

impl LibraryLoader for ChainLoader {
    fn label(&self) -> &'static str {
        "chain"
    }

    fn load(&self, name: &str) -> Result<Box<dyn Library>, LoadError> {
        let mut last_error = None;
        for loader in &self.loaders {
            match loader.load(name) {
                Ok(library) => return Ok(library),
                Err(error) => last_error = Some(error),
            }
        }
        Err(last_error.unwrap_or_else(|| LoadError::NotFound {
            name: name.to_string(),
        }))
    }
}
