//! Word-list output.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, TermsError};

/// Dictionary path used by the editor spell-checker, relative to the
/// invocation directory.
pub const DEFAULT_OUTPUT_PATH: &str = ".vscode/dictionaries/data-science-en.txt";

/// Writes one term per line, replacing any existing file.
///
/// The parent directory must already exist; it is never created.
///
/// # Errors
///
/// Returns [`TermsError::OutputWrite`] if the file cannot be created or
/// written.
pub fn write_terms(path: &Path, terms: &BTreeSet<String>) -> Result<()> {
    let to_error = |source| TermsError::OutputWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut writer = BufWriter::new(file);
    for term in terms {
        writeln!(writer, "{term}").map_err(to_error)?;
    }
    writer.flush().map_err(to_error)?;

    tracing::info!(path = %path.display(), terms = terms.len(), "wrote term list");
    Ok(())
}
