//! CSV file reading.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Cell values read as missing, matching pandas' `read_csv` defaults. Empty
/// fields are always missing.
const NA_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Reads a CSV file into a Polars DataFrame.
///
/// The first row is the header. Column types are inferred from every row
/// of the file rather than a prefix, so a late non-numeric value still turns
/// the column into text. pandas' default NA tokens such as `NA`, `N/A` and
/// `null` are read as missing values.
///
/// # Errors
///
/// - [`IngestError::FileNotFound`] if `path` does not exist
/// - [`IngestError::CsvParse`] if Polars cannot parse the file (this includes
///   an empty file)
pub fn read_csv_frame(path: &Path) -> Result<DataFrame> {
    std::fs::metadata(path).map_err(|e| IngestError::read(path, e))?;

    let null_values =
        NullValues::AllColumns(NA_TOKENS.iter().map(|token| (*token).into()).collect());
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_null_values(Some(null_values)))
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "read CSV"
    );

    Ok(df)
}
