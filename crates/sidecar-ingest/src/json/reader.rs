//! JSON array-of-objects reading.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::{IngestError, Result};

/// Reads a JSON file that must hold an array of objects.
///
/// Every element is checked, not just the first. Key order inside each
/// object is preserved.
///
/// # Errors
///
/// - [`IngestError::FileNotFound`] / [`IngestError::FileRead`] on I/O failure
/// - [`IngestError::JsonParse`] if the file is not valid JSON
/// - [`IngestError::UnsupportedJsonShape`] if the top level is not an array,
///   or any element is not an object
pub fn read_json_records(path: &Path) -> Result<Vec<Map<String, Value>>> {
    let file = File::open(path).map_err(|e| IngestError::read(path, e))?;
    let value: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| IngestError::JsonParse {
            path: path.to_path_buf(),
            source: e,
        })?;

    let Value::Array(items) = value else {
        return Err(IngestError::UnsupportedJsonShape {
            path: path.to_path_buf(),
        });
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Value::Object(map) => records.push(map),
            _ => {
                tracing::debug!(path = %path.display(), index, "array element is not an object");
                return Err(IngestError::UnsupportedJsonShape {
                    path: path.to_path_buf(),
                });
            }
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_json(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_reads_records_in_key_order() {
        let file = create_temp_json(r#"[{"z": 1, "a": 2}, {"a": 3}]"#);
        let records = read_json_records(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        let keys: Vec<&String> = records[0].keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_rejects_top_level_object() {
        let file = create_temp_json(r#"{"a": 1}"#);
        let result = read_json_records(file.path());

        assert!(matches!(
            result,
            Err(IngestError::UnsupportedJsonShape { .. })
        ));
    }

    #[test]
    fn test_rejects_non_object_element() {
        let file = create_temp_json(r#"[{"a": 1}, 2]"#);
        let result = read_json_records(file.path());

        assert!(matches!(
            result,
            Err(IngestError::UnsupportedJsonShape { .. })
        ));
    }

    #[test]
    fn test_invalid_json() {
        let file = create_temp_json("[{");
        let result = read_json_records(file.path());

        assert!(matches!(result, Err(IngestError::JsonParse { .. })));
    }
}
