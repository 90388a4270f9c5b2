//! Integration tests for CSV sidecar generation.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use sidecar_ingest::{IngestError, SidecarLocation, generate_csv_metadata, generate_csv_sidecar};
use sidecar_model::{MetadataOptions, MetadataRecord, RecordShape};
use tempfile::TempDir;

fn fixed_options() -> MetadataOptions {
    MetadataOptions::default().with_creation_date(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write file");
    path
}

#[test]
fn describes_two_column_table() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "people.csv", "name,val\na,1\nb,2\n");

    let record = generate_csv_metadata(&path, &fixed_options()).expect("generate");

    insta::assert_json_snapshot!(record, @r#"
    {
      "file_name": "people.csv",
      "creation_date": "2024-05-01",
      "source": "Specify the data source",
      "number_of_rows": 2,
      "number_of_columns": 2,
      "columns": [
        {
          "name": "name",
          "type": "object"
        },
        {
          "name": "val",
          "type": "int64"
        }
      ],
      "preprocessing": [],
      "notes": "Add any additional notes here"
    }
    "#);
}

#[test]
fn column_list_matches_column_count() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "mixed.csv",
        "id,score,flag,label,empty\n1,0.5,true,x,\n2,1.5,false,y,\n3,,true,z,\n",
    );

    let record = generate_csv_metadata(&path, &fixed_options()).expect("generate");

    let RecordShape::Table {
        number_of_rows,
        number_of_columns,
    } = record.shape
    else {
        panic!("expected table shape");
    };
    assert_eq!(number_of_rows, 3);
    assert_eq!(number_of_columns, 5);
    assert_eq!(record.columns.len(), number_of_columns);

    let types: Vec<&str> = record.columns.iter().map(|c| c.data_type.as_str()).collect();
    assert_eq!(types, vec!["int64", "float64", "bool", "object", "float64"]);
    assert!(record.columns.iter().all(|c| c.description.is_none()));
}

#[test]
fn late_text_value_makes_column_textual() {
    let dir = TempDir::new().unwrap();
    let mut contents = String::from("code\n");
    for i in 0..250 {
        contents.push_str(&format!("{i}\n"));
    }
    contents.push_str("abc\n");
    let path = write_file(dir.path(), "codes.csv", &contents);

    let record = generate_csv_metadata(&path, &fixed_options()).expect("generate");

    assert_eq!(record.columns[0].data_type, "object");
    assert_eq!(record.shape.len(), 251);
}

#[test]
fn na_tokens_are_missing_values() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        dir.path(),
        "scores.csv",
        "score,flag\n1.5,True\nNA,False\n3.0,True\n",
    );

    let record = generate_csv_metadata(&path, &fixed_options()).expect("generate");
    let types: Vec<&str> = record
        .columns
        .iter()
        .map(|column| column.data_type.as_str())
        .collect();

    assert_eq!(types, vec!["float64", "bool"]);
}

#[test]
fn late_missing_value_turns_ints_into_floats() {
    let dir = TempDir::new().unwrap();
    let mut contents = String::from("code\n");
    for i in 0..250 {
        contents.push_str(&format!("{i}\n"));
    }
    contents.push_str("N/A\n");
    let path = write_file(dir.path(), "codes.csv", &contents);

    let record = generate_csv_metadata(&path, &fixed_options()).expect("generate");

    assert_eq!(record.columns[0].data_type, "float64");
}

#[test]
fn writes_sidecar_next_to_source() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    fs::create_dir(&data_dir).unwrap();
    let path = write_file(&data_dir, "sales.csv", "region,amount\nnorth,1.5\n");

    let output =
        generate_csv_sidecar(&path, &fixed_options(), &SidecarLocation::Alongside).expect("write");

    assert_eq!(output.path, data_dir.join("sales_metadata.json"));
    let text = fs::read_to_string(&output.path).expect("read sidecar");
    assert!(text.contains("\n    \"file_name\": \"sales.csv\""));
    let parsed: MetadataRecord = serde_json::from_str(&text).expect("parse sidecar");
    assert_eq!(parsed, output.record);
}

#[test]
fn overwrites_existing_sidecar() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "a.csv", "x\n1\n");
    write_file(dir.path(), "a_metadata.json", "stale");

    let output =
        generate_csv_sidecar(&path, &fixed_options(), &SidecarLocation::Alongside).expect("write");

    let text = fs::read_to_string(&output.path).unwrap();
    assert!(!text.contains("stale"));
}

#[test]
fn writes_into_explicit_directory() {
    let dir = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let path = write_file(dir.path(), "a.csv", "x\n1\n");

    let location = SidecarLocation::Directory(out.path().to_path_buf());
    let output = generate_csv_sidecar(&path, &fixed_options(), &location).expect("write");

    assert_eq!(output.path, out.path().join("a_metadata.json"));
    assert!(!dir.path().join("a_metadata.json").exists());
}

#[test]
fn missing_output_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "a.csv", "x\n1\n");

    let location = SidecarLocation::Directory(dir.path().join("missing"));
    let result = generate_csv_sidecar(&path, &fixed_options(), &location);

    assert!(matches!(result, Err(IngestError::FileWrite { .. })));
}

#[test]
fn empty_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(dir.path(), "empty.csv", "");

    let result = generate_csv_sidecar(&path, &fixed_options(), &SidecarLocation::Alongside);

    assert!(matches!(result, Err(IngestError::CsvParse { .. })));
    assert!(!dir.path().join("empty_metadata.json").exists());
}
