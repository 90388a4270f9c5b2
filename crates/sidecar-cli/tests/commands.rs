//! Integration tests for the CLI commands.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use clap::Parser;
use sidecar_cli::cli::{Cli, Command, FileArgs, MetadataArgs, TermsArgs};
use sidecar_cli::commands::{FileOutput, run_file, run_metadata, run_terms};
use sidecar_cli::config::Settings;
use sidecar_ingest::{DataFormat, IngestError};
use tempfile::TempDir;

fn pinned_settings() -> Settings {
    let mut settings = Settings::default();
    settings.metadata.creation_date = NaiveDate::from_ymd_opt(2024, 5, 1);
    settings
}

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("parse arguments")
}

fn file_args(args: &[&str]) -> FileArgs {
    match parse(args).command {
        Command::Csv(file) | Command::Json(file) => file,
        _ => panic!("expected a single-file command"),
    }
}

fn metadata_args(args: &[&str]) -> MetadataArgs {
    match parse(args).command {
        Command::Metadata(metadata) => metadata,
        _ => panic!("expected metadata command"),
    }
}

fn terms_args(args: &[&str]) -> TermsArgs {
    match parse(args).command {
        Command::Terms(terms) => terms,
        _ => panic!("expected terms command"),
    }
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("utf-8 temp path")
}

#[test]
fn csv_stdout_renders_without_writing() {
    let dir = TempDir::new().unwrap();
    let csv = dir.path().join("people.csv");
    fs::write(&csv, "name,val\na,1\nb,2\n").unwrap();

    let args = file_args(&["sidecar", "csv", path_str(&csv), "--stdout"]);
    let FileOutput::Rendered(text) = run_file(&args, DataFormat::Csv, &pinned_settings()).unwrap()
    else {
        panic!("expected rendered output");
    };

    assert!(text.starts_with("{\n    \"file_name\": \"people.csv\","));
    assert!(text.ends_with("}\n"));
    assert!(!dir.path().join("people_metadata.json").exists());

    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    insta::assert_json_snapshot!(value, @r#"
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
fn json_sidecar_written_alongside_source() {
    let dir = TempDir::new().unwrap();
    let json = dir.path().join("orders.json");
    fs::write(&json, r#"[{"id": 1, "total": 9.5}, {"id": 2}]"#).unwrap();

    let args = file_args(&["sidecar", "json", path_str(&json)]);
    let FileOutput::Written(output) =
        run_file(&args, DataFormat::Json, &pinned_settings()).unwrap()
    else {
        panic!("expected a written sidecar");
    };

    assert_eq!(output.path, dir.path().join("orders_metadata.json"));
    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output.path).unwrap()).unwrap();
    assert_eq!(written["number_of_records"], 2);
    assert_eq!(written["columns"][1]["description"], "Description of total");
}

#[test]
fn settings_output_dir_and_placeholders_apply() {
    let data = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    let csv = data.path().join("sales.csv");
    fs::write(&csv, "region,amount\nnorth,10\n").unwrap();

    let mut settings = pinned_settings();
    settings.metadata.source = "Finance export".to_string();
    settings.metadata.output_dir = Some(out.path().to_path_buf());

    let args = file_args(&["sidecar", "csv", path_str(&csv)]);
    run_file(&args, DataFormat::Csv, &settings).unwrap();

    let written = fs::read_to_string(out.path().join("sales_metadata.json")).unwrap();
    assert!(written.contains("\"source\": \"Finance export\""));
    assert!(!data.path().join("sales_metadata.json").exists());
}

#[test]
fn invalid_json_shape_is_reported() {
    let dir = TempDir::new().unwrap();
    let json = dir.path().join("config.json");
    fs::write(&json, r#"{"not": "an array"}"#).unwrap();

    let args = file_args(&["sidecar", "json", path_str(&json)]);
    let error = run_file(&args, DataFormat::Json, &pinned_settings()).unwrap_err();

    assert!(format!("{error:#}").contains("Expected an array of objects"));
    assert!(!dir.path().join("config_metadata.json").exists());
}

#[test]
fn metadata_batch_continues_past_failures() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.csv"), "x,y\n1,2\n").unwrap();
    fs::write(dir.path().join("b.json"), r#"[{"k": true}]"#).unwrap();
    fs::write(dir.path().join("c.json"), "[1, 2]").unwrap();
    fs::write(dir.path().join("readme.txt"), "ignored").unwrap();

    let args = metadata_args(&["sidecar", "metadata", path_str(dir.path())]);
    let run = run_metadata(&args, &pinned_settings()).unwrap();

    let sources: Vec<_> = run
        .generated
        .iter()
        .map(|item| item.output.record.file_name.as_str())
        .collect();
    assert_eq!(sources, vec!["a.csv", "b.json"]);
    assert!(run.has_failures());
    assert!(matches!(
        run.failures[0].1,
        IngestError::UnsupportedJsonShape { .. }
    ));
    assert!(dir.path().join("a_metadata.json").exists());
    assert!(!dir.path().join("c_metadata.json").exists());

    // A second run ignores the sidecars written by the first.
    let rerun = run_metadata(&args, &pinned_settings()).unwrap();
    assert_eq!(rerun.generated.len(), 2);
}

#[test]
fn metadata_rejects_unknown_extension() {
    let dir = TempDir::new().unwrap();
    let txt = dir.path().join("notes.txt");
    fs::write(&txt, "hello").unwrap();

    let args = metadata_args(&["sidecar", "metadata", path_str(&txt)]);
    let run = run_metadata(&args, &pinned_settings()).unwrap();

    assert!(run.generated.is_empty());
    assert!(matches!(
        run.failures[0].1,
        IngestError::UnsupportedFormat { .. }
    ));
}

#[test]
fn terms_skips_unknown_dependencies() {
    let dir = TempDir::new().unwrap();
    let manifest = dir.path().join("pyproject.toml");
    fs::write(
        &manifest,
        "[tool.poetry.dependencies]\npython = \"^3.11\"\npandas = \"^2\"\nnot-installed = \"1\"\n\n[tool.poetry.dev-dependencies]\npytest = \"^8\"\n",
    )
    .unwrap();
    let catalogs = dir.path().join("catalogs");
    fs::create_dir(&catalogs).unwrap();
    fs::write(
        catalogs.join("pandas.json"),
        r#"{"symbols": [{"name": "DataFrame", "kind": "type", "members": ["merge", "_constructor"]}]}"#,
    )
    .unwrap();
    fs::write(
        catalogs.join("pytest.json"),
        r#"{"symbols": [{"name": "fixture", "kind": "function"}, {"name": "_pytest"}]}"#,
    )
    .unwrap();
    let output = dir.path().join("words.txt");
    let empty_root = dir.path().join("registry");
    fs::create_dir(&empty_root).unwrap();

    let args = terms_args(&[
        "sidecar",
        "terms",
        "--manifest",
        path_str(&manifest),
        "--output",
        path_str(&output),
        "--catalog-dir",
        path_str(&catalogs),
        "--source-root",
        path_str(&empty_root),
    ]);
    let run = run_terms(&args, &Settings::default()).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "DataFrame\nfixture\nmerge\n"
    );
    assert_eq!(run.report.loaded().collect::<Vec<_>>(), vec!["pandas", "pytest"]);
    assert_eq!(
        run.report.skipped().map(|(name, _)| name).collect::<Vec<_>>(),
        vec!["not-installed"]
    );
}

#[test]
fn terms_missing_manifest_is_fatal() {
    let dir = TempDir::new().unwrap();
    let args = terms_args(&[
        "sidecar",
        "terms",
        "--manifest",
        path_str(&dir.path().join("pyproject.toml")),
        "--output",
        path_str(&dir.path().join("words.txt")),
    ]);

    let error = run_terms(&args, &Settings::default()).unwrap_err();

    assert!(format!("{error:#}").contains("failed to read manifest"));
    assert!(!dir.path().join("words.txt").exists());
}

#[test]
fn stdout_conflicts_with_output_dir() {
    let result = Cli::try_parse_from(["sidecar", "csv", "a.csv", "--stdout", "--output-dir", "out"]);
    assert!(result.is_err());
}
