//! Tests for sidecar-model types.

use chrono::NaiveDate;
use sidecar_model::{
    ColumnDescriptor, DEFAULT_NOTES, DEFAULT_SOURCE, MetadataOptions, MetadataRecord, RecordShape,
};

fn fixed_options() -> MetadataOptions {
    MetadataOptions::new().with_creation_date(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())
}

#[test]
fn defaults_use_placeholders() {
    let options = MetadataOptions::default();
    assert_eq!(options.source, DEFAULT_SOURCE);
    assert_eq!(options.notes, DEFAULT_NOTES);
}

#[test]
fn record_round_trips_through_json() {
    let record = MetadataRecord::new(
        "orders.json",
        RecordShape::Records {
            number_of_records: 3,
        },
        vec![ColumnDescriptor::new("id", "int").with_description("Description of id")],
        &fixed_options().with_source("ERP export"),
    );
    let json = serde_json::to_string_pretty(&record).expect("serialize record");
    let round: MetadataRecord = serde_json::from_str(&json).expect("deserialize record");

    assert_eq!(round, record);
    assert_eq!(round.source, "ERP export");
    assert_eq!(round.column_names(), vec!["id"]);
}

#[test]
fn table_record_round_trips_through_json() {
    let record = MetadataRecord::new(
        "sales.csv",
        RecordShape::Table {
            number_of_rows: 10,
            number_of_columns: 2,
        },
        vec![
            ColumnDescriptor::new("region", "object"),
            ColumnDescriptor::new("amount", "float64"),
        ],
        &fixed_options(),
    );
    let json = serde_json::to_string(&record).expect("serialize record");
    let round: MetadataRecord = serde_json::from_str(&json).expect("deserialize record");

    assert_eq!(
        round.shape,
        RecordShape::Table {
            number_of_rows: 10,
            number_of_columns: 2
        }
    );
    assert_eq!(round.shape.len(), 10);
    assert!(round.preprocessing.is_empty());
}
