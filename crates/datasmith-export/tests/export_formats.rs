use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use datasmith_core::{FieldDef, FieldType, TableDef};
use datasmith_generate::{GeneratedValue, Row};
use datasmith_export::{sql_value_literal, ExportManager};
use datasmith_store::{Store, StoredValue};

fn people_table() -> TableDef {
    let mut name = FieldDef::new(FieldType::Text);
    name.constraints.max_length = Some(50);

    let mut fields = IndexMap::new();
    fields.insert("name".to_string(), name);
    fields.insert("age".to_string(), FieldDef::new(FieldType::Integer));
    fields.insert("note".to_string(), FieldDef::new(FieldType::Text));

    TableDef {
        description: String::new(),
        source_schema: None,
        primary_key: None,
        foreign_keys: Default::default(),
        fields,
    }
}

fn populated_store() -> Store {
    let mut store = Store::open(":memory:").expect("open store");
    let table = people_table();
    store.create_table("people", &table).expect("create table");

    let mut rows = Vec::new();
    let mut first = Row::new();
    first.insert(
        "name".to_string(),
        GeneratedValue::Text("O'Brien".to_string()),
    );
    first.insert("age".to_string(), GeneratedValue::Int(42));
    first.insert("note".to_string(), GeneratedValue::Null);
    rows.push(first);

    let mut second = Row::new();
    second.insert("name".to_string(), GeneratedValue::Text("כהן".to_string()));
    second.insert("age".to_string(), GeneratedValue::Int(7));
    second.insert(
        "note".to_string(),
        GeneratedValue::Text("vip".to_string()),
    );
    rows.push(second);

    store
        .insert_rows("people", &table, &rows)
        .expect("insert rows");
    store
}

#[test]
fn sql_export_quotes_escapes_and_keeps_nulls_bare() {
    let store = populated_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = ExportManager::new(dir.path().join("exports"));

    let report = manager.export(&store, &["sql".to_string()]);
    let outcome = &report["sql"];
    assert!(outcome.errors.is_empty());
    assert_eq!(outcome.file_count, 1);

    let script = fs::read_to_string(dir.path().join("exports/sql/people.sql")).expect("script");
    assert!(script.starts_with("CREATE TABLE"));
    assert!(script.contains("'O''Brien'"));
    assert!(script.contains(", 42,"));
    assert!(script.contains("NULL"));
}

#[test]
fn sql_value_literals_follow_the_formatting_rules() {
    assert_eq!(sql_value_literal(&StoredValue::Null), "NULL");
    assert_eq!(sql_value_literal(&StoredValue::Int(42)), "42");
    assert_eq!(sql_value_literal(&StoredValue::Real(1.5)), "1.5");
    assert_eq!(
        sql_value_literal(&StoredValue::Text("O'Brien".to_string())),
        "'O''Brien'"
    );
    assert_eq!(
        sql_value_literal(&StoredValue::Text("2025-01-01".to_string())),
        "'2025-01-01'"
    );
}

#[test]
fn csv_files_carry_a_byte_order_marker_and_headers() {
    let store = populated_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = ExportManager::new(dir.path().join("exports"));

    let report = manager.export(&store, &["csv".to_string()]);
    assert!(report["csv"].errors.is_empty());

    let bytes = fs::read(dir.path().join("exports/csv/people.csv")).expect("csv file");
    assert_eq!(&bytes[..3], [0xEF, 0xBB, 0xBF]);
    let text = String::from_utf8(bytes[3..].to_vec()).expect("utf-8");
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some("id,name,age,note"));
    assert_eq!(lines.clone().count(), 2);
    assert!(text.contains("כהן"));
}

#[test]
fn csv_and_json_row_counts_agree() {
    let store = populated_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = ExportManager::new(dir.path().join("exports"));

    let report = manager.export(&store, &["csv".to_string(), "json".to_string()]);
    assert!(report["csv"].errors.is_empty());
    assert!(report["json"].errors.is_empty());

    let csv_text =
        fs::read_to_string(dir.path().join("exports/csv/people.csv")).expect("csv file");
    let csv_rows = csv_text.lines().count() - 1;

    let json_text =
        fs::read_to_string(dir.path().join("exports/json/people.json")).expect("json file");
    let records: serde_json::Value = serde_json::from_str(&json_text).expect("records");
    let json_rows = records.as_array().expect("array").len();

    assert_eq!(csv_rows, json_rows);

    // The combined file holds every table keyed by name.
    let combined = fs::read_to_string(dir.path().join("exports/json/combined_data.json"))
        .expect("combined file");
    let combined: serde_json::Value = serde_json::from_str(&combined).expect("combined json");
    assert!(combined.get("people").is_some());
}

#[test]
fn json_preserves_null_and_numeric_values() {
    let store = populated_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = ExportManager::new(dir.path().join("exports"));
    manager.export(&store, &["json".to_string()]);

    let text =
        fs::read_to_string(dir.path().join("exports/json/people.json")).expect("json file");
    let records: serde_json::Value = serde_json::from_str(&text).expect("records");
    let first = &records[0];
    assert_eq!(first["age"], serde_json::json!(42));
    assert!(first["note"].is_null());
}

#[test]
fn xlsx_export_writes_combined_and_standalone_workbooks() {
    let store = populated_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = ExportManager::new(dir.path().join("exports"));

    let report = manager.export(&store, &["xlsx".to_string()]);
    let outcome = &report["xlsx"];
    assert!(outcome.errors.is_empty());
    assert!(Path::new(&outcome.files["combined"]).exists());
    assert!(Path::new(&outcome.files["people"]).exists());
}

#[test]
fn unsupported_formats_are_reported_not_fatal() {
    let store = populated_store();
    let dir = tempfile::tempdir().expect("tempdir");
    let manager = ExportManager::new(dir.path().join("exports"));

    let report = manager.export(&store, &["parquet".to_string(), "csv".to_string()]);
    assert!(report["parquet"].error.as_deref().unwrap_or("").contains("not supported"));
    assert_eq!(report["parquet"].file_count, 0);
    // The sibling format still exported.
    assert_eq!(report["csv"].file_count, 1);
}
