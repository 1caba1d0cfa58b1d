use indexmap::IndexMap;

use datasmith_core::{
    Definition, FieldDef, FieldType, GenerationSettings, SchemaInfo, TableDef,
};

fn sample_definition() -> Definition {
    let mut fields = IndexMap::new();
    fields.insert("israeli_id".to_string(), FieldDef::new(FieldType::Text));
    fields.insert("balance".to_string(), FieldDef::new(FieldType::Decimal));

    let mut tables = IndexMap::new();
    tables.insert(
        "accounts".to_string(),
        TableDef {
            description: "Bank accounts".to_string(),
            source_schema: Some("Account".to_string()),
            primary_key: Some("israeli_id".to_string()),
            foreign_keys: Default::default(),
            fields,
        },
    );

    Definition {
        schema_info: SchemaInfo {
            name: "Banking".to_string(),
            version: "1.0.0".to_string(),
            description: String::new(),
            locale: "he_IL".to_string(),
            source: None,
            created: None,
        },
        tables,
        generation_settings: Some(GenerationSettings::default()),
    }
}

#[test]
fn roundtrips_through_json() {
    let definition = sample_definition();
    let json = serde_json::to_string_pretty(&definition).expect("serialize definition");
    let parsed: Definition = serde_json::from_str(&json).expect("parse definition");

    assert_eq!(parsed.tables.len(), 1);
    let table = &parsed.tables["accounts"];
    assert_eq!(table.primary_key.as_deref(), Some("israeli_id"));
    assert_eq!(table.fields.len(), 2);
    assert_eq!(parsed.settings().strategy, "random");
    assert_eq!(parsed.settings().default_records_per_table, 1000);
}

#[test]
fn preserves_field_order() {
    let definition = sample_definition();
    let json = serde_json::to_string(&definition).expect("serialize definition");
    let parsed: Definition = serde_json::from_str(&json).expect("parse definition");

    let names: Vec<&str> = parsed.tables["accounts"]
        .fields
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(names, ["israeli_id", "balance"]);
}

#[test]
fn field_type_uses_datetime_spelling() {
    let json = serde_json::to_string(&FieldType::DateTime).expect("serialize type");
    assert_eq!(json, "\"datetime\"");
}

#[test]
fn settings_default_when_absent() {
    let json = r#"{
        "schema_info": {"name": "x", "version": "1"},
        "tables": {
            "items": {"fields": {"name": {"type": "text"}}}
        }
    }"#;
    let parsed: Definition = serde_json::from_str(json).expect("parse definition");
    assert!(parsed.generation_settings.is_none());
    assert_eq!(parsed.settings().strategy, "random");
    assert_eq!(parsed.schema_info.locale, "he_IL");
}
