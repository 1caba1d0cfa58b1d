use indexmap::IndexMap;

use datasmith_core::{
    Definition, Error, FieldDef, FieldType, ForeignKeyRef, SchemaInfo, TableDef,
    validate_definition,
};

fn definition_with_tables(tables: IndexMap<String, TableDef>) -> Definition {
    Definition {
        schema_info: SchemaInfo {
            name: "test".to_string(),
            version: "1".to_string(),
            description: String::new(),
            locale: "he_IL".to_string(),
            source: None,
            created: None,
        },
        tables,
        generation_settings: None,
    }
}

fn table_with_fields(fields: IndexMap<String, FieldDef>) -> TableDef {
    TableDef {
        description: String::new(),
        source_schema: None,
        primary_key: None,
        foreign_keys: Default::default(),
        fields,
    }
}

#[test]
fn rejects_empty_definition() {
    let definition = definition_with_tables(IndexMap::new());
    let result = validate_definition(&definition);
    assert!(matches!(result, Err(Error::InvalidSchema(_))));
}

#[test]
fn rejects_missing_primary_key_field() {
    let mut fields = IndexMap::new();
    fields.insert("name".to_string(), FieldDef::new(FieldType::Text));
    let mut table = table_with_fields(fields);
    table.primary_key = Some("missing".to_string());

    let mut tables = IndexMap::new();
    tables.insert("users".to_string(), table);

    let result = validate_definition(&definition_with_tables(tables));
    assert!(matches!(result, Err(Error::InvalidSchema(_))));
}

#[test]
fn rejects_dangling_foreign_key() {
    let mut fields = IndexMap::new();
    fields.insert("owner_id".to_string(), FieldDef::new(FieldType::Text));
    let mut table = table_with_fields(fields);
    table.foreign_keys.insert(
        "owner_id".to_string(),
        ForeignKeyRef {
            table: "users".to_string(),
            field: "israeli_id".to_string(),
        },
    );

    let mut tables = IndexMap::new();
    tables.insert("accounts".to_string(), table);

    let result = validate_definition(&definition_with_tables(tables));
    assert!(matches!(result, Err(Error::InvalidSchema(_))));
}

#[test]
fn rejects_inverted_numeric_bounds() {
    let mut field = FieldDef::new(FieldType::Integer);
    field.constraints.min = Some(10.0);
    field.constraints.max = Some(1.0);

    let mut fields = IndexMap::new();
    fields.insert("amount".to_string(), field);
    let mut tables = IndexMap::new();
    tables.insert("transactions".to_string(), table_with_fields(fields));

    let result = validate_definition(&definition_with_tables(tables));
    assert!(matches!(result, Err(Error::InvalidSchema(_))));
}

#[test]
fn rejects_empty_choice_set() {
    let mut field = FieldDef::new(FieldType::Choice);
    field.constraints.choices = Some(Vec::new());

    let mut fields = IndexMap::new();
    fields.insert("status".to_string(), field);
    let mut tables = IndexMap::new();
    tables.insert("cards".to_string(), table_with_fields(fields));

    let result = validate_definition(&definition_with_tables(tables));
    assert!(matches!(result, Err(Error::InvalidSchema(_))));
}

#[test]
fn accepts_consistent_definition() {
    let mut id_field = FieldDef::new(FieldType::Text);
    id_field.constraints.max_length = Some(9);

    let mut amount = FieldDef::new(FieldType::Decimal);
    amount.constraints.min = Some(0.0);
    amount.constraints.max = Some(1000.0);

    let mut fields = IndexMap::new();
    fields.insert("israeli_id".to_string(), id_field);
    fields.insert("amount".to_string(), amount);
    let mut table = table_with_fields(fields);
    table.primary_key = Some("israeli_id".to_string());

    let mut tables = IndexMap::new();
    tables.insert("payments".to_string(), table);

    assert!(validate_definition(&definition_with_tables(tables)).is_ok());
}
