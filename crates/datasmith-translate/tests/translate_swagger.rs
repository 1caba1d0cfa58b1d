use serde_json::json;

use datasmith_core::{FieldType, GeneratorKind};
use datasmith_translate::{
    banking_sample_document, load_definition, load_swagger_file, save_definition,
    SchemaTranslator, SwaggerDocument, TranslateError,
};

fn document_from(value: serde_json::Value) -> SwaggerDocument {
    serde_json::from_value(value).expect("build document")
}

#[test]
fn translates_every_object_schema_into_a_table() {
    let document = banking_sample_document();
    let mut translator = SchemaTranslator::new();
    let definition = translator.translate(&document, "random").expect("translate");

    assert_eq!(definition.tables.len(), 2);
    assert!(definition.tables.contains_key("users"));
    assert!(definition.tables.contains_key("credit_cards"));

    // Field counts match the source property counts.
    assert_eq!(definition.tables["users"].fields.len(), 4);
    assert_eq!(definition.tables["credit_cards"].fields.len(), 4);

    let report = translator.report();
    assert_eq!(report.total_conversions, 2);
    assert!(report.conversions[0].contains("User -> users"));
}

#[test]
fn maps_hebrew_property_names_and_keeps_the_originals() {
    let document = banking_sample_document();
    let definition = SchemaTranslator::new()
        .translate(&document, "random")
        .expect("translate");

    let users = &definition.tables["users"];
    let id_field = &users.fields["israeli_id"];
    assert_eq!(id_field.alt_name.as_deref(), Some("תעודת_זהות"));
    assert_eq!(id_field.display_name.as_deref(), Some("Israeli ID"));
    assert_eq!(id_field.constraints.pattern.as_deref(), Some("^[0-9]{9}$"));
    assert!(id_field.required);
}

#[test]
fn primary_key_inference_follows_the_priority_list() {
    let document = banking_sample_document();
    let definition = SchemaTranslator::new()
        .translate(&document, "random")
        .expect("translate");

    // תעודת_זהות outranks everything and is recorded under its English name.
    assert_eq!(
        definition.tables["users"].primary_key.as_deref(),
        Some("israeli_id")
    );

    let document = document_from(json!({
        "info": {"title": "Shop", "version": "1"},
        "components": {"schemas": {
            "Product": {
                "type": "object",
                "properties": {
                    "label": {"type": "string"},
                    "price": {"type": "number"}
                }
            }
        }}
    }));
    let definition = SchemaTranslator::new()
        .translate(&document, "random")
        .expect("translate");
    // No candidate matches: first declared property wins.
    assert_eq!(
        definition.tables["products"].primary_key.as_deref(),
        Some("label")
    );
}

#[test]
fn enum_forces_choice_type_and_carries_the_choice_set() {
    let document = banking_sample_document();
    let definition = SchemaTranslator::new()
        .translate(&document, "random")
        .expect("translate");

    let card_type = &definition.tables["credit_cards"].fields["card_type"];
    assert_eq!(card_type.field_type, FieldType::Choice);
    let choices = card_type.constraints.choices.as_ref().expect("choices");
    assert_eq!(choices.len(), 3);
    assert_eq!(choices[0], json!("ויזה"));
}

#[test]
fn numeric_bounds_and_formats_carry_over() {
    let document = document_from(json!({
        "info": {"title": "Billing", "version": "2"},
        "components": {"schemas": {
            "Invoice": {
                "type": "object",
                "properties": {
                    "total": {"type": "number", "minimum": 0, "maximum": 5000},
                    "issued_on": {"type": "string", "format": "date"},
                    "updated": {"type": "string", "format": "date-time"},
                    "contact": {"type": "string", "format": "email", "maxLength": 100}
                }
            }
        }}
    }));
    let definition = SchemaTranslator::new()
        .translate(&document, "random")
        .expect("translate");

    let invoice = &definition.tables["invoices"];
    let total = &invoice.fields["total"];
    assert_eq!(total.field_type, FieldType::Decimal);
    assert_eq!(total.constraints.min, Some(0.0));
    assert_eq!(total.constraints.max, Some(5000.0));
    assert_eq!(invoice.fields["issued_on"].field_type, FieldType::Date);
    assert_eq!(invoice.fields["updated"].field_type, FieldType::DateTime);

    let contact = &invoice.fields["contact"];
    assert_eq!(contact.constraints.max_length, Some(100));
    let hints = contact.generation.as_ref().expect("email hint");
    assert_eq!(hints.generator, Some(GeneratorKind::Email));
}

#[test]
fn semantic_hints_attach_by_name_in_either_language() {
    let document = banking_sample_document();
    let definition = SchemaTranslator::new()
        .translate(&document, "random")
        .expect("translate");

    let users = &definition.tables["users"];
    let first = users.fields["first_name"].generation.as_ref().expect("hint");
    assert_eq!(first.generator, Some(GeneratorKind::FirstName));
    assert_eq!(first.locale.as_deref(), Some("he_IL"));

    let phone = users.fields["phone"].generation.as_ref().expect("hint");
    assert_eq!(phone.generator, Some(GeneratorKind::Phone));
}

#[test]
fn unknown_property_types_default_to_text() {
    let document = document_from(json!({
        "info": {"title": "Misc", "version": "1"},
        "components": {"schemas": {
            "Blob": {
                "type": "object",
                "properties": {
                    "payload": {"type": "array"}
                }
            }
        }}
    }));
    let definition = SchemaTranslator::new()
        .translate(&document, "random")
        .expect("translate");
    assert_eq!(
        definition.tables["blobs"].fields["payload"].field_type,
        FieldType::Text
    );
}

#[test]
fn rejects_unsupported_strategy_tags() {
    let document = banking_sample_document();
    let result = SchemaTranslator::new().translate(&document, "sdv");
    assert!(matches!(result, Err(TranslateError::UnsupportedStrategy(tag)) if tag == "sdv"));
}

#[test]
fn rejects_documents_without_schemas() {
    let document = document_from(json!({"info": {"title": "Empty", "version": "1"}}));
    let result = SchemaTranslator::new().translate(&document, "random");
    assert!(matches!(result, Err(TranslateError::InvalidDocument(_))));
}

#[test]
fn rejects_inconsistent_bounds_at_translation_time() {
    let document = document_from(json!({
        "info": {"title": "Broken", "version": "1"},
        "components": {"schemas": {
            "Item": {
                "type": "object",
                "properties": {
                    "count": {"type": "integer", "minimum": 100, "maximum": 1}
                }
            }
        }}
    }));
    let result = SchemaTranslator::new().translate(&document, "random");
    assert!(matches!(result, Err(TranslateError::Definition(_))));
}

#[test]
fn loads_yaml_documents_and_roundtrips_definitions() {
    let dir = tempfile::tempdir().expect("tempdir");

    let yaml_path = dir.path().join("schema.yaml");
    std::fs::write(
        &yaml_path,
        concat!(
            "info:\n",
            "  title: Library\n",
            "  version: '1.0'\n",
            "components:\n",
            "  schemas:\n",
            "    Book:\n",
            "      type: object\n",
            "      properties:\n",
            "        title:\n",
            "          type: string\n",
            "          maxLength: 80\n",
            "        pages:\n",
            "          type: integer\n",
            "          minimum: 1\n",
            "          maximum: 2000\n",
        ),
    )
    .expect("write yaml");

    let document = load_swagger_file(&yaml_path).expect("load yaml");
    let definition = SchemaTranslator::new()
        .translate(&document, "random")
        .expect("translate");
    assert_eq!(definition.tables["books"].fields.len(), 2);

    let definition_path = dir.path().join("definitions/library.json");
    save_definition(&definition, &definition_path).expect("save definition");
    let loaded = load_definition(&definition_path).expect("load definition");
    assert_eq!(loaded.tables.len(), definition.tables.len());
    assert_eq!(loaded.schema_info.name, "Library");
}

#[test]
fn loading_a_definition_without_tables_fails_fast() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("empty.json");
    std::fs::write(
        &path,
        r#"{"schema_info": {"name": "x", "version": "1"}, "tables": {}}"#,
    )
    .expect("write definition");

    let result = load_definition(&path);
    assert!(matches!(result, Err(TranslateError::Definition(_))));
}
