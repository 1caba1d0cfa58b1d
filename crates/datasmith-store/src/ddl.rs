use std::collections::BTreeMap;

use datasmith_core::{FieldDef, FieldType, ForeignKeyRef, TableDef};

/// Text columns above this declared length become unbounded TEXT.
const TEXT_THRESHOLD: usize = 1000;
const DEFAULT_TEXT_LENGTH: usize = 255;
const CHOICE_LENGTH: usize = 100;

/// One physical column derived from a Definition table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSpec {
    pub name: String,
    pub sql_type: String,
    pub primary_key: bool,
    pub autoincrement: bool,
    /// True for the injected surrogate key, which takes no generated value.
    pub synthesized: bool,
}

/// Map an internal field type to its storage column type.
pub fn sql_type_for(field: &FieldDef) -> String {
    match field.field_type {
        FieldType::Text => {
            let length = field.constraints.max_length.unwrap_or(DEFAULT_TEXT_LENGTH);
            if length > TEXT_THRESHOLD {
                "TEXT".to_string()
            } else {
                format!("VARCHAR({length})")
            }
        }
        FieldType::Integer => "INTEGER".to_string(),
        FieldType::Decimal => "REAL".to_string(),
        FieldType::Date => "DATE".to_string(),
        FieldType::DateTime => "DATETIME".to_string(),
        FieldType::Boolean => "BOOLEAN".to_string(),
        FieldType::Choice => format!("VARCHAR({CHOICE_LENGTH})"),
    }
}

/// Physical columns for a table, injecting an auto-increment `id` when no
/// primary key is declared.
pub fn column_specs(table: &TableDef) -> Vec<ColumnSpec> {
    let mut columns = Vec::with_capacity(table.fields.len() + 1);

    if table.primary_key.is_none() {
        columns.push(ColumnSpec {
            name: "id".to_string(),
            sql_type: "INTEGER".to_string(),
            primary_key: true,
            autoincrement: true,
            synthesized: true,
        });
    }

    for (field_name, field) in &table.fields {
        let primary_key = table.primary_key.as_deref() == Some(field_name.as_str());
        columns.push(ColumnSpec {
            name: field_name.clone(),
            sql_type: sql_type_for(field),
            primary_key,
            autoincrement: primary_key && field.field_type == FieldType::Integer,
            synthesized: false,
        });
    }

    columns
}

/// CREATE TABLE statement for the given columns and declared references.
///
/// Foreign keys are recorded as clauses only; the store never turns
/// enforcement on.
pub fn create_table_statement(
    table_name: &str,
    columns: &[ColumnSpec],
    foreign_keys: &BTreeMap<String, ForeignKeyRef>,
) -> String {
    let mut parts: Vec<String> = columns
        .iter()
        .map(|column| {
            let mut part = format!("{} {}", quote_ident(&column.name), column.sql_type);
            if column.primary_key {
                part.push_str(" PRIMARY KEY");
                if column.autoincrement {
                    part.push_str(" AUTOINCREMENT");
                }
            }
            part
        })
        .collect();

    for (field_name, reference) in foreign_keys {
        parts.push(format!(
            "FOREIGN KEY ({}) REFERENCES {} ({})",
            quote_ident(field_name),
            quote_ident(&reference.table),
            quote_ident(&reference.field)
        ));
    }

    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n\t{}\n)",
        quote_ident(table_name),
        parts.join(",\n\t")
    )
}

/// Double-quote an identifier, escaping embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
