use crate::error::{Error, Result};
use crate::schema::Definition;
use crate::types::FieldType;

/// Validate internal consistency of a Definition.
///
/// This checks:
/// - at least one table with at least one field
/// - primary key fields exist
/// - foreign key fields and referenced targets exist
/// - constraint bounds are internally consistent (min <= max, etc.)
pub fn validate_definition(definition: &Definition) -> Result<()> {
    if definition.tables.is_empty() {
        return Err(Error::InvalidSchema(
            "definition has no tables".to_string(),
        ));
    }

    for (table_name, table) in &definition.tables {
        if table.fields.is_empty() {
            return Err(Error::InvalidSchema(format!(
                "table '{table_name}' has no fields"
            )));
        }

        if let Some(pk) = &table.primary_key {
            if !table.fields.contains_key(pk) {
                return Err(Error::InvalidSchema(format!(
                    "primary key field not found: {table_name}.{pk}"
                )));
            }
        }

        for (field_name, reference) in &table.foreign_keys {
            if !table.fields.contains_key(field_name) {
                return Err(Error::InvalidSchema(format!(
                    "foreign key field not found: {table_name}.{field_name}"
                )));
            }
            let referenced = definition.tables.get(&reference.table).ok_or_else(|| {
                Error::InvalidSchema(format!(
                    "referenced table not found: {}.{}",
                    reference.table, reference.field
                ))
            })?;
            if !referenced.fields.contains_key(&reference.field) {
                return Err(Error::InvalidSchema(format!(
                    "referenced field not found: {}.{}",
                    reference.table, reference.field
                )));
            }
        }

        for (field_name, field) in &table.fields {
            let constraints = &field.constraints;
            if let (Some(min), Some(max)) = (constraints.min, constraints.max) {
                if min > max {
                    return Err(Error::InvalidSchema(format!(
                        "inconsistent bounds on {table_name}.{field_name}: min {min} > max {max}"
                    )));
                }
            }
            if let (Some(min), Some(max)) = (constraints.min_length, constraints.max_length) {
                if min > max {
                    return Err(Error::InvalidSchema(format!(
                        "inconsistent length bounds on {table_name}.{field_name}: \
                         min_length {min} > max_length {max}"
                    )));
                }
            }
            if field.field_type == FieldType::Choice
                && constraints
                    .choices
                    .as_ref()
                    .is_some_and(|choices| choices.is_empty())
            {
                return Err(Error::InvalidSchema(format!(
                    "empty choice set on {table_name}.{field_name}"
                )));
            }
        }
    }

    Ok(())
}
