use datasmith_core::{Constraints, Definition, GeneratorKind, TableDef};

use crate::resolve::resolve_kind;

/// A field with its generator kind resolved for one run.
#[derive(Debug, Clone)]
pub struct BoundField {
    pub name: String,
    pub kind: GeneratorKind,
    pub constraints: Constraints,
    pub locale: String,
    /// Rounding precision for decimal values.
    pub decimals: u32,
    /// Trailing window for date/datetime values, in days.
    pub days_back: i64,
}

/// A table with every field bound to a generator kind.
///
/// Built fresh per run from the Definition and never persisted.
#[derive(Debug, Clone)]
pub struct BoundTable {
    pub name: String,
    pub primary_key: Option<String>,
    pub fields: Vec<BoundField>,
}

/// Bind one table's fields, resolving per-field hints against the run
/// defaults.
pub fn bind_table(name: &str, table: &TableDef, default_locale: &str) -> BoundTable {
    let fields = table
        .fields
        .iter()
        .map(|(field_name, field)| {
            let hints = field.generation.as_ref();
            BoundField {
                name: field_name.clone(),
                kind: resolve_kind(field_name, field),
                constraints: field.constraints.clone(),
                locale: hints
                    .and_then(|hints| hints.locale.clone())
                    .unwrap_or_else(|| default_locale.to_string()),
                decimals: hints.and_then(|hints| hints.decimals).unwrap_or(2),
                days_back: hints.and_then(|hints| hints.days_back).unwrap_or(365),
            }
        })
        .collect();

    BoundTable {
        name: name.to_string(),
        primary_key: table.primary_key.clone(),
        fields,
    }
}

/// Bind every table of a Definition, preserving Definition order.
pub fn bind_definition(definition: &Definition) -> Vec<BoundTable> {
    let settings = definition.settings();
    let default_locale = settings
        .locale
        .unwrap_or_else(|| definition.schema_info.locale.clone());

    definition
        .tables
        .iter()
        .map(|(name, table)| bind_table(name, table, &default_locale))
        .collect()
}
