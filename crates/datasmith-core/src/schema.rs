use std::collections::BTreeMap;

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{Constraints, FieldType, GenerationHints};
use crate::{DEFAULT_LOCALE, DEFAULT_STRATEGY};

/// Top-level translated schema consumed by generation.
///
/// Table order is meaningful: the materializer creates and populates tables
/// in the order they appear here.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct Definition {
    pub schema_info: SchemaInfo,
    pub tables: IndexMap<String, TableDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_settings: Option<GenerationSettings>,
}

impl Definition {
    /// Effective generation settings, falling back to the defaults.
    pub fn settings(&self) -> GenerationSettings {
        self.generation_settings.clone().unwrap_or_default()
    }
}

/// Descriptive metadata about a Definition.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SchemaInfo {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_locale")]
    pub locale: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

/// Run-level generation settings carried inside a Definition.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct GenerationSettings {
    /// Tag selecting the generation strategy; unsupported tags are rejected,
    /// never silently downgraded.
    #[serde(default = "default_strategy")]
    pub strategy: String,
    #[serde(default = "default_records")]
    pub default_records_per_table: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            default_records_per_table: default_records(),
            locale: None,
            seed: None,
        }
    }
}

/// A single destination table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct TableDef {
    #[serde(default)]
    pub description: String,
    /// Name of the source schema entry this table was translated from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_schema: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<String>,
    /// Declared references, recorded as metadata; not enforced by the store.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub foreign_keys: BTreeMap<String, ForeignKeyRef>,
    pub fields: IndexMap<String, FieldDef>,
}

/// Target of a declared foreign key.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
pub struct ForeignKeyRef {
    pub table: String,
    pub field: String,
}

/// A single field within a table.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FieldDef {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub constraints: Constraints,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation: Option<GenerationHints>,
    /// Source-language (Hebrew) property name, preserved for display only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl FieldDef {
    /// Shorthand for a plain field of the given type with no constraints.
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            description: String::new(),
            required: false,
            constraints: Constraints::default(),
            generation: None,
            alt_name: None,
            display_name: None,
        }
    }
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_strategy() -> String {
    DEFAULT_STRATEGY.to_string()
}

fn default_records() -> u64 {
    1000
}
