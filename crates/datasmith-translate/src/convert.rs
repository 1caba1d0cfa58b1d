use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use datasmith_core::{
    match_field_name, validate_definition, Constraints, Definition, FieldDef, FieldType,
    GenerationHints, GenerationSettings, GeneratorKind, SchemaInfo, TableDef, DEFAULT_LOCALE,
};

use crate::errors::TranslateError;
use crate::mapper::FieldNameMapper;
use crate::swagger::{Property, SchemaObject, SwaggerDocument};

/// Strategy tags the generation engine can actually serve.
pub const SUPPORTED_STRATEGIES: &[&str] = &["random"];

/// Schema-name to table-name lookup; unknown names get suffix-pluralized.
const TABLE_NAMES: &[(&str, &str)] = &[
    ("User", "users"),
    ("Account", "accounts"),
    ("CreditCard", "credit_cards"),
    ("Transaction", "transactions"),
    ("Customer", "customers"),
    ("Product", "products"),
    ("Order", "orders"),
];

/// Priority list for primary-key inference over source property names.
const PRIMARY_KEY_CANDIDATES: &[&str] = &[
    "תעודת_זהות",
    "id",
    "uuid",
    "מספר_כרטיס",
    "מספר_חשבון",
    "customer_id",
    "user_id",
    "account_number",
    "card_number",
];

/// Converts Swagger/OpenAPI-like documents into the Definition format.
pub struct SchemaTranslator {
    mapper: FieldNameMapper,
    conversions: Vec<String>,
}

impl SchemaTranslator {
    pub fn new() -> Self {
        Self {
            mapper: FieldNameMapper::new(),
            conversions: Vec::new(),
        }
    }

    /// Translate a document into a Definition for the given strategy tag.
    ///
    /// Fails fast on a missing `components.schemas` section, on an
    /// unsupported strategy tag, and on internally inconsistent constraint
    /// bounds; unknown property types degrade to text with a warning.
    pub fn translate(
        &mut self,
        document: &SwaggerDocument,
        strategy: &str,
    ) -> Result<Definition, TranslateError> {
        if !SUPPORTED_STRATEGIES.contains(&strategy) {
            return Err(TranslateError::UnsupportedStrategy(strategy.to_string()));
        }

        let schemas = document
            .components
            .as_ref()
            .filter(|components| !components.schemas.is_empty())
            .map(|components| &components.schemas)
            .ok_or_else(|| {
                TranslateError::InvalidDocument(
                    "missing components.schemas section".to_string(),
                )
            })?;

        let mut tables = IndexMap::new();
        for (schema_name, schema_def) in schemas {
            if schema_def.object_type.as_deref() != Some("object") {
                continue;
            }

            let table_name = table_name_for(schema_name);
            let table = self.convert_schema(schema_name, schema_def);
            tables.insert(table_name.clone(), table);
            self.conversions.push(format!("{schema_name} -> {table_name}"));
        }

        let definition = Definition {
            schema_info: SchemaInfo {
                name: document
                    .info
                    .title
                    .clone()
                    .unwrap_or_else(|| "Converted Schema".to_string()),
                version: document
                    .info
                    .version
                    .clone()
                    .unwrap_or_else(|| "1.0.0".to_string()),
                description: document
                    .info
                    .description
                    .clone()
                    .unwrap_or_else(|| "Converted from schema document".to_string()),
                locale: DEFAULT_LOCALE.to_string(),
                source: Some("swagger_conversion".to_string()),
                created: Some(chrono::Utc::now().to_rfc3339()),
            },
            tables,
            generation_settings: Some(GenerationSettings {
                strategy: strategy.to_string(),
                ..GenerationSettings::default()
            }),
        };

        validate_definition(&definition)?;

        info!(
            tables = definition.tables.len(),
            strategy, "schema translation completed"
        );
        Ok(definition)
    }

    /// One line per converted schema entry, in conversion order.
    pub fn report(&self) -> ConversionReport {
        ConversionReport {
            timestamp: chrono::Utc::now().to_rfc3339(),
            total_conversions: self.conversions.len(),
            conversions: self.conversions.clone(),
        }
    }

    fn convert_schema(&self, schema_name: &str, schema_def: &SchemaObject) -> TableDef {
        let primary_key = infer_primary_key(schema_def)
            .map(|source_name| self.mapper.english_name(source_name).to_string());

        let mut fields = IndexMap::new();
        for (prop_name, property) in &schema_def.properties {
            let english = self.mapper.english_name(prop_name);
            let mut field = convert_property(
                schema_name,
                english,
                property,
                schema_def.required.iter().any(|name| name == prop_name),
            );
            field.generation = generation_hints(prop_name, english, property);
            if english != prop_name {
                field.alt_name = Some(prop_name.clone());
            }
            field.display_name = Some(self.mapper.display_name(english));
            fields.insert(english.to_string(), field);
        }

        TableDef {
            description: schema_def
                .description
                .clone()
                .unwrap_or_else(|| format!("Table for {schema_name}")),
            source_schema: Some(schema_name.to_string()),
            primary_key,
            foreign_keys: Default::default(),
            fields,
        }
    }
}

impl Default for SchemaTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary of one translation pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversionReport {
    pub timestamp: String,
    pub conversions: Vec<String>,
    pub total_conversions: usize,
}

fn table_name_for(schema_name: &str) -> String {
    for (name, table) in TABLE_NAMES {
        if *name == schema_name {
            return (*table).to_string();
        }
    }
    format!("{}s", schema_name.to_lowercase())
}

fn infer_primary_key(schema_def: &SchemaObject) -> Option<&str> {
    for candidate in PRIMARY_KEY_CANDIDATES {
        if schema_def.properties.contains_key(*candidate) {
            return Some(*candidate);
        }
    }
    schema_def.properties.keys().next().map(String::as_str)
}

fn convert_property(
    schema_name: &str,
    field_name: &str,
    property: &Property,
    required: bool,
) -> FieldDef {
    let field_type = if property.enum_values.is_some() {
        FieldType::Choice
    } else {
        map_property_type(schema_name, field_name, property)
    };

    let constraints = Constraints {
        min: property.minimum,
        max: property.maximum,
        min_length: property.min_length,
        max_length: property.max_length,
        choices: property.enum_values.clone(),
        pattern: property.pattern.clone(),
    };

    FieldDef {
        field_type,
        description: property.description.clone().unwrap_or_default(),
        required,
        constraints,
        generation: None,
        alt_name: None,
        display_name: None,
    }
}

fn map_property_type(schema_name: &str, field_name: &str, property: &Property) -> FieldType {
    match property.property_type.as_deref() {
        Some("string") | None => match property.format.as_deref() {
            Some("date") => FieldType::Date,
            Some("date-time") => FieldType::DateTime,
            _ => FieldType::Text,
        },
        Some("integer") => FieldType::Integer,
        Some("number") => FieldType::Decimal,
        Some("boolean") => FieldType::Boolean,
        Some(other) => {
            warn!(
                schema = schema_name,
                field = field_name,
                property_type = other,
                "unknown property type, defaulting to text"
            );
            FieldType::Text
        }
    }
}

/// Semantic hints attached at translation time; the resolver falls back to
/// the base type when none match.
fn generation_hints(
    source_name: &str,
    english_name: &str,
    property: &Property,
) -> Option<GenerationHints> {
    let semantic = match_field_name(source_name).or_else(|| match_field_name(english_name));
    if let Some(kind) = semantic {
        let localized = matches!(
            kind,
            GeneratorKind::NationalId
                | GeneratorKind::FirstName
                | GeneratorKind::LastName
                | GeneratorKind::Address
                | GeneratorKind::City
        );
        return Some(GenerationHints {
            generator: Some(kind),
            locale: localized.then(|| DEFAULT_LOCALE.to_string()),
            ..GenerationHints::default()
        });
    }

    if property.format.as_deref() == Some("email") {
        return Some(GenerationHints {
            generator: Some(GeneratorKind::Email),
            ..GenerationHints::default()
        });
    }

    None
}
