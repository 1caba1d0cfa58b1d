use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declared type of a Definition field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Text,
    Integer,
    Decimal,
    Date,
    #[serde(rename = "datetime")]
    DateTime,
    Boolean,
    Choice,
}

/// Closed set of value generators a field can bind to.
///
/// Semantic kinds past `Choice` carry domain formats (checksummed national
/// id, prefixed phone numbers, Luhn-valid card numbers) and participate in
/// run-scoped uniqueness tracking where noted by the generation engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    Text,
    Integer,
    Decimal,
    Date,
    #[serde(rename = "datetime")]
    DateTime,
    Boolean,
    Choice,
    Email,
    Phone,
    NationalId,
    CreditCard,
    AccountNumber,
    FirstName,
    LastName,
    Address,
    City,
}

impl From<FieldType> for GeneratorKind {
    fn from(field_type: FieldType) -> Self {
        match field_type {
            FieldType::Text => GeneratorKind::Text,
            FieldType::Integer => GeneratorKind::Integer,
            FieldType::Decimal => GeneratorKind::Decimal,
            FieldType::Date => GeneratorKind::Date,
            FieldType::DateTime => GeneratorKind::DateTime,
            FieldType::Boolean => GeneratorKind::Boolean,
            FieldType::Choice => GeneratorKind::Choice,
        }
    }
}

/// Type-dependent constraints carried over from the source schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Constraints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    /// Declared choice set; forces the field type to `choice`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Per-field generation hints attached by the translator or by hand.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GenerationHints {
    /// Explicit generator override; wins over name-pattern resolution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<GeneratorKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Rounding precision for decimal values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,
    /// Size of the trailing window for date/datetime values, in days.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days_back: Option<i64>,
}
