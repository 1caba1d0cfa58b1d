use chrono::{NaiveDate, NaiveDateTime};

/// Generated value for a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    Timestamp(NaiveDateTime),
}

impl GeneratedValue {
    pub fn is_null(&self) -> bool {
        matches!(self, GeneratedValue::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            GeneratedValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            GeneratedValue::Int(value) => Some(*value as f64),
            GeneratedValue::Float(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            GeneratedValue::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Textual form used for storage of temporal values and for display.
    pub fn to_text(&self) -> String {
        match self {
            GeneratedValue::Null => String::new(),
            GeneratedValue::Bool(value) => value.to_string(),
            GeneratedValue::Int(value) => value.to_string(),
            GeneratedValue::Float(value) => value.to_string(),
            GeneratedValue::Text(value) => value.clone(),
            GeneratedValue::Date(value) => value.format("%Y-%m-%d").to_string(),
            GeneratedValue::Timestamp(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }
}
