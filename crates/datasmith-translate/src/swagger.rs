use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// A Swagger/OpenAPI-like document, reduced to the sections the translator
/// consumes. Unknown keys are ignored on input.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwaggerDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub openapi: Option<String>,
    #[serde(default)]
    pub info: DocumentInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaObject>,
}

/// One named object type under `components.schemas`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SchemaObject {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub object_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(default)]
    pub properties: IndexMap<String, Property>,
}

/// One property of a schema object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Property {
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

/// Built-in Israeli banking sample document used by demos and tests.
pub fn banking_sample_document() -> SwaggerDocument {
    let document = json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Israeli Banking API",
            "version": "1.0.0",
            "description": "Israeli banking system with Hebrew support"
        },
        "components": {
            "schemas": {
                "User": {
                    "type": "object",
                    "required": ["תעודת_זהות", "שם_פרטי", "שם_משפחה"],
                    "properties": {
                        "תעודת_זהות": {
                            "type": "string",
                            "description": "מספר תעודת זהות ישראלית",
                            "pattern": "^[0-9]{9}$"
                        },
                        "שם_פרטי": {
                            "type": "string",
                            "description": "שם פרטי בעברית",
                            "maxLength": 50
                        },
                        "שם_משפחה": {
                            "type": "string",
                            "description": "שם משפחה בעברית",
                            "maxLength": 50
                        },
                        "טלפון": {
                            "type": "string",
                            "description": "מספר טלפון ישראלי",
                            "pattern": "^05[0-9]-[0-9]{7}$"
                        }
                    }
                },
                "CreditCard": {
                    "type": "object",
                    "required": ["מספר_כרטיס", "תעודת_זהות", "סוג_כרטיס"],
                    "properties": {
                        "מספר_כרטיס": {
                            "type": "string",
                            "description": "מספר כרטיס האשראי",
                            "maxLength": 19
                        },
                        "תעודת_זהות": {
                            "type": "string",
                            "pattern": "^[0-9]{9}$"
                        },
                        "סוג_כרטיס": {
                            "type": "string",
                            "enum": ["ויזה", "מאסטרקארד", "ישראכרט"]
                        },
                        "מסגרת_אשראי": {
                            "type": "integer",
                            "minimum": 1000,
                            "maximum": 100000
                        }
                    }
                }
            }
        }
    });

    serde_json::from_value(document).unwrap_or_default()
}
