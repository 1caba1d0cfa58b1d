//! Schema translation for Datasmith.
//!
//! Converts Swagger/OpenAPI-like documents into the internal Definition
//! format: table-name derivation, type mapping, constraint carry-over,
//! primary-key inference and per-field generation hints.

pub mod convert;
pub mod errors;
pub mod files;
pub mod mapper;
pub mod swagger;

pub use convert::{ConversionReport, SchemaTranslator, SUPPORTED_STRATEGIES};
pub use errors::TranslateError;
pub use files::{load_definition, load_swagger_file, save_definition};
pub use mapper::FieldNameMapper;
pub use swagger::{
    banking_sample_document, Components, DocumentInfo, Property, SchemaObject, SwaggerDocument,
};
