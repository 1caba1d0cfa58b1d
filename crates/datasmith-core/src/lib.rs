//! Core contracts and helpers for Datasmith.
//!
//! This crate defines the canonical Definition types consumed by the
//! translator, the generation engine, the materializer and the exporters,
//! plus validation helpers shared across the workspace.

pub mod error;
pub mod patterns;
pub mod schema;
pub mod types;
pub mod validation;

pub use error::{Error, Result};
pub use patterns::match_field_name;
pub use schema::{
    Definition, FieldDef, ForeignKeyRef, GenerationSettings, SchemaInfo, TableDef,
};
pub use types::{Constraints, FieldType, GenerationHints, GeneratorKind};
pub use validation::validate_definition;

/// Locale used when a Definition does not declare one.
pub const DEFAULT_LOCALE: &str = "he_IL";

/// Strategy tag resolved by the single built-in generation strategy.
pub const DEFAULT_STRATEGY: &str = "random";
