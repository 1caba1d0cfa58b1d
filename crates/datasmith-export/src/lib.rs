//! Export surface for Datasmith.
//!
//! Serializes materialized tables into per-format subdirectories: tabular
//! CSV, structured JSON, XLSX workbooks and SQL scripts. Failures are
//! isolated per table and per format and reported, never propagated across
//! sibling exports.

pub mod errors;
pub mod formats;
pub mod manager;
pub mod model;

pub use errors::ExportError;
pub use formats::sql_value_literal;
pub use manager::ExportManager;
pub use model::{ExportFormat, ExportReport, FormatOutcome};
