use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::ExportError;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
    Sql,
}

impl ExportFormat {
    pub fn parse(name: &str) -> Result<Self, ExportError> {
        match name.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            "xlsx" | "excel" => Ok(ExportFormat::Xlsx),
            "sql" => Ok(ExportFormat::Sql),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }

    pub fn dir_name(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Sql => "sql",
        }
    }
}

/// Outcome of exporting all tables in one format.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormatOutcome {
    /// Written files, keyed by table name (plus `combined` entries).
    pub files: BTreeMap<String, String>,
    /// Per-table failures; sibling tables still export.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
    /// Format-level failure, when the format could not run at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub location: String,
    pub file_count: usize,
}

impl FormatOutcome {
    pub fn failed(location: String, message: String) -> Self {
        Self {
            error: Some(message),
            location,
            ..Self::default()
        }
    }
}

/// Export results keyed by format name.
pub type ExportReport = BTreeMap<String, FormatOutcome>;
