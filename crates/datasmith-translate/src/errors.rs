use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted while translating an external schema into a Definition.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("schema file not found: {0}")]
    NotFound(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// The document is missing a required structural section.
    #[error("invalid schema document: {0}")]
    InvalidDocument(String),
    #[error(transparent)]
    Definition(#[from] datasmith_core::Error),
    #[error("unsupported strategy: {0}")]
    UnsupportedStrategy(String),
}
