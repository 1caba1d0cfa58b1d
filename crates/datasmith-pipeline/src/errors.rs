use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    LoadDefinition,
    PrepareStore,
    PrepareStrategy,
    BindGenerators,
    Generate,
    Export,
    Report,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::LoadDefinition => "load_definition",
            Stage::PrepareStore => "prepare_store",
            Stage::PrepareStrategy => "prepare_strategy",
            Stage::BindGenerators => "bind_generators",
            Stage::Generate => "generate",
            Stage::Export => "export",
            Stage::Report => "report",
        };
        f.write_str(name)
    }
}

/// Errors raised inside a single pipeline stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] datasmith_core::Error),
    #[error(transparent)]
    Translate(#[from] datasmith_translate::TranslateError),
    #[error(transparent)]
    Generate(#[from] datasmith_generate::GenerateError),
    #[error(transparent)]
    Store(#[from] datasmith_store::StoreError),
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Structured failure returned by the run-everything entry point: the
/// first failing stage plus the original error text. Later stages are
/// never invoked.
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("stage {stage} failed: {message}")]
pub struct PipelineFailure {
    pub stage: Stage,
    pub message: String,
}

impl PipelineFailure {
    pub fn new(stage: Stage, error: &PipelineError) -> Self {
        Self {
            stage,
            message: error.to_string(),
        }
    }
}
