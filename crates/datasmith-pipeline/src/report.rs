use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use datasmith_export::ExportReport;
use datasmith_store::TableStats;

use crate::errors::{PipelineError, PipelineFailure};

/// Terminal artifact of one run, written once to the working directory and
/// never mutated afterwards. Produced for failed runs too, carrying the
/// failing stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: String,
    pub timestamp: String,
    pub status: String,
    pub definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definition_file: Option<String>,
    pub strategy: String,
    pub store: String,
    pub work_dir: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub records_per_table: Option<u64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<TableStats>,
    #[serde(default, skip_serializing_if = "ExportReport::is_empty")]
    pub exports: ExportReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<PipelineFailure>,
}

impl RunReport {
    /// Write the report into the working directory, timestamped like the
    /// rest of the run artifacts.
    pub fn write(&self, work_dir: &Path) -> Result<PathBuf, PipelineError> {
        let path = work_dir.join(format!(
            "generation_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        ));
        std::fs::write(&path, serde_json::to_vec_pretty(self)?)?;
        Ok(path)
    }
}

/// Report plus where it was written.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    pub report: RunReport,
    pub report_path: PathBuf,
}
