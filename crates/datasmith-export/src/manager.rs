use std::fs;
use std::path::PathBuf;

use tracing::info;

use datasmith_store::Store;

use crate::formats;
use crate::model::{ExportFormat, ExportReport, FormatOutcome};

/// Fans one materialized store out to the requested export formats.
///
/// Each format writes into its own subdirectory of the exports folder.
/// A failure in one table or one format is recorded in that entry's
/// outcome and never aborts the remaining work.
pub struct ExportManager {
    exports_dir: PathBuf,
}

impl ExportManager {
    pub fn new(exports_dir: impl Into<PathBuf>) -> Self {
        Self {
            exports_dir: exports_dir.into(),
        }
    }

    pub fn exports_dir(&self) -> &PathBuf {
        &self.exports_dir
    }

    /// Export all tables of the store in each named format.
    pub fn export(&self, store: &Store, formats: &[String]) -> ExportReport {
        let mut report = ExportReport::new();

        for name in formats {
            let requested = name.to_lowercase();
            let format = match ExportFormat::parse(&requested) {
                Ok(format) => format,
                Err(err) => {
                    report.insert(
                        requested.clone(),
                        FormatOutcome::failed(
                            self.exports_dir.join(&requested).display().to_string(),
                            err.to_string(),
                        ),
                    );
                    continue;
                }
            };

            let dir = self.exports_dir.join(format.dir_name());
            let outcome = match fs::create_dir_all(&dir) {
                Err(err) => FormatOutcome::failed(dir.display().to_string(), err.to_string()),
                Ok(()) => match format {
                    ExportFormat::Csv => formats::export_csv(store, &dir),
                    ExportFormat::Json => formats::export_json(store, &dir),
                    ExportFormat::Xlsx => formats::export_xlsx(store, &dir),
                    ExportFormat::Sql => formats::export_sql(store, &dir),
                },
            };

            info!(
                format = format.dir_name(),
                files = outcome.file_count,
                failures = outcome.errors.len(),
                "format export finished"
            );
            report.insert(format.dir_name().to_string(), outcome);
        }

        report
    }
}
