use thiserror::Error;

use datasmith_store::StoreError;

/// Errors raised while exporting a single table or format.
///
/// These are caught by the export manager and recorded as per-table or
/// per-format outcomes rather than aborting the run.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("xlsx error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("format not supported: {0}")]
    UnsupportedFormat(String),
}
