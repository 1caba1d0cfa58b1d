use thiserror::Error;

/// Errors emitted by the relational store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to open store '{path}': {source}")]
    Open {
        path: String,
        source: rusqlite::Error,
    },
    #[error("failed to create table '{table}': {source}")]
    CreateTable {
        table: String,
        source: rusqlite::Error,
    },
    /// The table's insert transaction failed and was rolled back.
    #[error("failed to load rows into '{table}': {source}")]
    Insert {
        table: String,
        source: rusqlite::Error,
    },
    #[error("failed to read table '{table}': {source}")]
    Read {
        table: String,
        source: rusqlite::Error,
    },
    #[error("database error: {0}")]
    Db(#[from] rusqlite::Error),
}
