use thiserror::Error;

/// Core error type shared across Datasmith crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The Definition violates internal invariants.
    #[error("invalid definition: {0}")]
    InvalidSchema(String),
    /// A requested feature or tag is not supported.
    #[error("unsupported: {0}")]
    Unsupported(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by Datasmith crates.
pub type Result<T> = std::result::Result<T, Error>;
