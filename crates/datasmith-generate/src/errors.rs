use thiserror::Error;

/// Errors emitted by the generation engine.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The requested strategy tag has no registered implementation.
    #[error("unsupported strategy: {0}")]
    UnsupportedStrategy(String),
    #[error("invalid definition: {0}")]
    InvalidDefinition(String),
}
