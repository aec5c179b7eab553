use thiserror::Error;

pub type SelectionResult<T> = Result<T, SelectionError>;

#[derive(Debug, Error)]
pub enum SelectionError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("{input} length mismatch: expected {expected} handles, got {actual}")]
    HandleCountMismatch {
        input: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}
