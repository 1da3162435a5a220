use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Embedding error: {0}")]
    Embedding(String),

    #[error("Embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Store error: {0}")]
    Store(String),

    #[error("Index setup failed: {0}")]
    IndexSetup(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<redis::RedisError> for DomainError {
    fn from(e: redis::RedisError) -> Self {
        DomainError::Store(e.to_string())
    }
}
