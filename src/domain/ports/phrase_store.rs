use crate::domain::error::DomainError;
use crate::domain::values::vector_bytes::VectorBytes;

/// A hash-record store with a vector index over phrase embeddings.
#[async_trait::async_trait]
pub trait PhraseStore: Send + Sync {
    /// Create the search index if missing. Calling it again is a no-op.
    async fn ensure_index(&self) -> Result<(), DomainError>;

    /// Write or overwrite the record for `phrase_id`.
    async fn put(&self, phrase_id: &str, phrase: &str, vector: &VectorBytes) -> Result<(), DomainError>;

    /// Phrases of the `k` nearest records, nearest first.
    async fn query(&self, vector: &VectorBytes, k: usize) -> Result<Vec<String>, DomainError>;

    fn dimension(&self) -> usize;
}
