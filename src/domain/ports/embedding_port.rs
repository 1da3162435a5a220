use crate::domain::error::DomainError;
use crate::domain::values::vector_bytes::VectorBytes;

#[async_trait::async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f64>>, DomainError>;
    fn dimension(&self) -> usize;

    /// Embed a single phrase and serialize the first returned vector.
    async fn embed_one(&self, text: &str) -> Result<VectorBytes, DomainError> {
        let vectors = self.embed(&[text.to_string()]).await?;
        let first = vectors
            .first()
            .ok_or_else(|| DomainError::Embedding("Provider returned no embeddings".into()))?;
        Ok(VectorBytes::from_embedding(first))
    }
}
