use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::phrase_store::PhraseStore;
use crate::domain::values::search_outcome::SearchOutcome;
use std::sync::Arc;

pub const NUM_RESULTS: usize = 5;

pub struct SearchUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn PhraseStore>,
}

impl SearchUseCase {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, store: Arc<dyn PhraseStore>) -> Self {
        Self { embedder, store }
    }

    /// Embedding and index failures propagate. A failed KNN query is logged
    /// and reported as `Unavailable` so the caller can still render a page.
    pub async fn execute(&self, text: &str, k: usize) -> Result<SearchOutcome, DomainError> {
        let vector = self.embedder.embed_one(text).await?;
        self.store.ensure_index().await?;

        match self.store.query(&vector, k).await {
            Ok(phrases) => {
                tracing::debug!(count = phrases.len(), "search returned matches");
                Ok(SearchOutcome::Matches(phrases))
            }
            Err(e) => {
                tracing::warn!(error = %e, "vector query failed");
                Ok(SearchOutcome::Unavailable(e.to_string()))
            }
        }
    }
}
