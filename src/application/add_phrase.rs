use crate::domain::entities::phrase::Phrase;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::phrase_store::PhraseStore;
use std::sync::Arc;

pub struct AddPhraseUseCase {
    embedder: Arc<dyn EmbeddingProvider>,
    store: Arc<dyn PhraseStore>,
}

impl AddPhraseUseCase {
    pub fn new(embedder: Arc<dyn EmbeddingProvider>, store: Arc<dyn PhraseStore>) -> Self {
        Self { embedder, store }
    }

    pub async fn execute(&self, text: &str) -> Result<Phrase, DomainError> {
        let phrase = Phrase::new(text);
        let vector = self.embedder.embed_one(&phrase.text).await?;

        self.store.ensure_index().await?;
        self.store.put(&phrase.id, &phrase.text, &vector).await?;

        tracing::debug!(id = %phrase.id, "stored phrase");
        Ok(phrase)
    }
}
