pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod web;

use crate::application::add_phrase::AddPhraseUseCase;
use crate::application::search::SearchUseCase;
use crate::config::Settings;
use crate::domain::entities::phrase::Phrase;
use crate::domain::error::DomainError;
use crate::domain::ports::embedding_port::EmbeddingProvider;
use crate::domain::ports::phrase_store::PhraseStore;
use crate::domain::values::index_schema::IndexSchema;
use crate::domain::values::search_outcome::SearchOutcome;
use crate::infrastructure::embeddings::openai::OpenAiProvider;
use crate::infrastructure::memory::vector_store::InMemoryPhraseStore;
use crate::infrastructure::redis::connection::RedisConnector;
use crate::infrastructure::redis::vector_store::RedisPhraseStore;
use std::sync::Arc;

pub struct PhraseSearch {
    add_phrase_uc: AddPhraseUseCase,
    search_uc: SearchUseCase,
}

impl PhraseSearch {
    /// Build against OpenAI and Redis, connect and make sure the index exists.
    pub async fn connect(settings: &Settings) -> Result<Self, DomainError> {
        let embedder = Arc::new(Self::openai(settings));

        let connector = Arc::new(RedisConnector::new(
            &settings.redis_host,
            settings.redis_port,
            settings.redis_password.as_deref(),
        )?);
        connector.connect().await?;

        let store = Arc::new(RedisPhraseStore::new(
            connector,
            IndexSchema::with_dimension(embedder.dimension()),
        ));
        store.ensure_index().await?;

        Ok(Self::with_providers(embedder, store))
    }

    /// OpenAI embeddings with a process-local store; nothing persists.
    pub fn in_memory(settings: &Settings) -> Self {
        let embedder = Arc::new(Self::openai(settings));
        let store = Arc::new(InMemoryPhraseStore::new(embedder.dimension()));
        Self::with_providers(embedder, store)
    }

    pub fn with_providers(embedder: Arc<dyn EmbeddingProvider>, store: Arc<dyn PhraseStore>) -> Self {
        if embedder.dimension() != store.dimension() {
            tracing::warn!(
                embedder = embedder.dimension(),
                store = store.dimension(),
                "embedding dimension does not match index dimension"
            );
        }

        Self {
            add_phrase_uc: AddPhraseUseCase::new(embedder.clone(), store.clone()),
            search_uc: SearchUseCase::new(embedder, store),
        }
    }

    fn openai(settings: &Settings) -> OpenAiProvider {
        OpenAiProvider::new(
            settings.openai_api_key.clone(),
            settings.openai_model.clone(),
            settings.openai_base_url.clone(),
            settings.openai_dimension,
        )
    }

    pub async fn add_phrase(&self, text: &str) -> Result<Phrase, DomainError> {
        self.add_phrase_uc.execute(text).await
    }

    pub async fn search(&self, text: &str, k: usize) -> Result<SearchOutcome, DomainError> {
        self.search_uc.execute(text, k).await
    }
}
