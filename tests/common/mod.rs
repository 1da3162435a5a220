//! Shared test helpers.
#![allow(dead_code)]

use phrase_search::domain::error::DomainError;
use phrase_search::domain::ports::embedding_port::EmbeddingProvider;
use phrase_search::domain::ports::phrase_store::PhraseStore;
use phrase_search::domain::values::vector_bytes::VectorBytes;
use phrase_search::infrastructure::memory::vector_store::InMemoryPhraseStore;
use phrase_search::PhraseSearch;
use std::collections::HashMap;
use std::sync::Arc;

pub const DIM: usize = 3;

/// Embeds known phrases to fixed vectors; anything else fails like an API error.
pub struct FakeEmbedder {
    vectors: HashMap<String, Vec<f64>>,
}

impl FakeEmbedder {
    pub fn new(pairs: &[(&str, [f64; DIM])]) -> Self {
        Self {
            vectors: pairs
                .iter()
                .map(|(text, v)| (text.to_string(), v.to_vec()))
                .collect(),
        }
    }

    /// "cat", "dog" and "car" plus a query phrase "kitten" closest to "cat".
    pub fn animals() -> Self {
        Self::new(&[
            ("cat", [1.0, 0.1, 0.0]),
            ("dog", [0.7, 0.7, 0.0]),
            ("car", [0.0, 0.2, 1.0]),
            ("kitten", [0.9, 0.2, 0.0]),
            ("Hello World", [1.0, 0.0, 0.0]),
            ("helloworld", [0.0, 1.0, 0.0]),
            ("<b>bold</b>", [0.0, 0.0, 1.0]),
        ])
    }
}

#[async_trait::async_trait]
impl EmbeddingProvider for FakeEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f64>>, DomainError> {
        texts
            .iter()
            .map(|t| {
                self.vectors
                    .get(t)
                    .cloned()
                    .ok_or_else(|| DomainError::Embedding(format!("401 Unauthorized for {t}")))
            })
            .collect()
    }

    fn dimension(&self) -> usize {
        DIM
    }
}

/// Store whose index exists but whose reads and writes always fail.
pub struct FailingStore;

#[async_trait::async_trait]
impl PhraseStore for FailingStore {
    async fn ensure_index(&self) -> Result<(), DomainError> {
        Ok(())
    }

    async fn put(&self, _phrase_id: &str, _phrase: &str, _vector: &VectorBytes) -> Result<(), DomainError> {
        Err(DomainError::Store("connection reset by peer".into()))
    }

    async fn query(&self, _vector: &VectorBytes, _k: usize) -> Result<Vec<String>, DomainError> {
        Err(DomainError::Store("connection reset by peer".into()))
    }

    fn dimension(&self) -> usize {
        DIM
    }
}

/// Store whose index can never be created.
pub struct BrokenIndexStore;

#[async_trait::async_trait]
impl PhraseStore for BrokenIndexStore {
    async fn ensure_index(&self) -> Result<(), DomainError> {
        Err(DomainError::IndexSetup("Connection refused".into()))
    }

    async fn put(&self, _phrase_id: &str, _phrase: &str, _vector: &VectorBytes) -> Result<(), DomainError> {
        Ok(())
    }

    async fn query(&self, _vector: &VectorBytes, _k: usize) -> Result<Vec<String>, DomainError> {
        Ok(vec![])
    }

    fn dimension(&self) -> usize {
        DIM
    }
}

pub fn setup() -> (PhraseSearch, Arc<InMemoryPhraseStore>) {
    let store = Arc::new(InMemoryPhraseStore::new(DIM));
    let app = PhraseSearch::with_providers(Arc::new(FakeEmbedder::animals()), store.clone());
    (app, store)
}

pub fn with_store(store: Arc<dyn PhraseStore>) -> PhraseSearch {
    PhraseSearch::with_providers(Arc::new(FakeEmbedder::animals()), store)
}
