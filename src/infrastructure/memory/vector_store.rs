use crate::domain::error::DomainError;
use crate::domain::ports::phrase_store::PhraseStore;
use crate::domain::values::vector_bytes::VectorBytes;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

struct Record {
    phrase: String,
    vector: Vec<f64>,
}

/// Brute-force phrase store kept in process memory. Ranks by cosine distance
/// the way the Redis index does, without the approximation.
pub struct InMemoryPhraseStore {
    dimension: usize,
    records: Mutex<HashMap<String, Record>>,
    index_created: AtomicBool,
    index_creations: AtomicUsize,
}

impl InMemoryPhraseStore {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            records: Mutex::new(HashMap::new()),
            index_created: AtomicBool::new(false),
            index_creations: AtomicUsize::new(0),
        }
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stored display text for `phrase_id`, if any.
    pub fn get(&self, phrase_id: &str) -> Option<String> {
        let records = self.records.lock().ok()?;
        records.get(phrase_id).map(|r| r.phrase.clone())
    }

    /// Number of times an index was actually created.
    pub fn index_creations(&self) -> usize {
        self.index_creations.load(Ordering::SeqCst)
    }

    fn check_dimension(&self, vector: &VectorBytes) -> Result<(), DomainError> {
        if vector.dimension() != self.dimension {
            return Err(DomainError::DimensionMismatch {
                expected: self.dimension,
                actual: vector.dimension(),
            });
        }
        Ok(())
    }

    pub fn cosine_distance(a: &[f64], b: &[f64]) -> f64 {
        if a.len() != b.len() || a.is_empty() {
            return 1.0;
        }
        let mut dot = 0.0_f64;
        let mut norm_a = 0.0_f64;
        let mut norm_b = 0.0_f64;
        for (x, y) in a.iter().zip(b.iter()) {
            dot += x * y;
            norm_a += x * x;
            norm_b += y * y;
        }
        let denom = norm_a.sqrt() * norm_b.sqrt();
        if denom == 0.0 { 1.0 } else { 1.0 - dot / denom }
    }
}

#[async_trait::async_trait]
impl PhraseStore for InMemoryPhraseStore {
    async fn ensure_index(&self) -> Result<(), DomainError> {
        if self
            .index_created
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok()
        {
            self.index_creations.fetch_add(1, Ordering::SeqCst);
            tracing::info!("in-memory index created");
        }
        Ok(())
    }

    async fn put(&self, phrase_id: &str, phrase: &str, vector: &VectorBytes) -> Result<(), DomainError> {
        self.check_dimension(vector)?;
        let vector = vector.to_embedding(self.dimension)?;
        let mut records = self.records.lock().map_err(|e| DomainError::Store(e.to_string()))?;
        records.insert(
            phrase_id.to_string(),
            Record {
                phrase: phrase.to_string(),
                vector,
            },
        );
        Ok(())
    }

    async fn query(&self, vector: &VectorBytes, k: usize) -> Result<Vec<String>, DomainError> {
        if !self.index_created.load(Ordering::SeqCst) {
            return Err(DomainError::Store("no such index".into()));
        }
        self.check_dimension(vector)?;
        let query = vector.to_embedding(self.dimension)?;
        let records = self.records.lock().map_err(|e| DomainError::Store(e.to_string()))?;

        let mut scored: Vec<(&str, f64)> = records
            .values()
            .map(|r| (r.phrase.as_str(), Self::cosine_distance(&query, &r.vector)))
            .collect();
        scored.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(k);

        Ok(scored.into_iter().map(|(phrase, _)| phrase.to_string()).collect())
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
