use crate::domain::error::DomainError;
use crate::domain::ports::phrase_store::PhraseStore;
use crate::domain::values::index_schema::{IndexSchema, EMBEDDING_FIELD, PHRASE_FIELD, SCORE_ALIAS};
use crate::domain::values::vector_bytes::VectorBytes;
use crate::infrastructure::redis::connection::RedisConnector;
use redis::Value;
use std::sync::Arc;

const INDEX_EXISTS: &str = "Index already exists";

/// Phrase records stored as Redis hashes and searched through a
/// RediSearch HNSW index.
pub struct RedisPhraseStore {
    connector: Arc<RedisConnector>,
    schema: IndexSchema,
}

impl RedisPhraseStore {
    pub fn new(connector: Arc<RedisConnector>, schema: IndexSchema) -> Self {
        Self { connector, schema }
    }

    fn check_dimension(&self, vector: &VectorBytes) -> Result<(), DomainError> {
        if vector.dimension() != self.schema.dimension {
            return Err(DomainError::DimensionMismatch {
                expected: self.schema.dimension,
                actual: vector.dimension(),
            });
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PhraseStore for RedisPhraseStore {
    async fn ensure_index(&self) -> Result<(), DomainError> {
        let mut conn = self
            .connector
            .connect()
            .await
            .map_err(|e| DomainError::IndexSetup(e.to_string()))?;

        let created: Result<(), redis::RedisError> = redis::cmd("FT.CREATE")
            .arg(&self.schema.name)
            .arg(self.schema.create_args())
            .query_async(&mut conn)
            .await;

        match created {
            Ok(()) => {
                tracing::info!(index = %self.schema.name, "index created");
                Ok(())
            }
            Err(e) if is_index_exists(&e) => {
                tracing::debug!(index = %self.schema.name, "index already exists");
                Ok(())
            }
            Err(e) => Err(DomainError::IndexSetup(e.to_string())),
        }
    }

    async fn put(&self, phrase_id: &str, phrase: &str, vector: &VectorBytes) -> Result<(), DomainError> {
        self.check_dimension(vector)?;
        let mut conn = self.connector.connect().await?;
        let key = format!("{}:{phrase_id}", self.schema.prefix);

        let _: i64 = redis::cmd("HSET")
            .arg(&key)
            .arg(PHRASE_FIELD)
            .arg(phrase)
            .arg(EMBEDDING_FIELD)
            .arg(vector.as_bytes())
            .query_async(&mut conn)
            .await?;
        Ok(())
    }

    async fn query(&self, vector: &VectorBytes, k: usize) -> Result<Vec<String>, DomainError> {
        self.check_dimension(vector)?;
        let mut conn = self.connector.connect().await?;

        // Cosine distance: smaller is closer, so ascending is nearest first.
        let reply: Value = redis::cmd("FT.SEARCH")
            .arg(&self.schema.name)
            .arg(self.schema.knn_query(k))
            .arg("PARAMS")
            .arg(2)
            .arg("vector")
            .arg(vector.as_bytes())
            .arg("SORTBY")
            .arg(SCORE_ALIAS)
            .arg("ASC")
            .arg("RETURN")
            .arg(1)
            .arg(PHRASE_FIELD)
            .arg("LIMIT")
            .arg(0)
            .arg(k)
            .arg("DIALECT")
            .arg(2)
            .query_async(&mut conn)
            .await?;

        parse_search_reply(reply)
    }

    fn dimension(&self) -> usize {
        self.schema.dimension
    }
}

fn is_index_exists(e: &redis::RedisError) -> bool {
    e.detail().is_some_and(|d| d.contains(INDEX_EXISTS)) || e.to_string().contains(INDEX_EXISTS)
}

/// Parse an FT.SEARCH RESP2 reply: `[total, key, [field, value, ...], ...]`.
fn parse_search_reply(reply: Value) -> Result<Vec<String>, DomainError> {
    let items = match reply {
        Value::Array(items) => items,
        other => return Err(DomainError::Parse(format!("Unexpected FT.SEARCH reply: {other:?}"))),
    };

    let mut docs = items.into_iter();
    match docs.next() {
        Some(Value::Int(_)) => {}
        other => return Err(DomainError::Parse(format!("Missing result count, got {other:?}"))),
    }

    let mut phrases = Vec::new();
    while let Some(_key) = docs.next() {
        let Some(Value::Array(fields)) = docs.next() else {
            continue;
        };
        let mut pairs = fields.into_iter();
        while let (Some(name), Some(value)) = (pairs.next(), pairs.next()) {
            if value_to_string(&name).as_deref() == Some(PHRASE_FIELD) {
                if let Some(text) = value_to_string(&value) {
                    phrases.push(text);
                }
            }
        }
    }
    Ok(phrases)
}

fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::BulkString(bytes) => Some(String::from_utf8_lossy(bytes).into_owned()),
        Value::SimpleString(s) => Some(s.clone()),
        _ => None,
    }
}
