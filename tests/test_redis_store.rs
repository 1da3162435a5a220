//! Runs against a live Redis Stack. Start one with
//! `docker run -p 6379:6379 redis/redis-stack-server` and run
//! `cargo test -- --ignored`.

use phrase_search::domain::ports::phrase_store::PhraseStore;
use phrase_search::domain::values::index_schema::IndexSchema;
use phrase_search::domain::values::vector_bytes::VectorBytes;
use phrase_search::infrastructure::redis::connection::RedisConnector;
use phrase_search::infrastructure::redis::vector_store::RedisPhraseStore;
use std::sync::Arc;

fn store(tag: &str) -> RedisPhraseStore {
    let host = std::env::var("VECTOR_REDIS_CONN").unwrap_or_else(|_| "127.0.0.1".into());
    let port = std::env::var("VECTOR_REDIS_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(6379);
    let password = std::env::var("VECTOR_REDIS_PASS").ok();
    let connector = Arc::new(RedisConnector::new(&host, port, password.as_deref()).unwrap());

    let suffix = std::process::id();
    let schema = IndexSchema {
        name: format!("idx:test-{tag}-{suffix}"),
        prefix: format!("test-{tag}-{suffix}"),
        dimension: 3,
    };
    RedisPhraseStore::new(connector, schema)
}

fn bytes(v: &[f64]) -> VectorBytes {
    VectorBytes::from_embedding(v)
}

#[tokio::test]
#[ignore = "requires Redis Stack"]
async fn test_ensure_index_twice() {
    let store = store("ensure");
    store.ensure_index().await.unwrap();
    store.ensure_index().await.unwrap();
}

#[tokio::test]
#[ignore = "requires Redis Stack"]
async fn test_empty_index_returns_no_matches() {
    let store = store("empty");
    store.ensure_index().await.unwrap();
    let result = store.query(&bytes(&[1.0, 0.0, 0.0]), 5).await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
#[ignore = "requires Redis Stack"]
async fn test_nearest_first_and_overwrite() {
    let store = store("order");
    store.ensure_index().await.unwrap();

    store.put("car", "car", &bytes(&[0.0, 0.2, 1.0])).await.unwrap();
    store.put("dog", "dog", &bytes(&[0.7, 0.7, 0.0])).await.unwrap();
    store.put("cat", "cat", &bytes(&[1.0, 0.1, 0.0])).await.unwrap();

    let result = store.query(&bytes(&[0.9, 0.2, 0.0]), 5).await.unwrap();
    assert_eq!(result, vec!["cat", "dog", "car"]);

    // Same id, new text and vector: now nearest to the query for car.
    store.put("cat", "Cat", &bytes(&[0.0, 0.1, 1.0])).await.unwrap();
    let result = store.query(&bytes(&[0.0, 0.1, 1.0]), 5).await.unwrap();
    assert_eq!(result.len(), 3);
    assert_eq!(result[0], "Cat");
}

#[tokio::test]
#[ignore = "requires Redis Stack"]
async fn test_concurrent_first_connect() {
    let host = std::env::var("VECTOR_REDIS_CONN").unwrap_or_else(|_| "127.0.0.1".into());
    let connector = Arc::new(RedisConnector::new(&host, 6379, None).unwrap());
    let (a, b) = tokio::join!(connector.connect(), connector.connect());
    assert!(a.is_ok() && b.is_ok());
    assert!(connector.is_ready());
}
