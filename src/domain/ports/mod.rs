pub mod embedding_port;
pub mod phrase_store;
