pub mod connection;
pub mod vector_store;
