pub mod index_schema;
pub mod search_outcome;
pub mod vector_bytes;
