/// Vector dimension of `text-embedding-ada-002`.
pub const VECTOR_DIM: usize = 1536;
pub const INDEX_NAME: &str = "idx:search-vector-index";
pub const INDEX_PREFIX: &str = "search-index";

pub const PHRASE_FIELD: &str = "phrase";
pub const EMBEDDING_FIELD: &str = "embedding";
pub const SCORE_ALIAS: &str = "vector_score";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSchema {
    pub name: String,
    pub prefix: String,
    pub dimension: usize,
}

impl Default for IndexSchema {
    fn default() -> Self {
        Self {
            name: INDEX_NAME.to_string(),
            prefix: INDEX_PREFIX.to_string(),
            dimension: VECTOR_DIM,
        }
    }
}

impl IndexSchema {
    pub fn with_dimension(dimension: usize) -> Self {
        Self {
            dimension,
            ..Self::default()
        }
    }

    /// FT.CREATE arguments after the index name: a HASH index over the key
    /// prefix with a TEXT phrase field and an HNSW cosine FLOAT64 vector field.
    pub fn create_args(&self) -> Vec<String> {
        let mut args: Vec<String> = vec![
            "ON".into(),
            "HASH".into(),
            "PREFIX".into(),
            "1".into(),
            self.prefix.clone(),
            "SCHEMA".into(),
            PHRASE_FIELD.into(),
            "TEXT".into(),
            EMBEDDING_FIELD.into(),
            "VECTOR".into(),
            "HNSW".into(),
        ];
        let attributes = [
            ("TYPE", "FLOAT64".to_string()),
            ("DIM", self.dimension.to_string()),
            ("DISTANCE_METRIC", "COSINE".to_string()),
        ];
        args.push((attributes.len() * 2).to_string());
        for (name, value) in attributes {
            args.push(name.to_string());
            args.push(value);
        }
        args
    }

    /// KNN query string for the first `k` neighbours of the `$vector` param.
    pub fn knn_query(&self, k: usize) -> String {
        format!("*=>[KNN {k} @{EMBEDDING_FIELD} $vector AS {SCORE_ALIAS}]")
    }
}
