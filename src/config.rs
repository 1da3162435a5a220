use crate::domain::error::DomainError;
use std::path::{Path, PathBuf};

pub const DEFAULT_REDIS_HOST: &str = "127.0.0.1";
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Process configuration read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub openai_api_key: String,
    pub openai_model: Option<String>,
    pub openai_base_url: Option<String>,
    /// Overrides the model's native embedding size.
    pub openai_dimension: Option<usize>,
    pub redis_host: String,
    pub redis_port: u16,
    pub redis_password: Option<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, DomainError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, DomainError> {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|k| !k.is_empty())
            .ok_or_else(|| DomainError::Config("OPENAI_API_KEY is not set".into()))?;

        let redis_port = match lookup("VECTOR_REDIS_PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| DomainError::Config(format!("VECTOR_REDIS_PORT is not a port: {raw}")))?,
            None => DEFAULT_REDIS_PORT,
        };

        let openai_dimension = match lookup("OPENAI_EMBEDDING_DIM") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(dim) if dim > 0 => Some(dim),
                _ => {
                    return Err(DomainError::Config(format!(
                        "OPENAI_EMBEDDING_DIM is not a positive integer: {raw}"
                    )))
                }
            },
            None => None,
        };

        Ok(Self {
            openai_api_key,
            openai_model: lookup("OPENAI_EMBEDDING_MODEL"),
            openai_base_url: lookup("OPENAI_BASE_URL"),
            openai_dimension,
            redis_host: lookup("VECTOR_REDIS_CONN").unwrap_or_else(|| DEFAULT_REDIS_HOST.into()),
            redis_port,
            redis_password: lookup("VECTOR_REDIS_PASS"),
        })
    }
}

/// Load a `.env` file into the process environment. Variables that are
/// already set win. With no path, `.env` is searched for from the working
/// directory up; a missing file is not an error.
pub fn load_env_file(path: Option<&Path>) -> Result<Option<PathBuf>, DomainError> {
    match path {
        Some(path) => {
            dotenvy::from_path(path)
                .map_err(|e| DomainError::Config(format!("Cannot load {}: {e}", path.display())))?;
            Ok(Some(path.to_path_buf()))
        }
        None => match dotenvy::dotenv() {
            Ok(found) => Ok(Some(found)),
            Err(e) if e.not_found() => Ok(None),
            Err(e) => Err(DomainError::Config(format!("Cannot load .env: {e}"))),
        },
    }
}
