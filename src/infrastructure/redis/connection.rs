use crate::domain::error::DomainError;
use redis::aio::MultiplexedConnection;
use tokio::sync::OnceCell;
use url::Url;

/// Owns the one store connection for the process. The connection is opened
/// on first use; concurrent first callers wait on the same handshake.
pub struct RedisConnector {
    client: redis::Client,
    conn: OnceCell<MultiplexedConnection>,
}

impl RedisConnector {
    pub fn new(host: &str, port: u16, password: Option<&str>) -> Result<Self, DomainError> {
        let url = connection_url(host, port, password)?;
        let client = redis::Client::open(url.as_str())
            .map_err(|e| DomainError::Config(format!("Invalid Redis connection info: {e}")))?;
        Ok(Self {
            client,
            conn: OnceCell::new(),
        })
    }

    pub async fn connect(&self) -> Result<MultiplexedConnection, DomainError> {
        let conn = self
            .conn
            .get_or_try_init(|| async {
                let conn = self.client.get_multiplexed_async_connection().await?;
                tracing::info!("connected to vector store");
                Ok::<_, DomainError>(conn)
            })
            .await?;
        Ok(conn.clone())
    }

    pub fn is_ready(&self) -> bool {
        self.conn.initialized()
    }
}

fn connection_url(host: &str, port: u16, password: Option<&str>) -> Result<Url, DomainError> {
    let mut url = Url::parse(&format!("redis://{host}:{port}"))
        .map_err(|e| DomainError::Config(format!("Invalid Redis host {host:?}: {e}")))?;
    if let Some(password) = password.filter(|p| !p.is_empty()) {
        url.set_password(Some(password))
            .map_err(|_| DomainError::Config("Cannot set Redis password on URL".into()))?;
    }
    Ok(url)
}
