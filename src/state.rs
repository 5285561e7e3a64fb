use std::sync::Arc;

use tourist_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
use tourist_db::{DocumentStore, MemoryDocumentStore, PgDocumentStore, StoreError};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub jwt_config: JwtConfig,
    pub cors_config: CorsConfig,
    pub server_config: ServerConfig,
}

impl AppState {
    pub fn new(
        store: Arc<dyn DocumentStore>,
        jwt_config: JwtConfig,
        cors_config: CorsConfig,
        server_config: ServerConfig,
    ) -> Self {
        Self {
            store,
            jwt_config,
            cors_config,
            server_config,
        }
    }
}

/// Opens the configured store and checks that it answers.
///
/// Without `DATABASE_URL` the data lives in process memory and is lost on
/// restart.
pub async fn init_store(config: &DatabaseConfig) -> Result<Arc<dyn DocumentStore>, StoreError> {
    let store: Arc<dyn DocumentStore> = match config.url.as_deref() {
        Some(url) => Arc::new(PgDocumentStore::connect(url, config.max_connections).await?),
        None => {
            tracing::warn!("DATABASE_URL not set, using in-memory document store");
            Arc::new(MemoryDocumentStore::new())
        }
    };

    store.ping().await?;
    Ok(store)
}
