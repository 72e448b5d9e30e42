pub mod memory_store;
pub mod pg_store;
pub mod pool;
pub mod store;

use std::sync::Arc;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use memory_store::MemoryStore;
use pg_store::PgStore;
use store::DocumentStore;

/// Builds the store the service runs on: Postgres when `DATABASE_URL` is
/// set, otherwise an in-memory store that is lost on restart.
pub async fn connect_store(config: &Config) -> Result<Arc<dyn DocumentStore>> {
    match config.database_url.as_deref() {
        Some(url) => {
            let pool = pool::create_pool(config, url).await?;
            let store = PgStore::new(pool);
            store.migrate().await?;
            info!("Connected to Postgres document store");
            Ok(Arc::new(store))
        }
        None => {
            warn!("DATABASE_URL not set; documents are kept in memory only");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}
