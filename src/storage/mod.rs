pub mod memory;
pub mod sqlite;

use std::sync::Arc;

use async_trait::async_trait;
use eyre::Result;
use sqlite::Sqlite;

use crate::config::StorageConfig;

/// Durable string key/value storage. There is no atomicity across keys: a
/// crash between writing the conversation list and the current pointer is
/// tolerated because the pointer is revalidated on bootstrap. Callers must
/// treat unparsable values as absent data.
#[async_trait]
pub trait Storage {
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}

pub type ArcStorage = Arc<dyn Storage + Send + Sync>;

pub async fn new_storage(config: &StorageConfig) -> Result<ArcStorage> {
    let storage = match config {
        StorageConfig::Sqlite(sqlite_config) => {
            Arc::new(Sqlite::new(sqlite_config.path.as_deref()).await?)
        }
    };
    Ok(storage)
}
