use std::collections::HashMap;

use async_trait::async_trait;
use eyre::Result;
use tokio::sync::Mutex;

use crate::storage::Storage;

/// In-memory storage, mainly for tests. Same contract as the sqlite
/// adapter, nothing survives the process.
#[derive(Default)]
pub struct Memory {
    data: Mutex<HashMap<String, String>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Storage for Memory {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.data
            .lock()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
