// src/platform/memory.rs

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{Error, Result, StorageOperation};

use super::storage::{StorageBounds, StorageProvider};

/// In-memory storage for tests and headless runs. Contents die with the
/// process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self, key: &str, operation: StorageOperation) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.values
            .lock()
            .map_err(|_| Error::storage(key, operation, "storage mutex poisoned"))
    }
}

impl StorageBounds for MemoryStorage {}

#[cfg_attr(not(target_arch = "wasm32"), async_trait::async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait::async_trait(?Send))]
impl StorageProvider for MemoryStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.lock(key, StorageOperation::Read)?.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.lock(key, StorageOperation::Write)?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        self.lock(key, StorageOperation::Delete)?.remove(key);
        Ok(())
    }
}
