// src/platform/web.rs - Web platform providers

use async_trait::async_trait;
use web_sys::Storage;

use crate::error::{Error, Result, StorageOperation};

use super::storage::{StorageBounds, StorageProvider};

/// Web storage implementation backed by `window.localStorage`.
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn local_storage(&self, key: &str, operation: StorageOperation) -> Result<Storage> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| Error::storage(key, operation, "localStorage not available"))
    }
}

impl Default for WebStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBounds for WebStorage {}

#[async_trait(?Send)]
impl StorageProvider for WebStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let storage = self.local_storage(key, StorageOperation::Read)?;

        storage.get_item(key).map_err(|e| {
            Error::storage(
                key,
                StorageOperation::Read,
                format!("failed to get item: {:?}", e),
            )
        })
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let storage = self.local_storage(key, StorageOperation::Write)?;

        storage.set_item(key, value).map_err(|e| {
            Error::storage(
                key,
                StorageOperation::Write,
                format!("failed to set item: {:?}", e),
            )
        })
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let storage = self.local_storage(key, StorageOperation::Delete)?;

        storage.remove_item(key).map_err(|e| {
            Error::storage(
                key,
                StorageOperation::Delete,
                format!("failed to remove item: {:?}", e),
            )
        })
    }
}
