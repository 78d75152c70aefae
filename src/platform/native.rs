// src/platform/native.rs - Native platform providers

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::error::{Error, Result, StorageOperation};

use super::storage::{StorageBounds, StorageProvider};

/// Native storage implementation (file per key under the platform data dir).
pub struct NativeStorage {
    storage_path: PathBuf,
}

impl NativeStorage {
    pub fn new() -> Self {
        let storage_path = dirs::data_dir()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_default().join("data"))
            .join("oxcart")
            .join("storage");

        Self { storage_path }
    }

    /// Storage rooted at an explicit directory. Tests point this at a
    /// temporary directory.
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: root.into(),
        }
    }

    fn key_to_path(&self, key: &str) -> PathBuf {
        let safe_key = key.replace(['/', '\\', ':', '*', '?', '"', '<', '>', '|'], "_");
        self.storage_path.join(format!("{}.txt", safe_key))
    }
}

impl Default for NativeStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageBounds for NativeStorage {}

#[async_trait]
impl StorageProvider for NativeStorage {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_to_path(key);
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(Error::storage(
                key,
                StorageOperation::Read,
                format!("failed to read key {}: {}", key, e),
            )),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.key_to_path(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                Error::storage(
                    key,
                    StorageOperation::Write,
                    format!("failed to create storage directory: {}", e),
                )
            })?;
        }

        fs::write(&path, value).await.map_err(|e| {
            Error::storage(
                key,
                StorageOperation::Write,
                format!("failed to write key {}: {}", key, e),
            )
        })
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.key_to_path(key);
        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Error::storage(
                key,
                StorageOperation::Delete,
                format!("failed to delete key {}: {}", key, e),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_roundtrip() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = NativeStorage::with_root(dir.path());

        assert_eq!(storage.get("darkMode").await.unwrap(), None);

        storage.set("darkMode", "true").await.unwrap();
        assert_eq!(
            storage.get("darkMode").await.unwrap().as_deref(),
            Some("true")
        );

        storage.remove("darkMode").await.unwrap();
        assert_eq!(storage.get("darkMode").await.unwrap(), None);

        // Removing a missing key is not an error.
        storage.remove("darkMode").await.unwrap();
    }

    #[tokio::test]
    async fn test_keys_are_sanitized() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = NativeStorage::with_root(dir.path());

        storage.set("prefs/display", "1").await.unwrap();
        assert_eq!(
            storage.get("prefs/display").await.unwrap().as_deref(),
            Some("1")
        );
    }
}
