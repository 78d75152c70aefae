// src/prefs.rs - The persisted display preference

//! Exactly one value survives a reload: the dark-mode flag, stored under a
//! fixed key. Everything else in the store resets with the session.

use crate::error::Result;
use crate::platform::DynStorage;

/// Storage key for the dark-mode preference.
pub const DARK_MODE_KEY: &str = "darkMode";

/// Read the saved preference. A missing, unreadable, or malformed value
/// reads as `false` - the preference is cosmetic and never worth failing
/// startup over.
pub async fn load_dark_mode(storage: &DynStorage) -> bool {
    match storage.get(DARK_MODE_KEY).await {
        Ok(Some(value)) => value == "true",
        Ok(None) => false,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read dark mode preference");
            false
        }
    }
}

/// Persist the preference for the next session.
pub async fn save_dark_mode(storage: &DynStorage, enabled: bool) -> Result<()> {
    storage
        .set(DARK_MODE_KEY, if enabled { "true" } else { "false" })
        .await
}
