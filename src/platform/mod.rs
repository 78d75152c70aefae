// src/platform/mod.rs - Platform abstraction layer

//! The storefront persists exactly one cross-session value (a display
//! preference), through a storage provider selected per target: the browser's
//! `localStorage` on wasm, a file under the platform data directory on
//! native, and an in-memory map for tests.

pub mod memory;
pub mod storage;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use memory::MemoryStorage;
pub use storage::{DynStorage, StorageArc, StorageProvider};

#[cfg(not(target_arch = "wasm32"))]
pub use native::NativeStorage;

#[cfg(target_arch = "wasm32")]
pub use web::WebStorage;

use std::sync::Arc;

/// The default storage provider for the current target.
pub fn default_storage() -> StorageArc {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Arc::new(NativeStorage::new())
    }

    #[cfg(target_arch = "wasm32")]
    {
        Arc::new(WebStorage::new())
    }
}
