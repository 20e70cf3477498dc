//! Browser `localStorage` adapter for the portal token store

use portal_core::{
    KeyValueStorage, MemoryStorage, NavigationGuard, StorageError, StorageResult, SystemClock,
    TokenStore,
};
use web_sys::Storage;

use crate::config::AppConfig;

thread_local! {
    static FALLBACK: MemoryStorage = MemoryStorage::new();
}

/// `window.localStorage`, or an in-memory map when the browser denies access
///
/// Private browsing modes and sandboxed iframes can refuse `localStorage`; the
/// app keeps working for the lifetime of the page in that case.
#[derive(Clone, Debug)]
pub enum BrowserStorage {
    Local(Storage),
    Memory(MemoryStorage),
}

impl BrowserStorage {
    /// Open the page's local storage, falling back to memory
    pub fn open() -> Self {
        match local_storage() {
            Some(storage) => Self::Local(storage),
            None => {
                tracing::warn!("localStorage unavailable; falling back to in-memory storage");
                Self::Memory(FALLBACK.with(Clone::clone))
            }
        }
    }

    pub const fn is_persistent(&self) -> bool {
        matches!(self, Self::Local(_))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => storage.get_item(key).ok().flatten(),
            Self::Memory(storage) => storage.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|err| StorageError::write_rejected(key, js_error_message(&err))),
            Self::Memory(storage) => storage.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        match self {
            Self::Local(storage) => storage
                .remove_item(key)
                .map_err(|err| StorageError::unavailable(js_error_message(&err))),
            Self::Memory(storage) => storage.remove(key),
        }
    }
}

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn js_error_message(err: &wasm_bindgen::JsValue) -> String {
    err.as_string()
        .or_else(|| {
            js_sys::Reflect::get(err, &"message".into())
                .ok()
                .and_then(|message| message.as_string())
        })
        .unwrap_or_else(|| "unknown storage error".to_string())
}

/// Token store over the browser storage with the loaded app configuration
pub fn token_store() -> TokenStore<BrowserStorage> {
    TokenStore::with_config(BrowserStorage::open(), SystemClock, AppConfig::load().guard)
}

/// Navigation guard over the browser storage
pub fn navigation_guard() -> NavigationGuard<BrowserStorage, SystemClock> {
    NavigationGuard::new(token_store())
}

