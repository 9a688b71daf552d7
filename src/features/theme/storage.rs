//! Key/value persistence for the selected theme. The controller only sees the
//! [`ThemeStorage`] trait, so tests construct it over [`MemoryStorage`] and
//! never touch `localStorage`.

use crate::errors::AppError;
use std::collections::HashMap;

/// Key under which the theme is stored.
pub const STORAGE_KEY: &str = "theme";

pub trait ThemeStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError>;
}

/// `window.localStorage`; on non-browser targets every call fails with
/// [`AppError::Storage`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, AppError> {
        web_sys::window()
            .and_then(|window| window.local_storage().ok())
            .flatten()
            .ok_or_else(|| AppError::Storage("localStorage is unavailable".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl ThemeStorage for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Self::local_storage()?
            .get_item(key)
            .map_err(|err| AppError::Storage(format!("Failed to read {key}: {err:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|err| AppError::Storage(format!("Failed to write {key}: {err:?}")))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl ThemeStorage for BrowserStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, AppError> {
        Err(AppError::Storage("unavailable".to_string()))
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), AppError> {
        Err(AppError::Storage("unavailable".to_string()))
    }
}

/// In-memory store for tests and hosts without durable storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a single entry.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_string(), value.to_string());
        storage
    }

    pub fn entry(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl ThemeStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), AppError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
