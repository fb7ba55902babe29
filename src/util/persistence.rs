//! Local key/value storage for filter selections, banner flags, and the
//! access token.
//!
//! DESIGN
//! ======
//! `KeyValueStore` is the seam. `FileStore` keeps one JSON object per state
//! directory and rewrites the whole file on every change; a missing file
//! reads as an empty object. `MemoryStore` backs tests and read-only runs.
//!
//! ERROR HANDLING
//! ==============
//! IO failures and a state file that is not a JSON object surface as
//! `StoreError`. A value with the wrong shape for its key is
//! `StoreError::Decode`.

#[cfg(test)]
#[path = "persistence_test.rs"]
mod persistence_test;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::StoreError;
use crate::state::filters::{FilterOption, FilterType, PersistedFilters};

pub const FILTERS_KEY: &str = "filters";
pub const ACCESS_TOKEN_KEY: &str = "accessToken";
pub const STATE_FILE_NAME: &str = "state.json";

pub trait KeyValueStore {
    /// Stored value for `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError>;

    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError>;

    /// # Errors
    ///
    /// Returns an error when the backing storage cannot be written.
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

// =============================================================================
// MEMORY
// =============================================================================

#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Value>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// FILE
// =============================================================================

#[derive(Clone, Debug)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by `state.json` inside `dir`.
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::open(dir.join(STATE_FILE_NAME))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io { path: self.path.display().to_string(), source }
    }

    fn read_all(&self) -> Result<serde_json::Map<String, Value>, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(serde_json::Map::new()),
            Err(e) => return Err(self.io_error(e)),
        };
        if text.trim().is_empty() {
            return Ok(serde_json::Map::new());
        }
        serde_json::from_str(&text)
            .map_err(|source| StoreError::Corrupt { path: self.path.display().to_string(), source })
    }

    fn write_all(&self, entries: &serde_json::Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let text = serde_json::to_string_pretty(entries)
            .map_err(|source| StoreError::Corrupt { path: self.path.display().to_string(), source })?;
        std::fs::write(&self.path, text).map_err(|e| self.io_error(e))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_owned(), value);
        self.write_all(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

// =============================================================================
// TYPED HELPERS
// =============================================================================

/// Decode the value under `key`.
///
/// # Errors
///
/// Returns `StoreError::Decode` when the stored value has the wrong shape.
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StoreError> {
    match store.get(key)? {
        None => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|source| StoreError::Decode { key: key.to_owned(), source }),
    }
}

/// # Errors
///
/// Returns an error when the value cannot be encoded or stored.
pub fn save_json<T: Serialize + ?Sized>(store: &mut dyn KeyValueStore, key: &str, value: &T) -> Result<(), StoreError> {
    let value = serde_json::to_value(value).map_err(|source| StoreError::Decode { key: key.to_owned(), source })?;
    store.set(key, value)
}

/// Saved filter selections; empty lists when nothing was saved.
///
/// # Errors
///
/// Returns an error when the stored filters cannot be read or decoded.
pub fn load_filters(store: &dyn KeyValueStore) -> Result<PersistedFilters, StoreError> {
    Ok(load_json(store, FILTERS_KEY)?.unwrap_or_default())
}

/// # Errors
///
/// Same as [`load_filters`].
pub fn filters_by_type(store: &dyn KeyValueStore, filter_type: FilterType) -> Result<Vec<String>, StoreError> {
    Ok(load_filters(store)?.get(filter_type).to_vec())
}

/// Replace the saved selection for one filter type with the labels of the
/// selected `options`. Other types are left as they were.
///
/// # Errors
///
/// Returns an error when the filters cannot be read back or written.
pub fn set_filters_by_type(
    store: &mut dyn KeyValueStore,
    filter_type: FilterType,
    options: &[FilterOption],
) -> Result<(), StoreError> {
    let mut filters = load_filters(store)?;
    let labels = options.iter().filter(|o| o.selected).map(|o| o.label.clone()).collect();
    filters.set(filter_type, labels);
    save_json(store, FILTERS_KEY, &filters)
}

/// # Errors
///
/// Returns an error when the token cannot be read or decoded.
pub fn load_access_token(store: &dyn KeyValueStore) -> Result<Option<String>, StoreError> {
    Ok(load_json::<String>(store, ACCESS_TOKEN_KEY)?.filter(|t| !t.is_empty()))
}

/// # Errors
///
/// Returns an error when the token cannot be written.
pub fn save_access_token(store: &mut dyn KeyValueStore, token: &str) -> Result<(), StoreError> {
    save_json(store, ACCESS_TOKEN_KEY, token)
}

/// # Errors
///
/// Returns an error when the store cannot be written.
pub fn clear_access_token(store: &mut dyn KeyValueStore) -> Result<(), StoreError> {
    store.remove(ACCESS_TOKEN_KEY)
}
