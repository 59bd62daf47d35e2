//! Key-value persistence for favorite palette names.
//!
//! The store holds plain strings under string keys. Favorites live under a
//! single key as a JSON array of names.

use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::PathBuf;

use thiserror::Error;

/// Key under which the favorites array is saved.
pub const FAVORITES_KEY: &str = "colorPaletteFavorites";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store contents are not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A flat string store, in the manner of browser local storage.
pub trait FavoritesStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Store backed by a JSON object file (`{ "key": "value", ... }`).
///
/// Every `set` rewrites the whole file; other keys already present are kept.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(text) if text.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(source) => Err(StoreError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

impl FavoritesStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking every later write.
        let mut all = self.read_all().unwrap_or_default();
        all.insert(key.to_string(), value.to_string());

        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let text = serde_json::to_string_pretty(&all)?;
        fs::write(&self.path, text).map_err(io_err)
    }
}

/// In-process store; nothing survives the session.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Read the saved favorites. Missing or unreadable data yields an empty set.
pub fn restore(store: &dyn FavoritesStore) -> BTreeSet<String> {
    let raw = match store.get(FAVORITES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return BTreeSet::new(),
        Err(e) => {
            tracing::warn!(error = %e, "failed to load favorites");
            return BTreeSet::new();
        }
    };
    match serde_json::from_str::<Vec<String>>(&raw) {
        Ok(names) => {
            tracing::debug!(count = names.len(), "restored favorites");
            names.into_iter().collect()
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse saved favorites");
            BTreeSet::new()
        }
    }
}

/// Save `favorites`. Failures are logged and otherwise ignored.
pub fn persist(store: &mut dyn FavoritesStore, favorites: &BTreeSet<String>) {
    let names: Vec<&str> = favorites.iter().map(String::as_str).collect();
    let result = serde_json::to_string(&names)
        .map_err(StoreError::from)
        .and_then(|json| store.set(FAVORITES_KEY, &json));
    if let Err(e) = result {
        tracing::error!(error = %e, "failed to save favorites");
    }
}

#[cfg(test)]
#[path = "../tests/helpers/mod.rs"]
#[allow(dead_code)]
mod helpers;
