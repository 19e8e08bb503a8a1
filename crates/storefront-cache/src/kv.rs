//! Key-Value store wrapper with automatic serialization.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::RwLock;

use crate::CacheError;
use serde::{de::DeserializeOwned, Serialize};

/// Type-safe key-value store standing in for the browser's local storage.
///
/// Values are kept as JSON documents, so anything that implements
/// `Serialize` and `DeserializeOwned` can be stored. The whole store can be
/// written to and read back from a snapshot file.
#[derive(Debug, Default)]
pub struct Cache {
    entries: RwLock<BTreeMap<String, serde_json::Value>>,
}

impl Cache {
    /// Open an empty store.
    ///
    /// # Example
    ///
    /// ```
    /// use storefront_cache::Cache;
    /// let cache = Cache::open_default();
    /// assert!(cache.keys().unwrap().is_empty());
    /// ```
    pub fn open_default() -> Self {
        Self::default()
    }

    /// Restore a store from a JSON snapshot string.
    pub fn from_snapshot(snapshot: &str) -> Result<Self, CacheError> {
        let entries: BTreeMap<String, serde_json::Value> = serde_json::from_str(snapshot)?;
        Ok(Self {
            entries: RwLock::new(entries),
        })
    }

    /// Load a store from a snapshot file.
    ///
    /// A missing file yields an empty store.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CacheError> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no snapshot on disk, starting empty");
            return Ok(Self::open_default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| CacheError::SnapshotIo {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_snapshot(&content)
    }

    /// Write the store to a snapshot file, creating parent directories.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), CacheError> {
        let path = path.as_ref();
        let io_err = |source| CacheError::SnapshotIo {
            path: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(io_err)?;
            }
        }

        std::fs::write(path, self.snapshot()?).map_err(io_err)?;
        tracing::debug!(path = %path.display(), "snapshot written");
        Ok(())
    }

    /// Serialize the whole store as a pretty JSON document.
    pub fn snapshot(&self) -> Result<String, CacheError> {
        let entries = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        Ok(serde_json::to_string_pretty(&*entries)?)
    }

    /// Get a value from the cache.
    ///
    /// Returns `None` if the key doesn't exist.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        let entries = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        match entries.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Set a value in the cache.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), CacheError> {
        let value = serde_json::to_value(value)?;
        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        entries.insert(key.to_string(), value);
        Ok(())
    }

    /// Delete a value from the cache.
    pub fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().map_err(|_| CacheError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }

    /// Check if a key exists in the cache.
    pub fn exists(&self, key: &str) -> Result<bool, CacheError> {
        let entries = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        Ok(entries.contains_key(key))
    }

    /// Get all keys in the cache, sorted.
    pub fn keys(&self) -> Result<Vec<String>, CacheError> {
        let entries = self.entries.read().map_err(|_| CacheError::Poisoned)?;
        Ok(entries.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Basket {
        ids: Vec<u32>,
    }

    #[test]
    fn test_set_get_delete() {
        let cache = Cache::open_default();
        let basket = Basket { ids: vec![1, 2] };

        cache.set("basket", &basket).unwrap();
        assert!(cache.exists("basket").unwrap());
        assert_eq!(cache.get::<Basket>("basket").unwrap(), Some(basket));

        cache.delete("basket").unwrap();
        assert!(!cache.exists("basket").unwrap());
        assert_eq!(cache.get::<Basket>("basket").unwrap(), None);
    }

    #[test]
    fn test_type_mismatch_is_an_error() {
        let cache = Cache::open_default();
        cache.set("basket", &"not a basket").unwrap();
        assert!(matches!(
            cache.get::<Basket>("basket"),
            Err(CacheError::SerializeError(_))
        ));
    }

    #[test]
    fn test_snapshot_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state.json");

        let cache = Cache::open_default();
        cache.set("compareList", &vec![3u32, 5]).unwrap();
        cache.save(&path).unwrap();

        let restored = Cache::load(&path).unwrap();
        assert_eq!(restored.keys().unwrap(), vec!["compareList".to_string()]);
        assert_eq!(
            restored.get::<Vec<u32>>("compareList").unwrap(),
            Some(vec![3, 5])
        );
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = Cache::load(dir.path().join("absent.json")).unwrap();
        assert!(cache.keys().unwrap().is_empty());
    }
}
