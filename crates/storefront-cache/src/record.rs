//! Versioned records stored under a single key.

use std::marker::PhantomData;

use crate::{Cache, CacheError};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Envelope written to the store for every record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredRecord<T> {
    /// User-defined record data.
    pub data: T,
    /// Incremented on every write, starting at 1.
    pub version: u64,
    /// When the record was first written (Unix timestamp).
    pub created_at: u64,
    /// When the record was last written (Unix timestamp).
    pub updated_at: u64,
}

/// Typed handle to one key of a [`Cache`].
///
/// # Example
///
/// ```
/// use storefront_cache::{Cache, LocalRecord};
///
/// let cache = Cache::open_default();
/// let basket = LocalRecord::<Vec<u32>>::new(&cache, "compareList");
///
/// basket.update(|ids| ids.push(4)).unwrap();
/// assert_eq!(basket.get_or_default().unwrap(), vec![4]);
/// ```
pub struct LocalRecord<'a, T> {
    cache: &'a Cache,
    key: String,
    _phantom: PhantomData<T>,
}

impl<'a, T> LocalRecord<'a, T>
where
    T: Serialize + DeserializeOwned + Default + Clone,
{
    /// Bind a record to `key` in `cache`.
    pub fn new(cache: &'a Cache, key: impl Into<String>) -> Self {
        Self {
            cache,
            key: key.into(),
            _phantom: PhantomData,
        }
    }

    /// The storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the record data if it exists.
    pub fn get(&self) -> Result<Option<T>, CacheError> {
        Ok(self.get_versioned()?.map(|r| r.data))
    }

    /// Get the record data, or `T::default()` when nothing is stored yet.
    pub fn get_or_default(&self) -> Result<T, CacheError> {
        Ok(self.get()?.unwrap_or_default())
    }

    /// Get the full envelope including version and timestamps.
    pub fn get_versioned(&self) -> Result<Option<StoredRecord<T>>, CacheError> {
        self.cache.get::<StoredRecord<T>>(&self.key)
    }

    /// Write the record, bumping its version.
    pub fn set(&self, data: &T) -> Result<u64, CacheError> {
        let now = unix_now();
        let (version, created_at) = match self.get_versioned()? {
            Some(existing) => (existing.version + 1, existing.created_at),
            None => (1, now),
        };

        let record = StoredRecord {
            data: data.clone(),
            version,
            created_at,
            updated_at: now,
        };
        self.cache.set(&self.key, &record)?;
        tracing::trace!(key = %self.key, version, "record written");
        Ok(version)
    }

    /// Read-modify-write the record with a closure and return the new data.
    pub fn update<F>(&self, f: F) -> Result<T, CacheError>
    where
        F: FnOnce(&mut T),
    {
        let mut data = self.get_or_default()?;
        f(&mut data);
        self.set(&data)?;
        Ok(data)
    }

    /// Delete the record.
    pub fn delete(&self) -> Result<(), CacheError> {
        self.cache.delete(&self.key)
    }

    /// Check if the record exists.
    pub fn exists(&self) -> Result<bool, CacheError> {
        self.cache.exists(&self.key)
    }
}

fn unix_now() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
