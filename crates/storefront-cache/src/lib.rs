//! Typed key-value local storage for the storefront.
//!
//! Plays the part of the browser's local storage: a process-local store
//! with automatic JSON serialization that can be snapshotted to a file.
//!
//! # Example
//!
//! ```
//! use storefront_cache::Cache;
//!
//! let cache = Cache::open_default();
//! cache.set("compareList", &vec![1u32, 2]).unwrap();
//!
//! let ids: Option<Vec<u32>> = cache.get("compareList").unwrap();
//! assert_eq!(ids, Some(vec![1, 2]));
//! ```

mod error;
mod kv;
mod record;

pub use error::CacheError;
pub use kv::Cache;
pub use record::{LocalRecord, StoredRecord};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, LocalRecord, StoredRecord};
}
