//! The persisted compare basket fed by the buttons on product cards.

use storefront_cache::{Cache, LocalRecord};

use crate::catalog::Catalog;
use crate::compare::{ComparisonSlots, COMPARE_SLOTS};
use crate::error::CommerceError;
use crate::ids::ProductId;

/// Storage key used by default.
pub const COMPARE_LIST_KEY: &str = "compareList";

/// Outcome of adding to the basket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareAdd {
    Added,
    AlreadyListed,
}

/// Ordered, duplicate-free basket of products waiting to be compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareList {
    ids: Vec<ProductId>,
    capacity: usize,
}

impl CompareList {
    /// Empty basket holding at most `capacity` products (at least 1).
    pub fn new(capacity: usize) -> Self {
        Self {
            ids: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Load the basket stored under `key`, empty when absent.
    ///
    /// Stored entries beyond `capacity` are dropped.
    pub fn load(cache: &Cache, key: &str, capacity: usize) -> Result<Self, CommerceError> {
        let mut list = Self::new(capacity);
        let stored: Vec<ProductId> = LocalRecord::new(cache, key).get_or_default()?;
        for id in stored {
            if list.ids.len() == list.capacity {
                break;
            }
            if !list.ids.contains(&id) {
                list.ids.push(id);
            }
        }
        Ok(list)
    }

    /// Write the basket under `key`.
    pub fn save(&self, cache: &Cache, key: &str) -> Result<(), CommerceError> {
        let version = LocalRecord::new(cache, key).set(&self.ids)?;
        tracing::debug!(key, version, count = self.ids.len(), "compare list saved");
        Ok(())
    }

    /// Add a product.
    ///
    /// A full basket rejects every add, even of a product already listed.
    pub fn add(&mut self, id: ProductId) -> Result<CompareAdd, CommerceError> {
        if self.is_full() {
            return Err(CommerceError::CompareListFull(self.capacity));
        }
        if self.ids.contains(&id) {
            return Ok(CompareAdd::AlreadyListed);
        }
        self.ids.push(id);
        Ok(CompareAdd::Added)
    }

    /// Remove a product, returning whether it was listed.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.ids.len();
        self.ids.retain(|listed| *listed != id);
        self.ids.len() != before
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn ids(&self) -> &[ProductId] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ids.len() >= self.capacity
    }

    /// Counter shown on the nav icon; hidden while empty.
    pub fn badge(&self) -> Option<usize> {
        (!self.ids.is_empty()).then_some(self.ids.len())
    }

    /// Fill comparison slots left to right from the basket.
    ///
    /// Fails when a listed product is missing from the catalog. Products
    /// past the last slot are ignored.
    pub fn to_slots(&self, catalog: &Catalog) -> Result<ComparisonSlots, CommerceError> {
        let mut slots = ComparisonSlots::new();
        for (slot, id) in self.ids.iter().take(COMPARE_SLOTS).enumerate() {
            slots.place(slot, catalog.require(*id)?.clone())?;
        }
        Ok(slots)
    }
}

impl Default for CompareList {
    fn default() -> Self {
        Self::new(COMPARE_SLOTS)
    }
}
