//! Commerce error types.
//!
//! Filtering, sorting and paging never fail; these errors cover catalog
//! validation, comparison slots and local storage.

use crate::ids::ProductId;
use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Two catalog records share an id.
    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProduct(ProductId),

    /// A catalog record breaks a data-model rule.
    #[error("Invalid product {id}: {reason}")]
    InvalidProduct { id: ProductId, reason: String },

    /// Product is already in one of the comparison slots.
    #[error("Product {0} is already being compared")]
    AlreadyCompared(ProductId),

    /// Comparison slot index out of range.
    #[error("Comparison slot {slot} out of range (0..{slots})")]
    InvalidSlot { slot: usize, slots: usize },

    /// The compare basket is at capacity.
    #[error("Compare list is full ({0} products)")]
    CompareListFull(usize),

    /// Storage error.
    #[error("Storage error: {0}")]
    StorageError(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<storefront_cache::CacheError> for CommerceError {
    fn from(e: storefront_cache::CacheError) -> Self {
        CommerceError::StorageError(e.to_string())
    }
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
