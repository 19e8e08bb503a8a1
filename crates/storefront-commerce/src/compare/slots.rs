//! The four side-by-side comparison slots.

use crate::catalog::{Catalog, Product};
use crate::compare::{pick_winner, score, ScoredProduct};
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::search::FilterCriteria;

/// Number of columns on the comparison page.
pub const COMPARE_SLOTS: usize = 4;

/// Fixed-size comparison table.
///
/// A slot is chosen with [`open_selector`](Self::open_selector) and filled
/// by [`select`](Self::select), mirroring the pick-a-product dialog.
#[derive(Debug, Clone, Default)]
pub struct ComparisonSlots {
    slots: [Option<Product>; COMPARE_SLOTS],
    current_slot: usize,
}

impl ComparisonSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `slot` as the target of the next selection.
    pub fn open_selector(&mut self, slot: usize) -> Result<(), CommerceError> {
        check_slot(slot)?;
        self.current_slot = slot;
        Ok(())
    }

    /// Slot the next selection lands in.
    pub fn current_slot(&self) -> usize {
        self.current_slot
    }

    /// Put `product` into the current slot, replacing whatever was there.
    pub fn select(&mut self, product: Product) -> Result<(), CommerceError> {
        if self.contains(product.id) {
            return Err(CommerceError::AlreadyCompared(product.id));
        }
        tracing::debug!(slot = self.current_slot, product = %product.id, "product compared");
        self.slots[self.current_slot] = Some(product);
        Ok(())
    }

    /// Open `slot` and select `product` into it.
    pub fn place(&mut self, slot: usize, product: Product) -> Result<(), CommerceError> {
        self.open_selector(slot)?;
        self.select(product)
    }

    /// Empty a slot, returning its product.
    pub fn remove(&mut self, slot: usize) -> Result<Option<Product>, CommerceError> {
        check_slot(slot)?;
        Ok(self.slots[slot].take())
    }

    /// Empty every slot.
    pub fn clear(&mut self) {
        self.slots = Default::default();
        self.current_slot = 0;
    }

    pub fn slots(&self) -> &[Option<Product>] {
        &self.slots
    }

    pub fn contains(&self, id: ProductId) -> bool {
        self.filled().any(|(_, p)| p.id == id)
    }

    /// Whether any slot is filled; the table is hidden otherwise.
    pub fn has_products(&self) -> bool {
        self.slots.iter().any(Option::is_some)
    }

    /// Filled slots with their indices, left to right.
    pub fn filled(&self) -> impl Iterator<Item = (usize, &Product)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(slot, product)| product.as_ref().map(|p| (slot, p)))
    }

    /// Score of every filled slot, left to right.
    pub fn scores(&self) -> Vec<ScoredProduct<'_>> {
        self.filled()
            .map(|(slot, product)| ScoredProduct {
                slot,
                product,
                score: score(product),
            })
            .collect()
    }

    /// Best-value product, once at least two slots are filled.
    pub fn winner(&self) -> Option<ScoredProduct<'_>> {
        let winner = pick_winner(&self.scores());
        if let Some(w) = &winner {
            tracing::debug!(product = %w.product.id, score = w.score, "comparison winner");
        }
        winner
    }
}

/// Products offered by the selector dialog for the typed text.
///
/// Matches name or category like the search box; blank text lists everything.
pub fn selector_candidates(catalog: &Catalog, text: &str) -> Vec<Product> {
    FilterCriteria::new()
        .with_query(text)
        .apply(catalog.products())
}

fn check_slot(slot: usize) -> Result<(), CommerceError> {
    if slot >= COMPARE_SLOTS {
        return Err(CommerceError::InvalidSlot {
            slot,
            slots: COMPARE_SLOTS,
        });
    }
    Ok(())
}
