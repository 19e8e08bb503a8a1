//! Snapshots of the filter widgets, as supplied by the renderer.
//!
//! Values arrive exactly as typed or as the `value` of each checked box.
//! Interpreting them never fails: anything that does not parse is dropped.

use std::collections::BTreeSet;

use crate::catalog::Category;
use crate::search::{FilterCriteria, SortKey};
use serde::{Deserialize, Serialize};

/// Raw state of every filter control on the search page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterInputs {
    /// Search box text.
    #[serde(default)]
    pub query: String,
    /// Values of checked category boxes.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Minimum price field, as typed.
    #[serde(default)]
    pub min_price: String,
    /// Maximum price field, as typed.
    #[serde(default)]
    pub max_price: String,
    /// Values of checked rating-threshold boxes (e.g. "4").
    #[serde(default)]
    pub ratings: Vec<String>,
    /// Values of checked discount-threshold boxes (e.g. "30").
    #[serde(default)]
    pub discounts: Vec<String>,
    /// Free-shipping box.
    #[serde(default)]
    pub free_shipping: bool,
    /// Sort selector value.
    #[serde(default)]
    pub sort: String,
}

impl FilterInputs {
    /// Interpret the snapshot as filter criteria.
    ///
    /// Rating and discount thresholds use the smallest checked value.
    pub fn criteria(&self) -> FilterCriteria {
        let categories: BTreeSet<Category> = self
            .categories
            .iter()
            .filter_map(|value| Category::parse(value))
            .collect();

        let min_rating = self
            .ratings
            .iter()
            .filter_map(|value| parse_decimal(value))
            .reduce(f64::min);

        let min_discount = self
            .discounts
            .iter()
            .filter_map(|value| parse_decimal(value))
            .filter(|d| *d <= 100.0)
            .reduce(f64::min)
            // Discounts are whole percents, so "39.5" means at least 40.
            .map(|d| d.ceil() as u8);

        let mut criteria = FilterCriteria {
            query: None,
            categories,
            min_price: parse_decimal(&self.min_price),
            max_price: parse_decimal(&self.max_price),
            min_rating,
            min_discount,
            require_free_shipping: self.free_shipping,
        };
        criteria.set_query(self.query.as_str());
        criteria
    }

    /// Interpret the sort selector.
    pub fn sort_key(&self) -> SortKey {
        SortKey::parse(&self.sort)
    }
}

/// Parse a non-negative decimal typed into a form field.
///
/// Accepts a comma as decimal separator. Returns `None` for blank,
/// malformed, negative or non-finite input.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let normalized = raw.trim().replace(',', ".");
    if normalized.is_empty() {
        return None;
    }
    normalized
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
}
