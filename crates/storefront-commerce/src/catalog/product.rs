//! Product records.

use crate::catalog::Category;
use crate::error::CommerceError;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Stock status shown on the comparison table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StockStatus {
    /// Plenty in stock.
    #[default]
    Available,
    /// Last units.
    Low,
    /// Sold out.
    Out,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::Available => "available",
            StockStatus::Low => "low",
            StockStatus::Out => "out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StockStatus::Available => "Em estoque",
            StockStatus::Low => "Últimas unidades",
            StockStatus::Out => "Esgotado",
        }
    }

    /// Font Awesome icon name for the stock badge.
    pub fn icon(&self) -> &'static str {
        match self {
            StockStatus::Available => "check-circle",
            StockStatus::Low => "exclamation-circle",
            StockStatus::Out => "times-circle",
        }
    }
}

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique positive identifier; higher ids are newer.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Category.
    pub category: Category,
    /// Current price.
    pub price: Money,
    /// Pre-markdown price, never below `price`.
    pub old_price: Option<Money>,
    /// Rating in [0, 5], half points allowed.
    pub rating: f64,
    /// Discount percentage in [0, 100]; 0 hides the badge.
    pub discount: u8,
    /// Whether shipping is free.
    pub free_shipping: bool,
    /// Stock status.
    #[serde(default)]
    pub stock: StockStatus,
    /// Card image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Create a product with no markdown, no rating and paid shipping.
    pub fn new(id: u32, name: impl Into<String>, category: Category, price: f64) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
            category,
            price: Money::from_decimal(price, Currency::BRL),
            old_price: None,
            rating: 0.0,
            discount: 0,
            free_shipping: false,
            stock: StockStatus::Available,
            image: None,
        }
    }

    pub fn with_old_price(mut self, old_price: f64) -> Self {
        self.old_price = Some(Money::from_decimal(old_price, self.price.currency));
        self
    }

    pub fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    pub fn with_discount(mut self, discount: u8) -> Self {
        self.discount = discount;
        self
    }

    pub fn with_free_shipping(mut self, free_shipping: bool) -> Self {
        self.free_shipping = free_shipping;
        self
    }

    pub fn with_stock(mut self, stock: StockStatus) -> Self {
        self.stock = stock;
        self
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    /// Check the record against the data-model rules.
    pub fn validate(&self) -> Result<(), CommerceError> {
        let invalid = |reason: &str| CommerceError::InvalidProduct {
            id: self.id,
            reason: reason.to_string(),
        };

        if !self.id.is_valid() {
            return Err(invalid("id must be positive"));
        }
        if self.price.is_negative() {
            return Err(invalid("price must not be negative"));
        }
        if let Some(old) = self.old_price {
            if old.cmp_amount(&self.price).is_lt() {
                return Err(invalid("old price is below the current price"));
            }
        }
        if !(0.0..=5.0).contains(&self.rating) {
            return Err(invalid("rating must be within 0..=5"));
        }
        if self.discount > 100 {
            return Err(invalid("discount must be within 0..=100"));
        }
        Ok(())
    }

    /// Case-insensitive substring match on name or category.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.contains_text(needle)
    }

    /// Badge text such as `-40%`, or `None` when there is no discount.
    pub fn discount_badge(&self) -> Option<String> {
        (self.discount > 0).then(|| format!("-{}%", self.discount))
    }

    /// Amount saved against the old price.
    pub fn savings(&self) -> Option<Money> {
        self.old_price.and_then(|old| old.try_subtract(&self.price))
    }

    /// Star breakdown for the rating widget.
    pub fn stars(&self) -> StarRating {
        StarRating::from_rating(self.rating)
    }
}

/// Full, half and empty stars for a rating out of five.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StarRating {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarRating {
    pub fn from_rating(rating: f64) -> Self {
        let rating = rating.clamp(0.0, 5.0);
        Self {
            full: rating.floor() as u8,
            half: rating.fract() != 0.0,
            empty: 5 - rating.ceil() as u8,
        }
    }
}
