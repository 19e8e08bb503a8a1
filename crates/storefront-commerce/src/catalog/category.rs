//! The closed set of storefront categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Games,
    Sports,
}

impl Category {
    /// Every category, in menu order.
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Fashion,
        Category::Home,
        Category::Games,
        Category::Sports,
    ];

    /// Stable slug used in URLs and filter values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Fashion => "fashion",
            Category::Home => "home",
            Category::Games => "games",
            Category::Sports => "sports",
        }
    }

    /// Slug used by the storefront's original markup.
    pub fn legacy_slug(&self) -> &'static str {
        match self {
            Category::Electronics => "eletronicos",
            Category::Fashion => "moda",
            Category::Home => "casa",
            Category::Games => "games",
            Category::Sports => "esportes",
        }
    }

    /// Label shown on product cards.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Eletrônicos",
            Category::Fashion => "Moda",
            Category::Home => "Casa",
            Category::Games => "Games",
            Category::Sports => "Esportes",
        }
    }

    /// Parse a slug, legacy slug or label, case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let needle = s.trim().to_lowercase();
        Self::ALL.into_iter().find(|c| {
            needle == c.as_str() || needle == c.legacy_slug() || needle == c.label().to_lowercase()
        })
    }

    /// Whether a lowercase search needle occurs in any name of this category.
    pub(crate) fn contains_text(&self, needle: &str) -> bool {
        self.as_str().contains(needle)
            || self.legacy_slug().contains(needle)
            || self.label().to_lowercase().contains(needle)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
