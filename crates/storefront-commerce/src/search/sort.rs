//! Sort options for search results.

use std::cmp::Ordering;

use crate::catalog::Product;
use serde::{Deserialize, Serialize};

/// Sort options for search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order.
    #[default]
    Relevance,
    /// Sort by price, low to high.
    PriceAsc,
    /// Sort by price, high to low.
    PriceDesc,
    /// Sort by highest rated.
    Rating,
    /// Sort by biggest discount.
    Discount,
    /// Sort by newest first (highest id).
    Newest,
}

impl SortKey {
    /// Every key, in selector order.
    pub const ALL: [SortKey; 6] = [
        SortKey::Relevance,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Rating,
        SortKey::Discount,
        SortKey::Newest,
    ];

    /// Parse a sort selector value. Unknown values mean relevance.
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "price-asc" => SortKey::PriceAsc,
            "price-desc" => SortKey::PriceDesc,
            "rating" => SortKey::Rating,
            "discount" => SortKey::Discount,
            "newest" => SortKey::Newest,
            _ => SortKey::Relevance,
        }
    }

    /// Selector value.
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Relevance => "relevance",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Rating => "rating",
            SortKey::Discount => "discount",
            SortKey::Newest => "newest",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortKey::Relevance => "Mais relevantes",
            SortKey::PriceAsc => "Menor preço",
            SortKey::PriceDesc => "Maior preço",
            SortKey::Rating => "Melhor avaliados",
            SortKey::Discount => "Maior desconto",
            SortKey::Newest => "Mais recentes",
        }
    }

    /// Whether this key leaves the input order untouched.
    pub fn is_identity(&self) -> bool {
        *self == SortKey::Relevance
    }

    /// Compare two products under this key.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Relevance => Ordering::Equal,
            SortKey::PriceAsc => a.price.cmp_amount(&b.price),
            SortKey::PriceDesc => b.price.cmp_amount(&a.price),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
            SortKey::Discount => b.discount.cmp(&a.discount),
            SortKey::Newest => b.id.cmp(&a.id),
        }
    }

    /// Return a reordered copy of `products`.
    ///
    /// The sort is stable, so ties keep their relative input order.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut sorted = products.to_vec();
        if !self.is_identity() {
            sorted.sort_by(|a, b| self.compare(a, b));
        }
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::reference_catalog;

    fn ids(products: &[Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.get()).collect()
    }

    #[test]
    fn test_parse_roundtrip() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
        assert_eq!(SortKey::parse("bogus"), SortKey::Relevance);
        assert_eq!(SortKey::parse(""), SortKey::Relevance);
    }

    #[test]
    fn test_relevance_is_identity() {
        let catalog = reference_catalog();
        assert_eq!(SortKey::Relevance.apply(catalog.products()), catalog.products());
    }

    #[test]
    fn test_price_asc() {
        let catalog = reference_catalog();
        let sorted = SortKey::PriceAsc.apply(catalog.products());
        assert_eq!(ids(&sorted), vec![7, 8, 12, 11, 2, 9, 5, 4, 10, 6, 3, 1]);
    }

    #[test]
    fn test_rating_ties_keep_catalog_order() {
        let catalog = reference_catalog();
        let sorted = SortKey::Rating.apply(catalog.products());
        assert_eq!(ids(&sorted), vec![1, 3, 5, 6, 10, 2, 4, 7, 9, 11, 12, 8]);
    }

    #[test]
    fn test_discount_desc() {
        let catalog = reference_catalog();
        let sorted = SortKey::Discount.apply(catalog.products());
        assert_eq!(ids(&sorted), vec![4, 6, 2, 5, 1, 3, 7, 12, 9, 11, 10, 8]);
    }

    #[test]
    fn test_newest() {
        let catalog = reference_catalog();
        let sorted = SortKey::Newest.apply(catalog.products());
        assert_eq!(ids(&sorted), (1..=12).rev().collect::<Vec<_>>());
    }

    #[test]
    fn test_input_not_mutated() {
        let catalog = reference_catalog();
        let before = catalog.products().to_vec();
        let _ = SortKey::PriceDesc.apply(catalog.products());
        assert_eq!(catalog.products(), before.as_slice());
    }
}
