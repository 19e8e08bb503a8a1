//! Declarative filter criteria and the filter pass over a product list.

use std::collections::BTreeSet;

use crate::catalog::{Category, Product};
use serde::{Deserialize, Serialize};

/// The user's current narrowing conditions.
///
/// Every field is independently optional and the default value matches
/// every product, so filtering can only ever narrow a list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against name and category.
    pub query: Option<String>,
    /// Allowed categories; empty means all.
    pub categories: BTreeSet<Category>,
    /// Inclusive lower price bound, in currency units. Absent means 0.
    pub min_price: Option<f64>,
    /// Inclusive upper price bound, in currency units. Absent means unbounded.
    pub max_price: Option<f64>,
    /// Minimum rating.
    pub min_rating: Option<f64>,
    /// Minimum discount percentage.
    pub min_discount: Option<u8>,
    /// Only products with free shipping.
    pub require_free_shipping: bool,
}

impl FilterCriteria {
    /// Criteria that match everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query. Blank queries clear it.
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    /// Add an allowed category.
    pub fn with_category(mut self, category: Category) -> Self {
        self.categories.insert(category);
        self
    }

    /// Set both price bounds.
    pub fn with_price_range(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_min_rating(mut self, rating: f64) -> Self {
        self.min_rating = Some(rating);
        self
    }

    pub fn with_min_discount(mut self, discount: u8) -> Self {
        self.min_discount = Some(discount);
        self
    }

    pub fn with_free_shipping(mut self) -> Self {
        self.require_free_shipping = true;
        self
    }

    /// Replace the text query, trimming it and treating blank as absent.
    pub fn set_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        let trimmed = query.trim();
        self.query = (!trimmed.is_empty()).then(|| trimmed.to_string());
    }

    /// True when these criteria match every product.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Whether a single product survives every predicate.
    pub fn matches(&self, product: &Product) -> bool {
        let needle = self.query.as_deref().map(str::to_lowercase);
        self.matches_with(product, needle.as_deref())
    }

    /// Filter `products`, preserving their order.
    ///
    /// Pure: the input is untouched and a new vector is returned.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let needle = self.query.as_deref().map(str::to_lowercase);
        products
            .iter()
            .filter(|p| self.matches_with(p, needle.as_deref()))
            .cloned()
            .collect()
    }

    fn matches_with(&self, product: &Product, needle: Option<&str>) -> bool {
        if let Some(needle) = needle {
            if !product.matches_text(needle) {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&product.category) {
            return false;
        }

        let price = product.price.to_decimal();
        let min = self.min_price.unwrap_or(0.0);
        let max = self.max_price.unwrap_or(f64::INFINITY);
        if price < min || price > max {
            return false;
        }

        if let Some(min_rating) = self.min_rating {
            if product.rating < min_rating {
                return false;
            }
        }

        if let Some(min_discount) = self.min_discount {
            if product.discount < min_discount {
                return false;
            }
        }

        !self.require_free_shipping || product.free_shipping
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::reference_catalog;

    fn names(products: &[Product]) -> Vec<&str> {
        products.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_default_matches_everything_in_order() {
        let catalog = reference_catalog();
        let criteria = FilterCriteria::new();
        assert!(criteria.is_default());
        assert_eq!(criteria.apply(catalog.products()), catalog.products());
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let catalog = reference_catalog();
        let results = FilterCriteria::new()
            .with_query("NIKE")
            .apply(catalog.products());
        assert_eq!(names(&results), vec!["Tênis Nike Air Max"]);
    }

    #[test]
    fn test_query_matches_category() {
        let catalog = reference_catalog();
        let results = FilterCriteria::new()
            .with_query("games")
            .apply(catalog.products());
        assert_eq!(names(&results), vec!["Console PlayStation 5", "Fone Gamer RGB"]);
    }

    #[test]
    fn test_blank_query_is_absent() {
        let criteria = FilterCriteria::new().with_query("   ");
        assert_eq!(criteria.query, None);
        assert!(criteria.is_default());
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let catalog = reference_catalog();
        let results = FilterCriteria::new()
            .with_price_range(Some(254.90), Some(479.90))
            .apply(catalog.products());
        assert_eq!(
            names(&results),
            vec!["Tênis Nike Air Max", "Fone Gamer RGB", "Conjunto de Halteres"]
        );
    }

    #[test]
    fn test_inverted_price_range_is_empty() {
        let catalog = reference_catalog();
        let results = FilterCriteria::new()
            .with_price_range(Some(1000.0), Some(10.0))
            .apply(catalog.products());
        assert!(results.is_empty());
    }

    #[test]
    fn test_rating_and_shipping() {
        let catalog = reference_catalog();
        let results = FilterCriteria::new()
            .with_min_rating(5.0)
            .with_free_shipping()
            .apply(catalog.products());
        assert_eq!(
            names(&results),
            vec![
                "iPhone 15 Pro Max",
                "Notebook Dell Inspiron",
                "AirPods Pro 2",
                "Apple Watch Series 9",
                "Console PlayStation 5"
            ]
        );
    }

    #[test]
    fn test_category_and_discount() {
        let catalog = reference_catalog();
        let results = FilterCriteria::new()
            .with_category(Category::Electronics)
            .with_min_discount(40)
            .apply(catalog.products());
        assert_eq!(names(&results), vec!["Smart TV 65\" 4K", "Apple Watch Series 9"]);
    }

    #[test]
    fn test_matches_single_product() {
        let catalog = reference_catalog();
        let criteria = FilterCriteria::new().with_category(Category::Fashion);
        let fashion: Vec<_> = catalog.iter().filter(|p| criteria.matches(p)).collect();
        assert_eq!(fashion.len(), 2);
    }
}
