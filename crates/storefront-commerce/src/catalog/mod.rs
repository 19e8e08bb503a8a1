//! Product catalog module.
//!
//! The catalog is a static, ordered list of products. Order matters: it is
//! the "relevance" order of search results.

mod category;
mod product;
mod reference;

pub use category::Category;
pub use product::{Product, StarRating, StockStatus};
pub use reference::reference_catalog;

use std::collections::HashSet;

use crate::error::CommerceError;
use crate::ids::ProductId;
use serde::Serialize;

/// Read-only, ordered product collection.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, validating every record and id uniqueness.
    pub fn new(products: Vec<Product>) -> Result<Self, CommerceError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(CommerceError::DuplicateProduct(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Parse and validate a catalog from a JSON array of products.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::new(products)
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Look up a product by id, failing when it is missing.
    pub fn require(&self, id: ProductId) -> Result<&Product, CommerceError> {
        self.get(id).ok_or(CommerceError::ProductNotFound(id))
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_ids_rejected() {
        let products = vec![
            Product::new(1, "A", Category::Home, 10.0),
            Product::new(1, "B", Category::Home, 20.0),
        ];
        assert!(matches!(
            Catalog::new(products),
            Err(CommerceError::DuplicateProduct(id)) if id == ProductId::new(1)
        ));
    }

    #[test]
    fn test_lookup() {
        let catalog = reference_catalog();
        assert_eq!(catalog.get(ProductId::new(2)).unwrap().name, "Tênis Nike Air Max");
        assert!(catalog.get(ProductId::new(99)).is_none());
        assert!(matches!(
            catalog.require(ProductId::new(99)),
            Err(CommerceError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 1, "name": "Mesa", "category": "home",
             "price": {"amount_cents": 15000, "currency": "BRL"},
             "old_price": null, "rating": 4.0, "discount": 0, "free_shipping": false}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.products()[0].stock, StockStatus::Available);
    }

    #[test]
    fn test_from_json_validates() {
        let json = r#"[
            {"id": 0, "name": "Nada", "category": "home",
             "price": {"amount_cents": 100, "currency": "BRL"},
             "old_price": null, "rating": 4.0, "discount": 0, "free_shipping": false}
        ]"#;
        assert!(Catalog::from_json(json).is_err());
    }
}
