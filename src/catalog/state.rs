//! Product Catalog State
//!
//! This module owns the in-memory mapping from product id to product.

use super::helpers::format_catalog_line;
use super::models::{Product, ProductId};
use std::collections::BTreeMap;

// =============================================================================
// Product Catalog
// =============================================================================

/// The set of purchasable products, keyed by id.
///
/// Backed by a `BTreeMap` so listings always come out in ascending id order.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: BTreeMap<ProductId, Product>,
}

impl ProductCatalog {
    /// Creates an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from a list of products, later ids overwriting
    /// earlier ones.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        let mut catalog = Self::new();
        for product in products {
            catalog.add_product(product);
        }
        catalog
    }

    /// Inserts `product`, replacing any entry with the same id.
    ///
    /// Returns the product that was replaced, if there was one.
    pub fn add_product(&mut self, product: Product) -> Option<Product> {
        let replaced = self.products.insert(product.id, product);
        if let Some(old) = &replaced {
            tracing::debug!(
                event_name = "catalog.product.overwritten",
                product_id = old.id,
                "catalog entry replaced"
            );
        }
        replaced
    }

    /// Looks up a product by id.
    pub fn get_product(&self, id: ProductId) -> Option<&Product> {
        self.products.get(&id)
    }

    /// Renders the catalog as the `Available Products:` listing.
    pub fn list_products(&self) -> String {
        let mut listing = String::from("Available Products:\n");
        for product in self.products.values() {
            listing.push_str(&format_catalog_line(product));
            listing.push('\n');
        }
        listing
    }

    /// Products in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    /// Number of distinct product ids
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// True when no product has been added
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> ProductCatalog {
        ProductCatalog::from_products([
            Product::new(1, "Laptop", 1000.0),
            Product::new(2, "Phone", 500.0),
            Product::new(3, "T-shirt", 20.0),
        ])
    }

    #[test]
    fn test_get_product_returns_stored_product() {
        let catalog = seeded();
        for product in catalog.iter() {
            assert_eq!(catalog.get_product(product.id), Some(product));
        }
        assert_eq!(
            catalog.get_product(2),
            Some(&Product::new(2, "Phone", 500.0))
        );
    }

    #[test]
    fn test_get_product_unknown_id() {
        let catalog = seeded();
        assert!(catalog.get_product(99).is_none());
        assert!(catalog.get_product(0).is_none());
    }

    #[test]
    fn test_add_product_overwrites_same_id() {
        let mut catalog = seeded();
        let replaced = catalog.add_product(Product::new(2, "Smartphone", 650.0));

        assert_eq!(replaced, Some(Product::new(2, "Phone", 500.0)));
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get_product(2).unwrap().name, "Smartphone");
    }

    #[test]
    fn test_add_product_does_not_check_price_sign() {
        let mut catalog = ProductCatalog::new();
        assert!(catalog.add_product(Product::new(7, "Refund", -5.0)).is_none());
        assert_eq!(catalog.get_product(7).unwrap().price, -5.0);
    }

    #[test]
    fn test_list_products_sorted_by_id() {
        let catalog = ProductCatalog::from_products([
            Product::new(3, "T-shirt", 20.0),
            Product::new(1, "Laptop", 1000.0),
            Product::new(2, "Phone", 500.0),
        ]);

        assert_eq!(
            catalog.list_products(),
            "Available Products:\n1. Laptop - $1000\n2. Phone - $500\n3. T-shirt - $20\n"
        );
    }

    #[test]
    fn test_list_products_empty_catalog() {
        let catalog = ProductCatalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.list_products(), "Available Products:\n");
    }
}
