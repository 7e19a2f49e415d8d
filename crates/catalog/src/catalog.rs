use std::collections::HashSet;

use thiserror::Error;

use vitrine_core::{DomainError, ProductId};

use crate::product::Product;

/// Errors raised while ingesting a catalog snapshot.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to parse catalog snapshot: {0}")]
    Parse(String),

    #[error("duplicate product id: {0}")]
    DuplicateProduct(ProductId),

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Read-only product collection, refreshed out-of-band by its provider.
///
/// Iteration order is the provider's listing order; relevance-sorted views
/// preserve it. Replacing the whole value is the only way the catalog
/// changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, enforcing the one invariant downstream code relies
    /// on: product ids are unique.
    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            product.validate()?;
            if !seen.insert(product.id) {
                return Err(CatalogError::DuplicateProduct(product.id));
            }
        }
        Ok(Self { products })
    }

    /// Parse a JSON array snapshot as delivered by the upstream feed.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, CatalogError> {
        let products: Vec<Product> =
            serde_json::from_slice(bytes).map_err(|e| CatalogError::Parse(e.to_string()))?;
        Self::from_products(products)
    }

    /// All products in listing order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Products to cross-sell next to `product`: same category and
    /// subcategory, the product itself excluded, listing order, capped at
    /// `limit`.
    pub fn related(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.id != product.id)
            .filter(|p| p.category == product.category && p.sub_category == product.sub_category)
            .take(limit)
            .collect()
    }
}
