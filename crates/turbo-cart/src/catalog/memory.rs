//! In-memory catalog for fixtures and offline use.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogService, Product, Stock};
use crate::error::CatalogError;
use crate::ids::ProductId;

/// A json-server style database document.
///
/// ```json
/// { "products": [{ "id": 1, "title": "...", "price": 179.9, "image": "..." }],
///   "stock":    [{ "id": 1, "amount": 3 }] }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogDb {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub stock: Vec<Stock>,
}

/// Catalog answering lookups from fixed product and stock tables.
///
/// Unknown ids fail with [`CatalogError::NotFound`]. Lookup counts are kept
/// so callers can observe which remote calls an operation would have made.
#[derive(Debug, Default)]
pub struct StaticCatalog {
    products: BTreeMap<ProductId, Product>,
    stock: BTreeMap<ProductId, Stock>,
    stock_lookups: AtomicUsize,
    product_lookups: AtomicUsize,
}

impl StaticCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a database document.
    pub fn from_db(db: CatalogDb) -> Self {
        let mut catalog = Self::new();
        for product in db.products {
            catalog.products.insert(product.id, product.with_amount(0));
        }
        for stock in db.stock {
            catalog.stock.insert(stock.id, stock);
        }
        catalog
    }

    /// Parse a json-server style `db.json` document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let db: CatalogDb = serde_json::from_str(json)
            .map_err(|e| CatalogError::Deserialization(e.to_string()))?;
        Ok(Self::from_db(db))
    }

    /// Add or replace a product.
    pub fn with_product(mut self, product: Product) -> Self {
        self.products.insert(product.id, product);
        self
    }

    /// Add or replace a stock record.
    pub fn with_stock(mut self, product_id: ProductId, amount: i64) -> Self {
        self.stock.insert(product_id, Stock::new(product_id, amount));
        self
    }

    /// Number of stock lookups served so far.
    pub fn stock_lookups(&self) -> usize {
        self.stock_lookups.load(Ordering::Relaxed)
    }

    /// Number of product lookups served so far.
    pub fn product_lookups(&self) -> usize {
        self.product_lookups.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CatalogService for StaticCatalog {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, CatalogError> {
        self.stock_lookups.fetch_add(1, Ordering::Relaxed);
        self.stock
            .get(&product_id)
            .copied()
            .ok_or(CatalogError::NotFound(product_id))
    }

    async fn product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        self.product_lookups.fetch_add(1, Ordering::Relaxed);
        self.products
            .get(&product_id)
            .cloned()
            .ok_or(CatalogError::NotFound(product_id))
    }
}
