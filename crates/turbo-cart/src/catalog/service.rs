//! Lookup service contract.

use std::sync::Arc;

use async_trait::async_trait;

use crate::catalog::{Product, Stock};
use crate::error::CatalogError;
use crate::ids::ProductId;

/// Remote source of product data and stock levels.
///
/// Both lookups are individually fallible. Timeouts and retries are the
/// implementation's business; the cart treats every error the same way.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Fetch the stock record for a product.
    async fn stock(&self, product_id: ProductId) -> Result<Stock, CatalogError>;

    /// Fetch a product's catalog data.
    async fn product(&self, product_id: ProductId) -> Result<Product, CatalogError>;
}

#[async_trait]
impl<T: CatalogService + ?Sized> CatalogService for Arc<T> {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, CatalogError> {
        (**self).stock(product_id).await
    }

    async fn product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        (**self).product(product_id).await
    }
}

#[async_trait]
impl<T: CatalogService + ?Sized> CatalogService for Box<T> {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, CatalogError> {
        (**self).stock(product_id).await
    }

    async fn product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        (**self).product(product_id).await
    }
}
