//! Cart error types.

use std::fmt;

use thiserror::Error;

use crate::ids::ProductId;

/// Notice shown whenever a requested quantity exceeds available stock.
pub const OUT_OF_STOCK_NOTICE: &str = "Requested quantity out of stock";

/// The cart mutation an error was raised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CartOperation {
    /// `add_product`.
    Add,
    /// `remove_product`.
    Remove,
    /// `update_product_amount`.
    UpdateAmount,
}

impl CartOperation {
    /// Generic failure notice for this operation.
    pub fn failure_notice(&self) -> &'static str {
        match self {
            CartOperation::Add => "Error adding product",
            CartOperation::Remove => "Error removing product",
            CartOperation::UpdateAmount => "Error updating product quantity",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CartOperation::Add => "add",
            CartOperation::Remove => "remove",
            CartOperation::UpdateAmount => "update_amount",
        }
    }
}

impl fmt::Display for CartOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that can occur in cart operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Requested amount exceeds available stock.
    #[error("Insufficient stock for {product_id}: requested {requested}, available {available}")]
    OutOfStock {
        product_id: ProductId,
        requested: i64,
        available: i64,
    },

    /// Target product is not in the cart.
    #[error("Item not in cart: {0}")]
    NotFound(ProductId),

    /// Requested quantity is not positive.
    #[error("Invalid amount: {0}")]
    InvalidAmount(i64),

    /// Lookup or storage failure.
    #[error("Operation failed: {0}")]
    OperationFailed(String),
}

impl CartError {
    /// Human-readable notice for a failure raised by `operation`.
    ///
    /// Stock exceedance has its own wording; every other kind uses the
    /// operation's generic notice.
    pub fn notice(&self, operation: CartOperation) -> &'static str {
        match self {
            CartError::OutOfStock { .. } => OUT_OF_STOCK_NOTICE,
            _ => operation.failure_notice(),
        }
    }
}

impl From<CatalogError> for CartError {
    fn from(e: CatalogError) -> Self {
        CartError::OperationFailed(e.to_string())
    }
}

impl From<turbo_cache::CacheError> for CartError {
    fn from(e: turbo_cache::CacheError) -> Self {
        CartError::OperationFailed(e.to_string())
    }
}

impl From<serde_json::Error> for CartError {
    fn from(e: serde_json::Error) -> Self {
        CartError::OperationFailed(e.to_string())
    }
}

/// Errors returned by a product/stock lookup service.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("HTTP error: {status} for {url}")]
    Http { status: u16, url: String },

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Request error: {0}")]
    Request(String),
}

impl CatalogError {
    /// Whether repeating the same lookup could plausibly succeed.
    pub fn is_transient(&self) -> bool {
        match self {
            CatalogError::Http { status, .. } => (500..600).contains(status),
            CatalogError::Timeout(_) | CatalogError::Connection(_) => true,
            _ => false,
        }
    }
}

/// A persisted cart that violates the cart invariants.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SnapshotError {
    #[error("duplicate cart entry for product {0}")]
    DuplicateEntry(ProductId),

    #[error("non-positive amount {amount} for product {product_id}")]
    NonPositiveAmount { product_id: ProductId, amount: i64 },
}
