//! Shopping cart state for TurboCart storefronts.
//!
//! This crate owns the client-side cart:
//!
//! - **Catalog**: products, stock records, and the [`CatalogService`] lookup contract
//! - **Cart**: immutable [`CartState`] snapshots and the [`CartStore`] that mutates them
//! - **Notify**: the [`Notifier`] sink failures are reported to
//!
//! The store validates every quantity against the catalog's stock and
//! persists the whole cart through a [`turbo_cache::Cache`] after each
//! successful change.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_cart::prelude::*;
//! use turbo_cache::Cache;
//!
//! let catalog = StaticCatalog::from_json(&std::fs::read_to_string("db.json")?)?;
//! let mut store = CartStore::open(catalog, Cache::open("./.cart")?, TracingNotifier, &CartConfig::default())?;
//!
//! store.add_product(ProductId::new(1)).await?;
//! store.update_product_amount(ProductId::new(1), 2).await?;
//! store.remove_product(ProductId::new(1))?;
//! ```

pub mod cart;
pub mod catalog;
pub mod error;
pub mod ids;
pub mod notify;

pub use cart::{CartConfig, CartState, CartStore};
pub use catalog::{CatalogDb, CatalogService, Product, StaticCatalog, Stock};
pub use error::{CartError, CartOperation, CatalogError, SnapshotError, OUT_OF_STOCK_NOTICE};
pub use ids::ProductId;
pub use notify::{NoticeQueue, Notifier, TracingNotifier};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{CartConfig, CartState, CartStore};
    pub use crate::catalog::{CatalogService, Product, StaticCatalog, Stock};
    pub use crate::error::{CartError, CartOperation, CatalogError};
    pub use crate::ids::ProductId;
    pub use crate::notify::{NoticeQueue, Notifier, TracingNotifier};
}
