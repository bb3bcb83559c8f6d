//! Catalog module.
//!
//! Product and stock records plus the lookup service the cart consults.

mod inventory;
mod memory;
mod product;
mod service;

pub use inventory::Stock;
pub use memory::{CatalogDb, StaticCatalog};
pub use product::Product;
pub use service::CatalogService;
