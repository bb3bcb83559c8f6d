//! HTTP product and stock lookups for TurboCart.
//!
//! This crate provides:
//! - `HttpCatalog` - a [`turbo_cart::CatalogService`] backed by a REST catalog API
//! - `Endpoint` - the two lookups and their default policies
//! - `TimeoutConfig` - per-request timeouts
//! - `RetryPolicy` - retry strategies

mod client;
mod config;
mod endpoint;
mod retry;
mod timeout;

pub use client::*;
pub use config::*;
pub use endpoint::*;
pub use retry::*;
pub use timeout::*;
