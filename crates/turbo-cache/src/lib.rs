//! Typed key-value persistence for TurboCart.
//!
//! Provides a simple, ergonomic API for keeping small JSON documents (such as
//! a shopping cart) in a durable key-value store.
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_cache::{cache_key, Cache};
//!
//! let cache = Cache::open("/var/lib/turbo-cart")?;
//! let key = cache_key!("@TurboCart", "cart");
//!
//! // Store a value
//! cache.set(&key, &cart)?;
//!
//! // Retrieve a value
//! let cart: Option<Vec<Product>> = cache.get(&key)?;
//!
//! // Delete a value
//! cache.delete(&key)?;
//! ```

mod error;
mod file;
mod kv;
mod store;

pub use error::CacheError;
pub use file::FileStore;
pub use kv::Cache;
pub use store::{KvStore, MemoryStore};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, KvStore, MemoryStore};
}
