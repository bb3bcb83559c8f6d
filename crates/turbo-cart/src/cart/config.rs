//! Cart store configuration.

use serde::{Deserialize, Serialize};
use turbo_cache::cache_key;

/// Namespace used for storage keys unless configured otherwise.
pub const DEFAULT_NAMESPACE: &str = "@TurboCart";

/// Configuration for a [`CartStore`](crate::cart::CartStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartConfig {
    /// Prefix for every storage key the store writes.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

impl CartConfig {
    /// Create a configuration with a custom namespace.
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Key the cart snapshot is stored under.
    pub fn storage_key(&self) -> String {
        cache_key!(self.namespace.as_str(), "cart")
    }
}

impl Default for CartConfig {
    fn default() -> Self {
        Self {
            namespace: default_namespace(),
        }
    }
}
