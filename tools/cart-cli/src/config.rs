//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_cart::CartConfig;
use turbo_catalog::{CatalogConfig, Endpoint, RetryPolicy, DEFAULT_BASE_URL};

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Where and under which key the cart is persisted.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Catalog API connection.
    #[serde(default)]
    pub catalog: CatalogSection,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Cart store settings.
    pub fn cart_config(&self) -> CartConfig {
        CartConfig::new(self.storage.namespace.clone())
    }

    /// HTTP catalog settings.
    pub fn catalog_config(&self) -> CatalogConfig {
        CatalogConfig::new(self.catalog.base_url.clone())
            .with_timeout(Duration::from_millis(self.catalog.timeout_ms))
            .with_endpoint_retry(Endpoint::Stock, RetryPolicy::new(self.catalog.max_retries))
            .with_endpoint_retry(
                Endpoint::Product,
                RetryPolicy::new(self.catalog.product_max_retries),
            )
    }
}

/// Cart persistence settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the cart (default: the user data directory).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<String>,

    /// Storage key namespace.
    #[serde(default = "default_namespace")]
    pub namespace: String,
}

fn default_namespace() -> String {
    turbo_cart::cart::DEFAULT_NAMESPACE.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            dir: None,
            namespace: default_namespace(),
        }
    }
}

/// Catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    /// Catalog API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Total timeout per request, in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retries after a failed stock lookup.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Retries after a failed product lookup.
    #[serde(default = "default_product_max_retries")]
    pub product_max_retries: u32,

    /// json-server style db.json used instead of the API.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixture: Option<String>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_ms() -> u64 {
    5000
}

fn default_max_retries() -> u32 {
    Endpoint::Stock.default_max_retries()
}

fn default_product_max_retries() -> u32 {
    Endpoint::Product.default_max_retries()
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            product_max_retries: default_product_max_retries(),
            fixture: None,
        }
    }
}

/// Generate a default cart.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Cart configuration

[storage]
# dir = ".cart"
namespace = "{namespace}"

[catalog]
base_url = "{base_url}"
timeout_ms = {timeout_ms}
max_retries = {max_retries}
product_max_retries = {product_max_retries}
# fixture = "db.json"
"#,
        namespace = default_namespace(),
        base_url = default_base_url(),
        timeout_ms = default_timeout_ms(),
        max_retries = default_max_retries(),
        product_max_retries = default_product_max_retries(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses_to_defaults() {
        let config: CliConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.storage.namespace, "@TurboCart");
        assert_eq!(config.catalog.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.catalog.timeout_ms, 5000);
        assert!(config.storage.dir.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config: CliConfig = toml::from_str(
            r#"
            [catalog]
            base_url = "https://api.example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.base_url, "https://api.example.com");
        assert_eq!(config.catalog.max_retries, 2);
        assert_eq!(config.cart_config().storage_key(), "@TurboCart:cart");
    }

    #[test]
    fn test_load_json_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.json");
        std::fs::write(&path, r#"{"storage":{"namespace":"@Shop"}}"#).unwrap();

        let config = CliConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.storage.namespace, "@Shop");
    }

    #[test]
    fn test_catalog_config_conversion() {
        let mut config = CliConfig::default();
        config.catalog.timeout_ms = 800;
        config.catalog.max_retries = 0;

        let catalog = config.catalog_config();
        assert_eq!(catalog.timeout.total, Duration::from_millis(800));
        assert_eq!(catalog.stock_retry.max_attempts, 0);
        assert_eq!(catalog.product_retry.max_attempts, 1);
    }

    #[test]
    fn test_default_retries_differ_per_endpoint() {
        let catalog = CliConfig::default().catalog_config();
        assert_eq!(catalog.stock_retry.max_attempts, 2);
        assert_eq!(catalog.product_retry.max_attempts, 1);
    }
}
