//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use turbo_cache::Cache;
use turbo_cart::{CartStore, CatalogService, StaticCatalog};
use turbo_catalog::HttpCatalog;

use crate::config::CliConfig;
use crate::output::Output;

/// Config file names searched for, in order.
pub const CONFIG_NAMES: [&str; 3] = ["cart.toml", ".cart.toml", "cart.json"];

/// Cart store as used by every command.
pub type Store = CartStore<Box<dyn CatalogService>, Output>;

/// Command-line values that take precedence over the config file.
#[derive(Debug, Default)]
pub struct Overrides {
    pub catalog_url: Option<String>,
    pub fixture: Option<String>,
    pub storage_dir: Option<String>,
}

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration, overrides applied.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, overrides: Overrides, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let mut config = if let Some(path) = config_path {
            CliConfig::load(path)?
        } else {
            // Try to find config in current directory or parent directories
            Self::find_config(&cwd).unwrap_or_default()
        };

        if let Some(url) = overrides.catalog_url {
            config.catalog.base_url = url;
            config.catalog.fixture = None;
        }
        if let Some(fixture) = overrides.fixture {
            config.catalog.fixture = Some(fixture);
        }
        if let Some(dir) = overrides.storage_dir {
            config.storage.dir = Some(dir);
        }

        Ok(Self { config, output, cwd })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<CliConfig> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// Directory the cart is persisted in.
    pub fn storage_dir(&self) -> PathBuf {
        match &self.config.storage.dir {
            Some(dir) => self.resolve_path(dir),
            None => dirs_path().join("turbo-cart"),
        }
    }

    /// Open the cart store with the configured catalog and storage.
    pub fn open_store(&self) -> Result<Store> {
        let catalog = self.catalog()?;
        let dir = self.storage_dir();
        let cache = Cache::open(&dir)
            .with_context(|| format!("Failed to open cart storage: {}", dir.display()))?;

        self.output.debug(&format!("Cart storage: {}", dir.display()));

        CartStore::open(catalog, cache, self.output.clone(), &self.config.cart_config())
            .with_context(|| format!("Failed to load cart from {}", dir.display()))
    }

    fn catalog(&self) -> Result<Box<dyn CatalogService>> {
        if let Some(fixture) = &self.config.catalog.fixture {
            let path = self.resolve_path(fixture);
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read fixture: {}", path.display()))?;
            let catalog = StaticCatalog::from_json(&json)
                .with_context(|| format!("Failed to parse fixture: {}", path.display()))?;
            self.output.debug(&format!("Catalog fixture: {}", path.display()));
            return Ok(Box::new(catalog));
        }

        let config = self.config.catalog_config();
        self.output.debug(&format!("Catalog API: {}", config.base_url));
        let catalog = HttpCatalog::new(config).context("Failed to build catalog client")?;
        Ok(Box::new(catalog))
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}

/// Get the platform-specific data directory.
fn dirs_path() -> PathBuf {
    if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home).join(".local").join("share")
    } else {
        PathBuf::from("/tmp")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_cache::{FileStore, KvStore};

    fn context(config: CliConfig, cwd: &Path) -> Context {
        Context {
            config,
            output: Output::new(false, true),
            cwd: cwd.to_path_buf(),
        }
    }

    #[test]
    fn test_find_config_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("cart.toml"),
            "[storage]\nnamespace = \"@Walked\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = Context::find_config(&nested).unwrap();
        assert_eq!(config.storage.namespace, "@Walked");
    }

    #[test]
    fn test_relative_storage_dir() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = CliConfig::default();
        config.storage.dir = Some(".cart".to_string());

        let ctx = context(config, dir.path());
        assert_eq!(ctx.storage_dir(), dir.path().join(".cart"));
    }

    #[tokio::test]
    async fn test_fixture_store_persists() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("db.json"),
            r#"{"products":[{"id":1,"title":"Tênis","price":179.9,"image":""}],"stock":[{"id":1,"amount":3}]}"#,
        )
        .unwrap();
        let mut config = CliConfig::default();
        config.storage.dir = Some("state".to_string());
        config.catalog.fixture = Some("db.json".to_string());
        let ctx = context(config, dir.path());

        let mut store = ctx.open_store().unwrap();
        store.add_product(1.into()).await.unwrap();
        drop(store);

        let store = ctx.open_store().unwrap();
        assert_eq!(store.cart().item_count(), 1);
    }

    #[test]
    fn test_corrupt_cart_is_shown_as_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("db.json"),
            r#"{"products":[],"stock":[]}"#,
        )
        .unwrap();
        let backend = FileStore::open(dir.path().join("state")).unwrap();
        backend.set("@TurboCart:cart", br#"{"id":1}"#).unwrap();

        let mut config = CliConfig::default();
        config.storage.dir = Some("state".to_string());
        config.catalog.fixture = Some("db.json".to_string());
        let ctx = context(config, dir.path());

        let err = ctx.open_store().unwrap_err();
        assert!(!crate::commands::already_reported(&err));
        assert!(format!("{:#}", err).starts_with("Failed to load cart from"));
    }
}
