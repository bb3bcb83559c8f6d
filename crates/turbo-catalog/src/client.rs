//! REST catalog client.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use turbo_cart::{CatalogError, CatalogService, Product, ProductId, Stock};

use crate::config::CatalogConfig;
use crate::endpoint::Endpoint;

/// [`CatalogService`] backed by a json-server style REST API.
///
/// Serves `GET {base_url}/stock/{id}` and `GET {base_url}/products/{id}`,
/// applying the configured timeouts and retry policies.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    http: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    /// Create a client for `config`.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.timeout.connect)
            .timeout(config.timeout.total)
            .build()
            .map_err(|e| CatalogError::Request(e.to_string()))?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fetch with retries per the endpoint's policy.
    async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        product_id: ProductId,
    ) -> Result<T, CatalogError> {
        let url = endpoint.url(&self.config.base_url, product_id);
        let policy = self.config.retry_policy(endpoint);

        let mut attempt = 0;
        loop {
            match self.fetch_once(&url, product_id).await {
                Ok(value) => return Ok(value),
                Err(err) => {
                    let Some(delay) = policy.next_delay(&err, attempt) else {
                        return Err(err);
                    };
                    warn!(%endpoint, %product_id, attempt, error = %err, ?delay, "retrying catalog lookup");
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }

    async fn fetch_once<T: DeserializeOwned>(
        &self,
        url: &str,
        product_id: ProductId,
    ) -> Result<T, CatalogError> {
        debug!(url, "catalog request");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| classify(e, url))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(product_id));
        }
        if !status.is_success() {
            return Err(CatalogError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let bytes = resp.bytes().await.map_err(|e| classify(e, url))?;
        serde_json::from_slice(&bytes).map_err(|e| CatalogError::Deserialization(e.to_string()))
    }
}

#[async_trait]
impl CatalogService for HttpCatalog {
    async fn stock(&self, product_id: ProductId) -> Result<Stock, CatalogError> {
        self.fetch(Endpoint::Stock, product_id).await
    }

    async fn product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        self.fetch(Endpoint::Product, product_id).await
    }
}

/// Map a transport error onto the lookup error taxonomy.
fn classify(e: reqwest::Error, url: &str) -> CatalogError {
    if e.is_timeout() {
        CatalogError::Timeout(url.to_string())
    } else if e.is_connect() {
        CatalogError::Connection(format!("{}: {}", url, e))
    } else if e.is_decode() || e.is_body() {
        CatalogError::Deserialization(e.to_string())
    } else {
        CatalogError::Request(e.to_string())
    }
}
