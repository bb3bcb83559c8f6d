//! Catalog client configuration.

use std::time::Duration;

use crate::endpoint::Endpoint;
use crate::retry::RetryPolicy;
use crate::timeout::TimeoutConfig;

/// Base URL used when none is configured (json-server's usual port).
pub const DEFAULT_BASE_URL: &str = "http://localhost:3333";

/// Connection settings for [`HttpCatalog`](crate::HttpCatalog).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Catalog API root, without the `/stock` or `/products` suffix.
    pub base_url: String,
    /// Per-request timeouts.
    pub timeout: TimeoutConfig,
    /// Retry policy for stock lookups.
    pub stock_retry: RetryPolicy,
    /// Retry policy for product lookups.
    pub product_retry: RetryPolicy,
}

impl CatalogConfig {
    /// Create a configuration with endpoint default policies.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: TimeoutConfig::default(),
            stock_retry: RetryPolicy::new(Endpoint::Stock.default_max_retries()),
            product_retry: RetryPolicy::new(Endpoint::Product.default_max_retries()),
        }
    }

    /// Set the total request timeout.
    pub fn with_timeout(mut self, total: Duration) -> Self {
        self.timeout = TimeoutConfig::from_total(total);
        self
    }

    /// Use the same retry policy for both endpoints.
    pub fn with_retry(mut self, policy: RetryPolicy) -> Self {
        self.stock_retry = policy.clone();
        self.product_retry = policy;
        self
    }

    /// Replace the retry policy of one endpoint.
    pub fn with_endpoint_retry(mut self, endpoint: Endpoint, policy: RetryPolicy) -> Self {
        match endpoint {
            Endpoint::Stock => self.stock_retry = policy,
            Endpoint::Product => self.product_retry = policy,
        }
        self
    }

    /// Retry policy for an endpoint.
    pub fn retry_policy(&self, endpoint: Endpoint) -> &RetryPolicy {
        match endpoint {
            Endpoint::Stock => &self.stock_retry,
            Endpoint::Product => &self.product_retry,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_retries_more_by_default() {
        let config = CatalogConfig::default();
        assert!(
            config.retry_policy(Endpoint::Stock).max_attempts
                > config.retry_policy(Endpoint::Product).max_attempts
        );
    }

    #[test]
    fn test_with_retry_overrides_both() {
        let config = CatalogConfig::default().with_retry(RetryPolicy::none());
        assert_eq!(config.stock_retry, RetryPolicy::none());
        assert_eq!(config.product_retry, RetryPolicy::none());
    }

    #[test]
    fn test_endpoint_retry_leaves_other_endpoint() {
        let config = CatalogConfig::default().with_endpoint_retry(Endpoint::Stock, RetryPolicy::new(4));
        assert_eq!(config.stock_retry.max_attempts, 4);
        assert_eq!(
            config.product_retry,
            RetryPolicy::new(Endpoint::Product.default_max_retries())
        );
    }
}
