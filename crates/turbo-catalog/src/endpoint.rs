//! Catalog endpoints and their default policies.

use std::fmt;

use turbo_cart::ProductId;

/// The two lookups the cart performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `GET /stock/{id}`.
    Stock,
    /// `GET /products/{id}`.
    Product,
}

impl Endpoint {
    /// Path segment under the catalog base URL.
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Product => "products",
        }
    }

    /// Full URL for a product under `base_url`.
    pub fn url(&self, base_url: &str, product_id: ProductId) -> String {
        format!(
            "{}/{}/{}",
            base_url.trim_end_matches('/'),
            self.collection(),
            product_id
        )
    }

    /// Default max retries for this endpoint.
    pub fn default_max_retries(&self) -> u32 {
        match self {
            Self::Stock => 2, // every mutation depends on it
            Self::Product => 1,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stock => "stock",
            Self::Product => "product",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_building() {
        let id = ProductId::new(3);
        assert_eq!(
            Endpoint::Stock.url("http://localhost:3333/", id),
            "http://localhost:3333/stock/3"
        );
        assert_eq!(
            Endpoint::Product.url("http://localhost:3333", id),
            "http://localhost:3333/products/3"
        );
    }
}
