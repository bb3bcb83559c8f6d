//! Product types.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// A catalog product, optionally held in a cart.
///
/// `amount` is the quantity held in the cart. Catalog responses omit it, in
/// which case it deserializes as 0.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Unit price.
    #[serde(default)]
    pub price: f64,
    /// Image URL.
    #[serde(default)]
    pub image: String,
    /// Quantity held in the cart.
    #[serde(default)]
    pub amount: i64,
}

impl Product {
    /// Create a product with no quantity held.
    pub fn new(id: ProductId, title: impl Into<String>, price: f64) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image: String::new(),
            amount: 0,
        }
    }

    /// Set the image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Copy of this product carrying `amount`.
    pub fn with_amount(&self, amount: i64) -> Self {
        Self {
            amount,
            ..self.clone()
        }
    }

    /// Price of the held quantity.
    pub fn subtotal(&self) -> f64 {
        self.price * self.amount as f64
    }
}
