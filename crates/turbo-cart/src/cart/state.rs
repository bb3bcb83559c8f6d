//! Immutable cart snapshots.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

use crate::catalog::Product;
use crate::error::SnapshotError;
use crate::ids::ProductId;

/// The full contents of a cart at one point in time.
///
/// Entries are unique by product id and keep insertion order. A snapshot is
/// never edited: every change builds a new one. Serializes as a plain JSON
/// array of products.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CartState {
    items: Vec<Product>,
}

impl CartState {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from entries, checking the cart invariants.
    pub fn from_items(items: Vec<Product>) -> Result<Self, SnapshotError> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(SnapshotError::DuplicateEntry(item.id));
            }
            if item.amount <= 0 {
                return Err(SnapshotError::NonPositiveAmount {
                    product_id: item.id,
                    amount: item.amount,
                });
            }
        }
        Ok(Self { items })
    }

    /// Snapshot with `product` appended at the end.
    ///
    /// The caller guarantees the product is not already present.
    pub fn with_appended(&self, product: Product) -> Self {
        debug_assert!(!self.contains(product.id));
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.extend(self.items.iter().cloned());
        items.push(product);
        Self { items }
    }

    /// Snapshot with the entry for `product_id` replaced by a copy holding
    /// `amount`. `None` if the product is not in the cart.
    pub fn with_amount(&self, product_id: ProductId, amount: i64) -> Option<Self> {
        if !self.contains(product_id) {
            return None;
        }
        let items = self
            .items
            .iter()
            .map(|item| {
                if item.id == product_id {
                    item.with_amount(amount)
                } else {
                    item.clone()
                }
            })
            .collect();
        Some(Self { items })
    }

    /// Snapshot without the entry for `product_id`. `None` if absent.
    pub fn without(&self, product_id: ProductId) -> Option<Self> {
        if !self.contains(product_id) {
            return None;
        }
        let items = self
            .items
            .iter()
            .filter(|item| item.id != product_id)
            .cloned()
            .collect();
        Some(Self { items })
    }

    /// Get an entry by product id.
    pub fn get(&self, product_id: ProductId) -> Option<&Product> {
        self.items.iter().find(|item| item.id == product_id)
    }

    pub fn contains(&self, product_id: ProductId) -> bool {
        self.get(product_id).is_some()
    }

    /// Quantity held for a product, 0 if absent.
    pub fn amount_of(&self, product_id: ProductId) -> i64 {
        self.get(product_id).map(|item| item.amount).unwrap_or(0)
    }

    /// Entries in cart order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.items.iter()
    }

    /// Number of distinct products.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total item count (sum of amounts).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|item| item.amount).sum()
    }

    /// Price of the held quantity of one product, 0 if absent.
    pub fn subtotal(&self, product_id: ProductId) -> f64 {
        self.get(product_id).map(Product::subtotal).unwrap_or(0.0)
    }

    /// Price of everything in the cart.
    pub fn total(&self) -> f64 {
        self.items.iter().map(Product::subtotal).sum()
    }
}

impl<'de> Deserialize<'de> for CartState {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<Product>::deserialize(deserializer)?;
        CartState::from_items(items).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a CartState {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
