//! Stock records.

use serde::{Deserialize, Serialize};

use crate::ids::ProductId;

/// Maximum purchasable quantity for a product, as reported by the catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stock {
    /// Product this stock record belongs to.
    pub id: ProductId,
    /// Maximum purchasable quantity.
    pub amount: i64,
}

impl Stock {
    pub fn new(id: ProductId, amount: i64) -> Self {
        Self { id, amount }
    }

    /// Check if a specific quantity can be held.
    pub fn can_fulfill(&self, quantity: i64) -> bool {
        quantity <= self.amount
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_ceiling_is_inclusive() {
        let stock = Stock::new(ProductId::new(1), 5);
        assert!(stock.can_fulfill(5));
        assert!(!stock.can_fulfill(6));
    }

    #[test]
    fn test_empty_stock() {
        let stock = Stock::new(ProductId::new(1), 0);
        assert!(!stock.can_fulfill(1));
    }
}
