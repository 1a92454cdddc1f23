//! Product entity.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A product carried by the store.
///
/// `id` and `name` are both unique across the catalog; the
/// [`Store`](crate::Store) enforces that on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Operator-assigned identifier, e.g. `P1`.
    pub id: String,

    /// Display name shown on receipts.
    pub name: String,

    /// Current selling price.
    pub price: Money,

    /// Stock level at or below which a restock order is placed.
    pub reorder_level: u32,

    /// Units on the shelf. Can go negative if more is sold than was counted.
    pub stock_on_hand: i64,
}

impl Product {
    /// Quantity placed on every automatic restock order.
    #[inline]
    pub const fn restock_quantity(&self) -> u32 {
        self.reorder_level * 2
    }

    /// True when stock has fallen to or below the reorder level.
    #[inline]
    pub fn needs_reorder(&self) -> bool {
        self.stock_on_hand <= i64::from(self.reorder_level)
    }

    /// Removes sold units from stock and returns the new level.
    pub fn sell(&mut self, quantity: u32) -> i64 {
        self.stock_on_hand -= i64::from(quantity);
        self.stock_on_hand
    }

    /// Adds received units to stock and returns the new level.
    pub fn receive(&mut self, quantity: u32) -> i64 {
        self.stock_on_hand += i64::from(quantity);
        self.stock_on_hand
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eggs() -> Product {
        Product {
            id: "P1".to_string(),
            name: "Eggs 12pk".to_string(),
            price: Money::from_cents(450),
            reorder_level: 5,
            stock_on_hand: 10,
        }
    }

    #[test]
    fn test_reorder_threshold_is_inclusive() {
        let mut product = eggs();
        assert!(!product.needs_reorder());

        assert_eq!(product.sell(5), 5);
        assert!(product.needs_reorder());
        assert_eq!(product.restock_quantity(), 10);
    }

    #[test]
    fn test_stock_can_go_negative_then_recover() {
        let mut product = eggs();
        assert_eq!(product.sell(12), -2);
        assert_eq!(product.receive(10), 8);
    }
}
