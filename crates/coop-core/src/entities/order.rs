//! Restock order entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Product;

/// Prefix of generated order ids (`O1`, `O2`, ...).
pub const ORDER_ID_PREFIX: &str = "O";

/// A restock order placed with the supplier.
///
/// Holds the product by id only; the catalog stays the single owner of
/// `Product` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub product_id: String,
    /// Product name when the order was placed (for listings).
    pub product_name: String,
    pub quantity: u32,
    pub ordered_at: DateTime<Utc>,
    /// True until a shipment for this order is processed.
    pub outstanding: bool,
}

impl Order {
    /// Places the `n`-th order for `quantity` units of `product`.
    pub fn new(sequence: u64, product: &Product, quantity: u32) -> Self {
        Order {
            id: format!("{ORDER_ID_PREFIX}{sequence}"),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            quantity,
            ordered_at: Utc::now(),
            outstanding: true,
        }
    }

    /// Marks the order as received.
    pub fn fulfil(&mut self) {
        self.outstanding = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    #[test]
    fn test_new_order_is_outstanding_until_fulfilled() {
        let product = Product {
            id: "P7".to_string(),
            name: "Watermelon".to_string(),
            price: Money::from_cents(200),
            reorder_level: 6,
            stock_on_hand: 12,
        };
        let mut order = Order::new(4, &product, product.restock_quantity());

        assert_eq!(order.id, "O4");
        assert_eq!(order.product_id, "P7");
        assert_eq!(order.quantity, 12);
        assert!(order.outstanding);

        order.fulfil();
        assert!(!order.outstanding);
    }
}
