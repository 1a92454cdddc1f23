//! # Transaction Entity
//!
//! A single checkout: the line items scanned for one member and their total.
//!
//! ## Snapshot Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product P1 "Eggs 12pk" $4.50                                           │
//! │       │                                                                 │
//! │       │  check_out_item(P1, 6)                                          │
//! │       ▼                                                                 │
//! │  LineItem { name: "Eggs 12pk", unit_price: $4.50, qty: 6, $27.00 }      │
//! │                                                                         │
//! │  change_price(P1, "5.00") later on does NOT touch this line item.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::Product;
use crate::money::Money;

// =============================================================================
// Line Item
// =============================================================================

/// One product-and-quantity entry, frozen at sale time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Product the stock adjustment applies to when the sale is finalized.
    pub product_id: String,
    /// Product name at time of sale (frozen).
    pub name: String,
    /// Unit price at time of sale (frozen).
    pub unit_price: Money,
    pub quantity: u32,
    /// `unit_price × quantity`.
    pub subtotal: Money,
}

impl LineItem {
    /// Freezes the product's current name and price.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        LineItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            unit_price: product.price,
            quantity,
            subtotal: product.price * quantity,
        }
    }
}

// =============================================================================
// Transaction
// =============================================================================

/// A purchase by a member.
///
/// Created empty by [`Store::begin_transaction`](crate::Store::begin_transaction),
/// filled by `check_out_item`, and moved into the member's history by
/// `finalize_transaction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    items: Vec<LineItem>,
    total: Money,
}

impl Transaction {
    /// Starts an empty transaction stamped with the current time.
    pub fn new() -> Self {
        Self::started_at(Utc::now())
    }

    /// Starts an empty transaction with an explicit timestamp.
    pub fn started_at(created_at: DateTime<Utc>) -> Self {
        Transaction {
            id: Uuid::new_v4(),
            created_at,
            items: Vec::new(),
            total: Money::zero(),
        }
    }

    /// Appends a line item and keeps the running total in step.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        let item = LineItem::from_product(product, quantity);
        self.total += item.subtotal;
        self.items.push(item);
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Calendar date of the sale (UTC).
    pub fn date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }

    /// True if the sale happened on `date`.
    pub fn on_date(&self, date: NaiveDate) -> bool {
        self.date() == date
    }

    /// True if the sale happened between `begin` and `end`, both inclusive.
    pub fn between_dates(&self, begin: NaiveDate, end: NaiveDate) -> bool {
        let date = self.date();
        begin <= date && date <= end
    }
}

impl Default for Transaction {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn product(id: &str, name: &str, cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: Money::from_cents(cents),
            reorder_level: 5,
            stock_on_hand: 10,
        }
    }

    #[test]
    fn test_running_total_tracks_items() {
        let mut transaction = Transaction::new();
        assert!(transaction.is_empty());

        transaction.add_item(&product("P1", "Eggs 12pk", 450), 6);
        transaction.add_item(&product("P2", "Corn Chips", 325), 2);
        let chips = transaction.items().last().unwrap();
        assert_eq!(chips.subtotal, Money::from_cents(650));

        assert_eq!(transaction.items().len(), 2);
        assert_eq!(transaction.total(), Money::from_cents(2700 + 650));
    }

    #[test]
    fn test_line_item_price_is_frozen() {
        let mut eggs = product("P1", "Eggs 12pk", 450);
        let mut transaction = Transaction::new();
        transaction.add_item(&eggs, 1);

        eggs.price = Money::from_cents(999);

        assert_eq!(transaction.items()[0].unit_price, Money::from_cents(450));
        assert_eq!(transaction.total(), Money::from_cents(450));
    }

    #[test]
    fn test_date_filters() {
        let at = Utc.with_ymd_and_hms(2024, 3, 15, 18, 30, 0).unwrap();
        let transaction = Transaction::started_at(at);
        let day = |d| NaiveDate::from_ymd_opt(2024, 3, d).unwrap();

        assert!(transaction.on_date(day(15)));
        assert!(!transaction.on_date(day(14)));
        assert!(transaction.between_dates(day(15), day(15)));
        assert!(transaction.between_dates(day(1), day(31)));
        assert!(!transaction.between_dates(day(16), day(20)));
    }
}
