//! # Request and Result Values
//!
//! Immutable values that cross the boundary between the console and the
//! [`Store`](crate::Store). Requests carry the operator's input into one call;
//! `*Info` values carry copies of entity fields back out, so callers never
//! hold references into the store.
//!
//! ## One Call, Two Values
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Console                    Store                                       │
//! │  ───────                    ─────                                       │
//! │  NewProduct { .. } ───────► add_product()                               │
//! │                                  │ validate → mutate                    │
//! │  ProductAdded { .. } ◄───────────┘ report (copies, not references)      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{LineItem, Member, Order, Product, Transaction};
use crate::error::ResultCode;
use crate::money::Money;

// =============================================================================
// Requests
// =============================================================================

/// Input for [`Store::add_product`](crate::Store::add_product).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub id: String,
    pub name: String,
    /// Price as typed; must be a decimal amount.
    pub price: String,
    pub reorder_level: i64,
    pub stock_on_hand: i64,
}

/// Input for [`Store::change_price`](crate::Store::change_price).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceChange {
    pub product_id: String,
    /// New price as typed; must be a decimal amount.
    pub price: String,
}

/// Input for [`Store::enroll_member`](crate::Store::enroll_member).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub fee: Money,
}

/// Input for [`Store::check_out_item`](crate::Store::check_out_item).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutItem {
    pub product_id: String,
    pub quantity: u32,
}

/// Which dates a transaction listing covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    On(NaiveDate),
    /// Inclusive at both ends.
    Between(NaiveDate, NaiveDate),
}

impl DateFilter {
    pub fn matches(&self, transaction: &Transaction) -> bool {
        match *self {
            DateFilter::On(date) => transaction.on_date(date),
            DateFilter::Between(begin, end) => transaction.between_dates(begin, end),
        }
    }
}

/// Input for [`Store::get_transactions`](crate::Store::get_transactions).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionQuery {
    pub member_id: String,
    pub dates: DateFilter,
}

// =============================================================================
// Snapshots
// =============================================================================

/// Copy of a product's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInfo {
    pub id: String,
    pub name: String,
    pub price: Money,
    pub reorder_level: u32,
    pub stock_on_hand: i64,
}

impl From<&Product> for ProductInfo {
    fn from(product: &Product) -> Self {
        ProductInfo {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            reorder_level: product.reorder_level,
            stock_on_hand: product.stock_on_hand,
        }
    }
}

/// Copy of a member's fields, without the transaction history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberInfo {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub fee: Money,
    pub joined_at: DateTime<Utc>,
}

impl From<&Member> for MemberInfo {
    fn from(member: &Member) -> Self {
        MemberInfo {
            id: member.id.clone(),
            name: member.name.clone(),
            address: member.address.clone(),
            phone: member.phone.clone(),
            fee: member.fee,
            joined_at: member.joined_at,
        }
    }
}

/// Copy of an order's fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderInfo {
    pub id: String,
    pub product_id: String,
    pub product_name: String,
    pub quantity: u32,
    pub ordered_at: DateTime<Utc>,
    pub outstanding: bool,
}

impl From<&Order> for OrderInfo {
    fn from(order: &Order) -> Self {
        OrderInfo {
            id: order.id.clone(),
            product_id: order.product_id.clone(),
            product_name: order.product_name.clone(),
            quantity: order.quantity,
            ordered_at: order.ordered_at,
            outstanding: order.outstanding,
        }
    }
}

/// Line items and total of a transaction, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub transaction_id: Uuid,
    pub date: NaiveDate,
    pub items: Vec<LineItem>,
    pub total: Money,
}

impl From<&Transaction> for Receipt {
    fn from(transaction: &Transaction) -> Self {
        Receipt {
            transaction_id: transaction.id,
            date: transaction.date(),
            items: transaction.items().to_vec(),
            total: transaction.total(),
        }
    }
}

// =============================================================================
// Operation Results
// =============================================================================

/// Result of a successful `add_product`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductAdded {
    pub product: ProductInfo,
    /// The initial order placed for twice the reorder level.
    pub initial_order: OrderInfo,
}

/// Result of a successful `finalize_transaction`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalizedTransaction {
    pub member: MemberInfo,
    pub receipt: Receipt,
    /// Restock orders triggered by this sale, in line-item order.
    pub orders_placed: Vec<OrderInfo>,
}

impl FinalizedTransaction {
    /// `OrderPlaced` if the sale triggered restocking.
    pub fn code(&self) -> ResultCode {
        if self.orders_placed.is_empty() {
            ResultCode::OperationCompleted
        } else {
            ResultCode::OrderPlaced
        }
    }
}

/// Result of a successful `process_shipment`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentProcessed {
    pub order: OrderInfo,
    /// Product with its updated stock.
    pub product: ProductInfo,
}
