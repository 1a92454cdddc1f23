//! # coop-core: Store Logic for the Co-op Grocery
//!
//! Everything the store knows and does, held in memory. No file or terminal
//! access happens here; `coop-persist` and the console build on top.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Co-op Store Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    coop-console (apps/console)                  │   │
//! │  │    Menu ──► Prompts ──► Request values ──► Formatted results    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ Store method calls                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ coop-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   store   │  │collections│  │ entities  │  │   money   │  │   │
//! │  │   │  facade   │  │ Product-  │  │  Member   │  │  Money    │  │   │
//! │  │   │  dto      │  │ Member-   │  │  Order    │  │ validation│  │   │
//! │  │   │           │  │ OrderList │  │Transaction│  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO FILES • NO TERMINAL • NO GLOBAL STATE                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │ serde                                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    coop-persist (snapshot file)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`store`] - The [`Store`] facade: every operation the console offers
//! - [`dto`] - Request values in, snapshot values out
//! - [`collections`] - Product, member and order lists
//! - [`entities`] - Product, Member, Order, Transaction
//! - [`money`] - Money type with integer cents
//! - [`error`] - Result codes and error types
//! - [`validation`] - Input checks run before the store is touched
//! - [`testbed`] - Sample members and products
//!
//! ## Example Usage
//!
//! ```rust
//! use coop_core::{CheckoutItem, NewMember, NewProduct, Money, Store};
//!
//! let mut store = Store::new();
//! store.add_product(NewProduct {
//!     id: "P1".into(),
//!     name: "Eggs 12pk".into(),
//!     price: "4.50".into(),
//!     reorder_level: 5,
//!     stock_on_hand: 10,
//! })?;
//! let member = store.enroll_member(NewMember {
//!     name: "Rich Fritz".into(),
//!     address: "123 4th street".into(),
//!     phone: "123-4567".into(),
//!     fee: Money::from_cents(2000),
//! });
//!
//! let mut transaction = store.begin_transaction();
//! store.check_out_item(&mut transaction, CheckoutItem { product_id: "P1".into(), quantity: 6 })?;
//! let finalized = store.finalize_transaction(&member.id, transaction)?;
//!
//! assert_eq!(finalized.receipt.total, Money::from_cents(2700));
//! assert_eq!(finalized.orders_placed.len(), 1);
//! # Ok::<(), coop_core::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod collections;
pub mod dto;
pub mod entities;
pub mod error;
pub mod money;
pub mod store;
pub mod testbed;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use dto::*;
pub use entities::{LineItem, Member, Order, Product, Transaction};
pub use error::{result_code, ResultCode, StoreError, StoreResult, ValidationError};
pub use money::Money;
pub use store::{IdCounters, Store};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single line item.
///
/// Catches typos such as 1000 for 10 at the register.
pub const MAX_PURCHASE_QUANTITY: u32 = 999;

/// Upper bound for stock and reorder levels entered by the operator.
pub const MAX_LEVEL: u32 = 1_000_000;
