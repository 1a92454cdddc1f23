//! # Entities
//!
//! Plain records owned by the [`Store`](crate::Store).
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Store                                                                  │
//! │  ├── ProductList ──► Product                                            │
//! │  ├── MemberList ───► Member ──► Transaction ──► LineItem                │
//! │  └── OrderList ────► Order ···► Product (by id, non-owning)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod member;
pub mod order;
pub mod product;
pub mod transaction;

pub use member::{Member, MEMBER_ID_PREFIX};
pub use order::{Order, ORDER_ID_PREFIX};
pub use product::Product;
pub use transaction::{LineItem, Transaction};
