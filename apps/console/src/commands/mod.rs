//! # Menu Command Handlers
//!
//! One function per menu entry. Each prompts for its input, makes one or
//! more store calls, and prints the outcome.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (shared formatting)
//! ├── member.rs    ◄─── 1, 2, 8, 11
//! ├── product.rs   ◄─── 3, 6, 7, 12
//! ├── checkout.rs  ◄─── 4, 9
//! ├── order.rs     ◄─── 5, 10
//! └── data.rs      ◄─── 13, start-up load
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  prompter.token("Enter product id:")   ◄── operator input               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  store.change_price(PriceChange { .. })                                 │
//! │         │                                                               │
//! │         ├── Ok(info)  ──► print the snapshot                            │
//! │         └── Err(err)  ──► print describe(&err), back to the menu        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! Store failures never end the session; only terminal I/O errors propagate.

pub mod checkout;
pub mod data;
pub mod member;
pub mod order;
pub mod product;

use coop_core::{MemberInfo, OrderInfo, ProductInfo, Receipt};

pub(crate) fn format_product(product: &ProductInfo) -> String {
    format!(
        "{:<6} {:<20} {:>9}  stock {:>4}  reorder at {}",
        product.id, product.name, product.price, product.stock_on_hand, product.reorder_level
    )
}

pub(crate) fn format_member(member: &MemberInfo) -> String {
    format!(
        "{:<6} {:<20} {:<20} {:<10} fee {}  joined {}",
        member.id,
        member.name,
        member.address,
        member.phone,
        member.fee,
        member.joined_at.format("%m/%d/%Y")
    )
}

pub(crate) fn format_order(order: &OrderInfo) -> String {
    format!(
        "{:<6} {:<6} {:<20} qty {:>4}  ordered {}",
        order.id,
        order.product_id,
        order.product_name,
        order.quantity,
        order.ordered_at.format("%m/%d/%Y")
    )
}

pub(crate) fn format_receipt(receipt: &Receipt) -> String {
    let mut text = format!("Transaction on {}", receipt.date.format("%m/%d/%Y"));
    for item in &receipt.items {
        text.push_str(&format!(
            "\n  {:<20} {:>4} @ {:>8} = {:>9}",
            item.name, item.quantity, item.unit_price, item.subtotal
        ));
    }
    text.push_str(&format!("\n  {:<20} {:>27}", "Total", receipt.total));
    text
}
