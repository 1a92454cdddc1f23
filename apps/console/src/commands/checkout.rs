//! # Checkout Commands
//!
//! ## Check-out Session (menu 4)
//! ```text
//! member id ──► search_membership ──✗──► "No member with that id."
//!      │
//!      ▼
//! ┌──► product id + quantity ──► check_out_item ──► line printed
//! │         │
//! └── "Check out more items?" ─── no ──► receipt ──► finalize_transaction
//!                                                        │
//!                                          restock orders listed, if any
//! ```

use std::io::{BufRead, Write};

use coop_core::{CheckoutItem, DateFilter, ResultCode, Store, TransactionQuery};

use super::{format_order, format_receipt};
use crate::error::{code_message, describe, ConsoleResult};
use crate::prompt::Prompter;

/// 4: check out a member's items.
pub fn check_out<R: BufRead, W: Write>(
    store: &mut Store,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    let member_id = prompter.token("Enter member id:")?;
    if let Err(err) = store.search_membership(&member_id) {
        return prompter.say(describe(&err));
    }

    let mut transaction = store.begin_transaction();
    loop {
        let product_id = prompter.token("Enter product id:")?;
        let quantity = prompter.number("Enter quantity:")?;

        match store.check_out_item(&mut transaction, CheckoutItem { product_id, quantity }) {
            Ok(product) => prompter.say(format!(
                "{} x {} at {}",
                quantity, product.name, product.price
            ))?,
            Err(err) => prompter.say(describe(&err))?,
        }

        if !prompter.yes_or_no("Check out more items?")? {
            break;
        }
    }

    if transaction.is_empty() {
        return prompter.say("Nothing was checked out.");
    }
    prompter.say(format_receipt(&store.display_purchases(&transaction)))?;

    match store.finalize_transaction(&member_id, transaction) {
        Ok(finalized) => {
            if finalized.code() == ResultCode::OrderPlaced {
                prompter.say(code_message(ResultCode::OrderPlaced))?;
                for order in &finalized.orders_placed {
                    prompter.say(format!("  {}", format_order(order)))?;
                }
            }
            prompter.say(format!(
                "Transaction complete. Total {}.",
                finalized.receipt.total
            ))
        }
        Err(err) => prompter.say(describe(&err)),
    }
}

/// 9: a member's transactions on a date or over a date range.
pub fn transactions<R: BufRead, W: Write>(
    store: &Store,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    let member_id = prompter.token("Enter member id:")?;
    let begin = prompter.date("Enter date (mm/dd/yy):")?;
    let dates = match prompter.optional_date("Enter end date (mm/dd/yy), or nothing for one day:")? {
        Some(end) => DateFilter::Between(begin, end),
        None => DateFilter::On(begin),
    };

    let receipts = match store.get_transactions(&TransactionQuery { member_id, dates }) {
        Ok(receipts) => receipts,
        Err(err) => return prompter.say(describe(&err)),
    };

    if receipts.is_empty() {
        return prompter.say("No transactions in that period.");
    }
    for receipt in &receipts {
        prompter.say(format_receipt(receipt))?;
    }
    Ok(())
}
