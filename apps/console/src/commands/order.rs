//! Restock order commands.

use std::io::{BufRead, Write};

use coop_core::Store;

use super::format_order;
use crate::error::{describe, ConsoleResult};
use crate::prompt::Prompter;

/// 5: receive shipments until the operator stops.
pub fn process_shipments<R: BufRead, W: Write>(
    store: &mut Store,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    loop {
        let order_id = prompter.token("Enter order id:")?;

        match store.process_shipment(&order_id) {
            Ok(shipped) => prompter.say(format!(
                "Order {} received. {} stock is now {}.",
                shipped.order.id, shipped.product.name, shipped.product.stock_on_hand
            ))?,
            Err(err) => prompter.say(describe(&err))?,
        }

        if !prompter.yes_or_no("Process more shipments?")? {
            return Ok(());
        }
    }
}

/// 10: orders still waiting for a shipment.
pub fn list_outstanding<R: BufRead, W: Write>(
    store: &Store,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    let orders = store.outstanding_orders();
    if orders.is_empty() {
        return prompter.say("No orders are outstanding.");
    }
    for order in &orders {
        prompter.say(format_order(order))?;
    }
    Ok(())
}
