//! Catalog commands.

use std::io::{BufRead, Write};

use coop_core::{NewProduct, PriceChange, Store};

use super::{format_order, format_product};
use crate::error::{describe, ConsoleResult};
use crate::prompt::Prompter;

/// 3: add products until the operator stops.
///
/// Each product gets an initial order for twice its reorder level.
pub fn add<R: BufRead, W: Write>(
    store: &mut Store,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    loop {
        let name = prompter.token("Enter product name:")?;
        let id = prompter.token("Enter product id:")?;
        let stock_on_hand = prompter.number("Enter stock on hand:")?;
        let price = prompter.token("Enter price:")?;
        let reorder_level = prompter.number("Enter reorder level:")?;

        let result = store.add_product(NewProduct {
            id,
            name,
            price,
            reorder_level,
            stock_on_hand,
        });
        match result {
            Ok(added) => {
                prompter.say(format!("Product added: {}", format_product(&added.product)))?;
                prompter.say(format!(
                    "Initial order placed: {}",
                    format_order(&added.initial_order)
                ))?;
            }
            Err(err) => prompter.say(describe(&err))?,
        }

        if !prompter.yes_or_no("Add more products?")? {
            return Ok(());
        }
    }
}

/// 6: change a product's price.
pub fn change_price<R: BufRead, W: Write>(
    store: &mut Store,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    let product_id = prompter.token("Enter product id:")?;
    let price = prompter.token("Enter new price:")?;

    match store.change_price(PriceChange { product_id, price }) {
        Ok(product) => prompter.say(format!(
            "{} now costs {}.",
            product.name, product.price
        )),
        Err(err) => prompter.say(describe(&err)),
    }
}

/// 7: products whose name starts with the entered text.
pub fn info<R: BufRead, W: Write>(
    store: &Store,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    let prefix = prompter.token("Enter the start of the product name:")?;
    let products = store.product_info(&prefix);

    if products.is_empty() {
        return prompter.say("No product has a name starting with that.");
    }
    for product in &products {
        prompter.say(format_product(product))?;
    }
    Ok(())
}

/// 12: the whole catalog.
pub fn list<R: BufRead, W: Write>(
    store: &Store,
    prompter: &mut Prompter<R, W>,
) -> ConsoleResult<()> {
    let products = store.products();
    if products.is_empty() {
        return prompter.say("There are no products.");
    }
    for product in &products {
        prompter.say(format_product(product))?;
    }
    Ok(())
}
