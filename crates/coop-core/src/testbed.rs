//! # Sample Data
//!
//! Fills a store with five members and twenty products for demos and manual
//! testing. Used by the console's "generate a test bed" start-up option and
//! by the `seed` binary in `coop-persist`.
//!
//! ## Generated Data
//! - Members `M1`..`M5`, each paying a $20.00 fee
//! - Products `P1`..`P20` with stock cycling 10, 12, 14, 16, 18 and reorder
//!   levels cycling 5, 6, 7, 8, 9
//! - One initial restock order per product (`O1`..`O20` on an empty store)

use tracing::info;

use crate::dto::{NewMember, NewProduct};
use crate::error::StoreResult;
use crate::money::Money;
use crate::store::Store;

/// Fee every sample member pays.
pub const MEMBER_FEE: Money = Money::from_cents(2000);

/// Sample members: (name, address, phone).
const MEMBERS: &[(&str, &str, &str)] = &[
    ("Rich Fritz", "123 4th street", "123-4567"),
    ("Ryan Kinsella", "567 8th Street", "234-5678"),
    ("Nalongsone Danddank", "910 11th Ave", "345-7890"),
    ("Marc Wedo", "1213 14th Ave", "987-6543"),
    ("Gilbert Ponsness", "1516 17th Ln", "876-5432"),
];

/// Sample products: (name, price as typed).
const PRODUCTS: &[(&str, &str)] = &[
    ("Eggs 12pk", "4.50"),
    ("Corn Chips", "3.25"),
    ("Apples 2lb", "5.00"),
    ("Cookies", "1.75"),
    ("Bread", "2.75"),
    ("Soda 12pk", "4.25"),
    ("Watermelon", "2.00"),
    ("Bananas 1lb", "0.95"),
    ("Salad Mix", "4.75"),
    ("CerealA", ".35"),
    ("Pasta", "1.50"),
    ("Marinara Sauce", "5.95"),
    ("Salsa", "4.85"),
    ("Canned Tuna", "1.99"),
    ("Ground Beef 1lb", "7.85"),
    ("Ribeye 1lb", "14.50"),
    ("Chicken 1lb", "5.15"),
    ("Almonds 1lb", "9.00"),
    ("Frozen Pizza", "6.75"),
    ("Apple Juice", "299"),
];

const STOCK_LEVELS: [i64; 5] = [10, 12, 14, 16, 18];
const REORDER_LEVELS: [i64; 5] = [5, 6, 7, 8, 9];

/// Enrolls the sample members and adds the sample products.
///
/// Fails with `ProductExists` (or `NameInUse`) when run against a store that
/// already holds a sample product; members enrolled before the failure stay.
pub fn populate(store: &mut Store) -> StoreResult<()> {
    for (name, address, phone) in MEMBERS {
        store.enroll_member(NewMember {
            name: name.to_string(),
            address: address.to_string(),
            phone: phone.to_string(),
            fee: MEMBER_FEE,
        });
    }

    for (index, (name, price)) in PRODUCTS.iter().enumerate() {
        store.add_product(NewProduct {
            id: format!("P{}", index + 1),
            name: name.to_string(),
            price: price.to_string(),
            reorder_level: REORDER_LEVELS[index % REORDER_LEVELS.len()],
            stock_on_hand: STOCK_LEVELS[index % STOCK_LEVELS.len()],
        })?;
    }

    info!(
        members = MEMBERS.len(),
        products = PRODUCTS.len(),
        "Test bed generated"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::CheckoutItem;
    use crate::error::ResultCode;

    #[test]
    fn test_populate_fills_empty_store() {
        let mut store = Store::new();
        populate(&mut store).unwrap();

        assert_eq!(store.members().len(), 5);
        assert_eq!(store.products().len(), 20);
        assert_eq!(store.outstanding_orders().len(), 20);

        let eggs = store.find_product("P1").unwrap();
        assert_eq!(eggs.name, "Eggs 12pk");
        assert_eq!(eggs.price, Money::from_cents(450));
        assert_eq!((eggs.reorder_level, eggs.stock_on_hand), (5, 10));

        let juice = store.find_product("P20").unwrap();
        assert_eq!(juice.price, Money::from_cents(29900));
        assert_eq!((juice.reorder_level, juice.stock_on_hand), (9, 18));
        assert_eq!(store.find_product("P10").unwrap().price, Money::from_cents(35));
    }

    #[test]
    fn test_populate_twice_reports_existing_product() {
        let mut store = Store::new();
        populate(&mut store).unwrap();

        let err = populate(&mut store).unwrap_err();
        assert_eq!(err.code(), ResultCode::ProductExists);
        assert_eq!(store.products().len(), 20);
    }

    #[test]
    fn test_sample_checkout_and_first_shipment() {
        let mut store = Store::new();
        populate(&mut store).unwrap();

        let mut transaction = store.begin_transaction();
        for product_id in ["P1", "P2", "P3"] {
            store
                .check_out_item(
                    &mut transaction,
                    CheckoutItem {
                        product_id: product_id.to_string(),
                        quantity: 6,
                    },
                )
                .unwrap();
        }
        let finalized = store.finalize_transaction("M1", transaction).unwrap();

        // P1 10 → 4 and P2 12 → 6 reorder; P3 14 → 8 stays above 7
        let ordered: Vec<_> = finalized
            .orders_placed
            .iter()
            .map(|o| o.product_id.as_str())
            .collect();
        assert_eq!(ordered, ["P1", "P2"]);
        assert_eq!(finalized.receipt.total, Money::from_cents(6 * (450 + 325 + 500)));

        let shipped = store.process_shipment("O1").unwrap();
        assert_eq!(shipped.product.id, "P1");
        assert_eq!(shipped.product.stock_on_hand, 14);
    }
}
