//! End-to-end store workflow: catalog, membership, checkout, restocking.

use coop_core::{
    result_code, CheckoutItem, DateFilter, Money, NewMember, NewProduct, PriceChange,
    ResultCode, Store, TransactionQuery,
};

fn eggs() -> NewProduct {
    NewProduct {
        id: "P1".to_string(),
        name: "Eggs 12pk".to_string(),
        price: "4.50".to_string(),
        reorder_level: 5,
        stock_on_hand: 10,
    }
}

fn rich_fritz() -> NewMember {
    NewMember {
        name: "Rich Fritz".to_string(),
        address: "123 4th street".to_string(),
        phone: "123-4567".to_string(),
        fee: Money::from_cents(2000),
    }
}

fn stock_of(store: &Store, product_id: &str) -> i64 {
    store
        .find_product(product_id)
        .map(|p| p.stock_on_hand)
        .unwrap_or_default()
}

#[test]
fn test_sale_restock_and_shipment() {
    let mut store = Store::new();

    let added = store.add_product(eggs()).unwrap();
    assert_eq!(added.initial_order.id, "O1");
    assert_eq!(added.initial_order.quantity, 10);

    let member = store.enroll_member(rich_fritz());
    assert_eq!(member.id, "M1");

    // Scanning items leaves the shelf alone
    let mut transaction = store.begin_transaction();
    store
        .check_out_item(
            &mut transaction,
            CheckoutItem {
                product_id: "P1".to_string(),
                quantity: 6,
            },
        )
        .unwrap();
    assert_eq!(stock_of(&store, "P1"), 10);

    let receipt = store.display_purchases(&transaction);
    assert_eq!(receipt.items.len(), 1);
    assert_eq!(receipt.total, Money::from_cents(2700));

    // Finalizing sells 6, leaving 4 ≤ 5, so a restock order goes out
    let finalized = store.finalize_transaction("M1", transaction).unwrap();
    assert_eq!(finalized.code(), ResultCode::OrderPlaced);
    assert_eq!(stock_of(&store, "P1"), 4);
    assert_eq!(finalized.orders_placed.len(), 1);
    let restock = &finalized.orders_placed[0];
    assert_eq!(restock.id, "O2");
    assert_eq!(restock.quantity, 10);

    let outstanding: Vec<_> = store
        .outstanding_orders()
        .into_iter()
        .map(|o| o.id)
        .collect();
    assert_eq!(outstanding, ["O1", "O2"]);

    // Receiving the restock
    let shipped = store.process_shipment("O2").unwrap();
    assert_eq!(shipped.product.stock_on_hand, 14);
    assert!(!shipped.order.outstanding);
    assert_eq!(stock_of(&store, "P1"), 14);

    let again = store.process_shipment("O2");
    assert_eq!(result_code(&again), ResultCode::NoOrderFound);
    assert_eq!(stock_of(&store, "P1"), 14);

    // The sale is on the member's record for today
    let today = finalized.receipt.date;
    let history = store
        .get_transactions(&TransactionQuery {
            member_id: "M1".to_string(),
            dates: DateFilter::Between(today, today),
        })
        .unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0].transaction_id, finalized.receipt.transaction_id);
}

#[test]
fn test_catalog_rejections_leave_store_unchanged() {
    let mut store = Store::new();
    store.add_product(eggs()).unwrap();
    let before = store.clone();

    let duplicate_id = store.add_product(NewProduct {
        name: "Soda 12pk".to_string(),
        ..eggs()
    });
    assert_eq!(result_code(&duplicate_id), ResultCode::ProductExists);

    let duplicate_name = store.add_product(NewProduct {
        id: "P2".to_string(),
        ..eggs()
    });
    assert_eq!(result_code(&duplicate_name), ResultCode::NameInUse);

    let bad_price = store.change_price(PriceChange {
        product_id: "P1".to_string(),
        price: "4.5.0".to_string(),
    });
    assert_eq!(result_code(&bad_price), ResultCode::NotDecimal);

    assert_eq!(store, before);
    assert_eq!(
        store.find_product("P1").map(|p| p.price),
        Some(Money::from_cents(450))
    );
}

#[test]
fn test_removed_member_cannot_buy() {
    let mut store = Store::new();
    store.add_product(eggs()).unwrap();
    store.enroll_member(rich_fritz());
    store.remove_member("M1").unwrap();

    let mut transaction = store.begin_transaction();
    store
        .check_out_item(
            &mut transaction,
            CheckoutItem {
                product_id: "P1".to_string(),
                quantity: 1,
            },
        )
        .unwrap();

    let err = store.finalize_transaction("M1", transaction).unwrap_err();
    assert_eq!(err.code(), ResultCode::NoSuchMember);

    // The scanned items come back and can be finalized for a new member
    let transaction = err.into_transaction().unwrap();
    let member = store.enroll_member(rich_fritz());
    assert_eq!(member.id, "M2");

    let finalized = store.finalize_transaction(&member.id, transaction).unwrap();
    assert_eq!(finalized.receipt.total, Money::from_cents(450));
    assert_eq!(stock_of(&store, "P1"), 9);
}
