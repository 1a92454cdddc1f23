//! # Store Facade
//!
//! Every operation the console offers goes through [`Store`].
//!
//! ## Operation Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    validate → mutate → report                           │
//! │                                                                         │
//! │  Request value ──► Store method ──► Ok(snapshot)  → OPERATION_COMPLETED │
//! │                         │                                               │
//! │                         └─────────► Err(StoreError) → one ResultCode    │
//! │                                                                         │
//! │  No method panics and nothing is left half-applied: all checks run      │
//! │  before the first collection is touched.                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Checkout Workflow
//! ```text
//! begin_transaction()                 → Transaction (owned by the caller)
//!      │
//!      ▼
//! check_out_item(&mut tx, P1 × 6)     → line item added, stock untouched
//! check_out_item(&mut tx, P2 × 2)
//!      │
//!      ▼
//! display_purchases(&tx)              → Receipt
//!      │
//!      ▼
//! finalize_transaction("M1", tx)      → stock decremented, restock orders
//!                                       placed where stock ≤ reorder level
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::{debug, info, warn};

use crate::collections::{MemberList, OrderList, ProductList};
use crate::dto::{
    CheckoutItem, FinalizedTransaction, MemberInfo, NewMember, NewProduct, OrderInfo,
    PriceChange, ProductAdded, ProductInfo, Receipt, ShipmentProcessed, TransactionQuery,
};
use crate::entities::{
    LineItem, Member, Order, Product, Transaction, MEMBER_ID_PREFIX, ORDER_ID_PREFIX,
};
use crate::error::{StoreError, StoreResult};
use crate::money::Money;
use crate::validation;

// =============================================================================
// Id Counters
// =============================================================================

/// Last member and order sequence numbers handed out.
///
/// Persisted next to the aggregate so ids keep increasing across restarts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdCounters {
    pub members: u64,
    pub orders: u64,
}

impl IdCounters {
    fn next_member(&mut self) -> u64 {
        self.members += 1;
        self.members
    }

    fn next_order(&mut self) -> u64 {
        self.orders += 1;
        self.orders
    }
}

/// Highest `n` among ids of the form `<prefix><n>`; other ids are ignored.
fn highest_sequence<'a>(ids: impl Iterator<Item = &'a str>, prefix: &str) -> u64 {
    ids.filter_map(|id| id.strip_prefix(prefix)?.parse::<u64>().ok())
        .max()
        .unwrap_or(0)
}

// =============================================================================
// Store
// =============================================================================

/// The store: catalog, membership, and restock orders.
///
/// Constructed explicitly and passed to whoever needs it. Serializes to the
/// three collections; the counters travel separately (see
/// [`Store::counters`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    products: ProductList,
    members: MemberList,
    orders: OrderList,
    #[serde(skip)]
    counters: IdCounters,
}

impl Store {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current id counters, for persistence.
    pub fn counters(&self) -> IdCounters {
        self.counters
    }

    /// Restores the id counters of a deserialized store.
    ///
    /// Counters never end up below the highest `M<n>` / `O<n>` already in
    /// the store. Duplicate ids in the collections are logged.
    pub fn with_counters(mut self, counters: IdCounters) -> Self {
        let seen = IdCounters {
            members: highest_sequence(self.members.iter().map(|m| m.id.as_str()), MEMBER_ID_PREFIX),
            orders: highest_sequence(self.orders.iter().map(|o| o.id.as_str()), ORDER_ID_PREFIX),
        };
        if seen.members > counters.members || seen.orders > counters.orders {
            warn!(?counters, ?seen, "Id counters behind stored ids, raising them");
        }
        self.counters = IdCounters {
            members: counters.members.max(seen.members),
            orders: counters.orders.max(seen.orders),
        };

        for (kind, ids) in [
            ("product", self.products.iter().map(|p| p.id.as_str()).collect::<Vec<_>>()),
            ("member", self.members.iter().map(|m| m.id.as_str()).collect()),
            ("order", self.orders.iter().map(|o| o.id.as_str()).collect()),
        ] {
            let mut unique = HashSet::new();
            for id in ids {
                if !unique.insert(id) {
                    warn!(kind, id, "Duplicate id in loaded store");
                }
            }
        }
        self
    }

    // =========================================================================
    // Products
    // =========================================================================

    /// Adds a product and places its initial order.
    ///
    /// ## Checks (in order)
    /// 1. Blank id/name, negative levels → `OperationFailed`
    /// 2. Id already in the catalog → `ProductExists`
    /// 3. Name already in the catalog → `NameInUse`
    /// 4. Price text not a decimal → `NotDecimal`
    ///
    /// The initial order is for twice the reorder level, whatever the stock.
    pub fn add_product(&mut self, request: NewProduct) -> StoreResult<ProductAdded> {
        validation::validate_product_id(&request.id)?;
        validation::validate_product_name(&request.name)?;
        let reorder_level = validation::validate_level("reorder level", request.reorder_level)?;
        let stock = validation::validate_level("stock on hand", request.stock_on_hand)?;

        if self.products.search(&request.id).is_some() {
            return Err(StoreError::ProductExists(request.id));
        }
        if self.products.search_name(&request.name).is_some() {
            return Err(StoreError::NameInUse(request.name));
        }
        let price = Money::parse(&request.price).map_err(|e| StoreError::NotDecimal(e.input))?;

        let product = Product {
            id: request.id,
            name: request.name,
            price,
            reorder_level,
            stock_on_hand: i64::from(stock),
        };
        let order = Order::new(
            self.counters.next_order(),
            &product,
            product.restock_quantity(),
        );

        let added = ProductAdded {
            product: ProductInfo::from(&product),
            initial_order: OrderInfo::from(&order),
        };
        info!(
            product_id = %product.id,
            order_id = %order.id,
            quantity = order.quantity,
            "Product added"
        );

        self.products.insert(product);
        self.orders.insert(order);
        Ok(added)
    }

    /// Changes the price of a product. The stored price is untouched on error.
    pub fn change_price(&mut self, request: PriceChange) -> StoreResult<ProductInfo> {
        let product = self
            .products
            .search_mut(&request.product_id)
            .ok_or_else(|| StoreError::ProductNotFound(request.product_id.clone()))?;

        let price = Money::parse(&request.price).map_err(|e| StoreError::NotDecimal(e.input))?;
        product.price = price;

        info!(product_id = %product.id, price = %price, "Price changed");
        Ok(ProductInfo::from(&*product))
    }

    /// Snapshot of one product.
    pub fn find_product(&self, product_id: &str) -> Option<ProductInfo> {
        self.products.search(product_id).map(ProductInfo::from)
    }

    /// All products, in the order they were added.
    pub fn products(&self) -> Vec<ProductInfo> {
        self.products.iter().map(ProductInfo::from).collect()
    }

    /// Products whose name begins with `prefix` (case-insensitive).
    pub fn product_info(&self, prefix: &str) -> Vec<ProductInfo> {
        self.products
            .starting_with(prefix.trim())
            .map(ProductInfo::from)
            .collect()
    }

    // =========================================================================
    // Members
    // =========================================================================

    /// Enrolls a member under the next sequential id. Always succeeds.
    pub fn enroll_member(&mut self, request: NewMember) -> MemberInfo {
        let member = Member::new(
            self.counters.next_member(),
            request.name,
            request.address,
            request.phone,
            request.fee,
        );
        let info = MemberInfo::from(&member);

        info!(member_id = %member.id, "Member enrolled");
        self.members.insert(member);
        info
    }

    /// Removes a member and returns the removed member's fields.
    pub fn remove_member(&mut self, member_id: &str) -> StoreResult<MemberInfo> {
        let member = self
            .members
            .remove(member_id)
            .ok_or_else(|| StoreError::NoSuchMember(member_id.to_string()))?;

        info!(member_id = %member.id, "Member removed");
        Ok(MemberInfo::from(&member))
    }

    /// Looks a member up, e.g. before starting a checkout.
    pub fn search_membership(&self, member_id: &str) -> StoreResult<MemberInfo> {
        self.members
            .search(member_id)
            .map(MemberInfo::from)
            .ok_or_else(|| StoreError::NoSuchMember(member_id.to_string()))
    }

    pub fn members(&self) -> Vec<MemberInfo> {
        self.members.iter().map(MemberInfo::from).collect()
    }

    /// Members whose name begins with `prefix` (case-insensitive).
    pub fn member_info(&self, prefix: &str) -> Vec<MemberInfo> {
        self.members
            .starting_with(prefix.trim())
            .map(MemberInfo::from)
            .collect()
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Starts a new, empty checkout.
    pub fn begin_transaction(&self) -> Transaction {
        let transaction = Transaction::new();
        debug!(transaction_id = %transaction.id, "Transaction started");
        transaction
    }

    /// Scans an item into `transaction`. Stock is not adjusted until the
    /// transaction is finalized.
    pub fn check_out_item(
        &self,
        transaction: &mut Transaction,
        item: CheckoutItem,
    ) -> StoreResult<ProductInfo> {
        let product = self
            .products
            .search(&item.product_id)
            .ok_or_else(|| StoreError::ProductNotFound(item.product_id.clone()))?;
        validation::validate_quantity(item.quantity)?;

        transaction.add_item(product, item.quantity);
        debug!(
            transaction_id = %transaction.id,
            product_id = %item.product_id,
            quantity = item.quantity,
            "Item checked out"
        );
        Ok(ProductInfo::from(product))
    }

    /// Receipt for an in-progress checkout.
    pub fn display_purchases(&self, transaction: &Transaction) -> Receipt {
        Receipt::from(transaction)
    }

    /// Files `transaction` under the member and adjusts inventory.
    ///
    /// For every line item, stock drops by the quantity sold; if it ends at
    /// or below the reorder level a restock order for twice that level is
    /// placed. A product listed on two lines is adjusted (and possibly
    /// reordered) twice.
    ///
    /// ## Errors
    /// `UnknownBuyer` (code `NoSuchMember`) carries the transaction back.
    pub fn finalize_transaction(
        &mut self,
        member_id: &str,
        transaction: Transaction,
    ) -> StoreResult<FinalizedTransaction> {
        let Some(member) = self.members.search_mut(member_id) else {
            return Err(StoreError::UnknownBuyer {
                member_id: member_id.to_string(),
                transaction: Box::new(transaction),
            });
        };

        let receipt = Receipt::from(&transaction);
        member.add_transaction(transaction);
        let member = MemberInfo::from(&*member);

        let orders_placed = receipt
            .items
            .iter()
            .filter_map(|item| self.adjust_inventory(item))
            .collect::<Vec<_>>();

        info!(
            member_id = %member.id,
            transaction_id = %receipt.transaction_id,
            total = %receipt.total,
            orders_placed = orders_placed.len(),
            "Transaction finalized"
        );
        Ok(FinalizedTransaction {
            member,
            receipt,
            orders_placed,
        })
    }

    fn adjust_inventory(&mut self, item: &LineItem) -> Option<OrderInfo> {
        let Some(product) = self.products.search_mut(&item.product_id) else {
            warn!(product_id = %item.product_id, "Sold product is no longer in the catalog");
            return None;
        };

        let stock = product.sell(item.quantity);
        debug!(product_id = %product.id, stock, "Adjusted stock");
        if stock < 0 {
            warn!(product_id = %product.id, stock, "Stock on hand is negative");
        }

        if !product.needs_reorder() {
            return None;
        }

        let order = Order::new(
            self.counters.next_order(),
            product,
            product.restock_quantity(),
        );
        info!(
            product_id = %product.id,
            order_id = %order.id,
            quantity = order.quantity,
            "Restock order placed"
        );
        let placed = OrderInfo::from(&order);
        self.orders.insert(order);
        Some(placed)
    }

    /// Receipts of a member's transactions on a date or in a date range.
    pub fn get_transactions(&self, query: &TransactionQuery) -> StoreResult<Vec<Receipt>> {
        let member = self
            .members
            .search(&query.member_id)
            .ok_or_else(|| StoreError::NoSuchMember(query.member_id.clone()))?;

        Ok(member
            .transactions()
            .filter(|t| query.dates.matches(t))
            .map(Receipt::from)
            .collect())
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Receives the shipment for an outstanding order.
    ///
    /// Unknown ids and orders that were already received both report
    /// `NoOrderFound`.
    pub fn process_shipment(&mut self, order_id: &str) -> StoreResult<ShipmentProcessed> {
        let order = self
            .orders
            .search_outstanding(order_id)
            .ok_or_else(|| StoreError::NoOrderFound(order_id.to_string()))?;
        let product = self
            .products
            .search_mut(&order.product_id)
            .ok_or_else(|| StoreError::ProductNotFound(order.product_id.clone()))?;

        let stock = product.receive(order.quantity);
        order.fulfil();

        info!(order_id = %order.id, product_id = %product.id, stock, "Shipment processed");
        Ok(ShipmentProcessed {
            order: OrderInfo::from(&*order),
            product: ProductInfo::from(&*product),
        })
    }

    /// Snapshot of one order, outstanding or not.
    pub fn find_order(&self, order_id: &str) -> Option<OrderInfo> {
        self.orders.search(order_id).map(OrderInfo::from)
    }

    /// Orders still waiting for a shipment, oldest first.
    pub fn outstanding_orders(&self) -> Vec<OrderInfo> {
        self.orders.outstanding().map(OrderInfo::from).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
