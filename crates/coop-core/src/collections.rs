//! # Collections
//!
//! The three lists the [`Store`](crate::Store) owns.
//!
//! ## Lookup Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  search("P3")                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  [P1] → [P2] → [P3] ← first match in insertion order                    │
//! │                                                                         │
//! │  Linear scan: ids and names are unique, so the first match is the only  │
//! │  match. Insertion order is kept because every listing prints in it.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entities::{Member, Order, Product};

fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.to_lowercase().starts_with(&prefix.to_lowercase())
}

// =============================================================================
// Product List
// =============================================================================

/// The product catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductList {
    products: Vec<Product>,
}

impl ProductList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds a product by id.
    pub fn search(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    pub fn search_mut(&mut self, product_id: &str) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id == product_id)
    }

    /// Finds a product by exact (case-sensitive) name.
    pub fn search_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name == name)
    }

    /// Products whose name begins with `prefix`, ignoring case.
    pub fn starting_with<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Product> {
        self.products
            .iter()
            .filter(move |p| starts_with_ignore_case(&p.name, prefix))
    }

    /// Appends a product. Uniqueness is checked by the caller.
    pub fn insert(&mut self, product: Product) {
        debug!(product_id = %product.id, "Inserting product");
        self.products.push(product);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Member List
// =============================================================================

/// Enrolled members.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberList {
    members: Vec<Member>,
}

impl MemberList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self, member_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == member_id)
    }

    pub fn search_mut(&mut self, member_id: &str) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.id == member_id)
    }

    /// Members whose name begins with `prefix`, ignoring case.
    pub fn starting_with<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = &'a Member> {
        self.members
            .iter()
            .filter(move |m| starts_with_ignore_case(&m.name, prefix))
    }

    pub fn insert(&mut self, member: Member) {
        debug!(member_id = %member.id, "Inserting member");
        self.members.push(member);
    }

    /// Removes and returns the member, keeping the order of the rest.
    pub fn remove(&mut self, member_id: &str) -> Option<Member> {
        let index = self.members.iter().position(|m| m.id == member_id)?;
        debug!(member_id = %member_id, "Removing member");
        Some(self.members.remove(index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.iter()
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

// =============================================================================
// Order List
// =============================================================================

/// Every restock order ever placed, fulfilled or not.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderList {
    orders: Vec<Order>,
}

impl OrderList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finds an order by id regardless of status.
    pub fn search(&self, order_id: &str) -> Option<&Order> {
        self.orders.iter().find(|o| o.id == order_id)
    }

    /// Finds an order by id only if it is still outstanding.
    pub fn search_outstanding(&mut self, order_id: &str) -> Option<&mut Order> {
        self.orders
            .iter_mut()
            .find(|o| o.id == order_id && o.outstanding)
    }

    pub fn insert(&mut self, order: Order) {
        debug!(order_id = %order.id, product_id = %order.product_id, "Inserting order");
        self.orders.push(order);
    }

    pub fn outstanding(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter().filter(|o| o.outstanding)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.iter()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price: Money::from_cents(100),
            reorder_level: 2,
            stock_on_hand: 5,
        }
    }

    #[test]
    fn test_product_search_by_id_and_name() {
        let mut products = ProductList::new();
        products.insert(product("P1", "Apples 2lb"));
        products.insert(product("P2", "Apple Juice"));

        assert_eq!(products.search("P2").map(|p| p.name.as_str()), Some("Apple Juice"));
        assert!(products.search("P3").is_none());
        assert!(products.search_name("Apples 2lb").is_some());
        assert!(products.search_name("apples 2lb").is_none());
    }

    #[test]
    fn test_prefix_listing_ignores_case_and_keeps_order() {
        let mut products = ProductList::new();
        products.insert(product("P1", "Apples 2lb"));
        products.insert(product("P2", "Bread"));
        products.insert(product("P3", "apple juice"));

        let ids: Vec<_> = products.starting_with("APPLE").map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["P1", "P3"]);
    }

    #[test]
    fn test_member_remove() {
        let mut members = MemberList::new();
        members.insert(Member::new(1, "Ryan Kinsella", "567 8th Street", "234-5678", Money::zero()));
        members.insert(Member::new(2, "Marc Wedo", "1213 14th Ave", "987-6543", Money::zero()));

        let removed = members.remove("M1").unwrap();
        assert_eq!(removed.name, "Ryan Kinsella");
        assert!(members.remove("M1").is_none());
        assert_eq!(members.len(), 1);
        assert_eq!(members.iter().next().map(|m| m.id.as_str()), Some("M2"));
    }

    #[test]
    fn test_outstanding_filter() {
        let eggs = product("P1", "Eggs 12pk");
        let mut orders = OrderList::new();
        orders.insert(Order::new(1, &eggs, 4));
        orders.insert(Order::new(2, &eggs, 4));

        orders.search_outstanding("O1").unwrap().fulfil();

        assert!(orders.search_outstanding("O1").is_none());
        assert!(orders.search("O1").is_some());
        let outstanding: Vec<_> = orders.outstanding().map(|o| o.id.as_str()).collect();
        assert_eq!(outstanding, ["O2"]);
        assert_eq!(orders.len(), 2);
    }
}
