//! Member entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::Transaction;
use crate::money::Money;

/// Prefix of generated member ids (`M1`, `M2`, ...).
pub const MEMBER_ID_PREFIX: &str = "M";

/// A co-op member and their purchase history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    /// Membership fee paid on enrollment.
    pub fee: Money,
    pub joined_at: DateTime<Utc>,
    /// Finalized transactions, oldest first.
    transactions: Vec<Transaction>,
}

impl Member {
    /// Creates a member with the `n`-th generated id, joined now.
    pub fn new(
        sequence: u64,
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
        fee: Money,
    ) -> Self {
        Member {
            id: format!("{MEMBER_ID_PREFIX}{sequence}"),
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
            fee,
            joined_at: Utc::now(),
            transactions: Vec::new(),
        }
    }

    /// Records a finalized transaction.
    pub fn add_transaction(&mut self, transaction: Transaction) {
        self.transactions.push(transaction);
    }

    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id() {
        let member = Member::new(3, "Marc Wedo", "1213 14th Ave", "987-6543", Money::zero());
        assert_eq!(member.id, "M3");
        assert_eq!(member.transactions().count(), 0);
    }
}
