//! # Error Types
//!
//! Domain-specific error types and the result-code vocabulary of the Store.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  coop-core (this file)                                                  │
//! │  ├── ValidationError  - Input validation failures                       │
//! │  ├── StoreError       - Facade failures, one ResultCode each            │
//! │  └── ResultCode       - What the console switches on                    │
//! │                                                                         │
//! │  coop-persist                                                           │
//! │  └── PersistError     - Snapshot file failures                          │
//! │                                                                         │
//! │  Flow: ValidationError → StoreError → ResultCode → console message      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::entities::Transaction;

// =============================================================================
// Result Code
// =============================================================================

/// Outcome of a single Store operation.
///
/// Every facade call reports exactly one of these. Successful calls report
/// `OperationCompleted`, or `OrderPlaced` when a sale triggered restocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultCode {
    OperationCompleted,
    OperationFailed,
    ProductNotFound,
    ProductExists,
    NameInUse,
    NotDecimal,
    NoSuchMember,
    NoOrderFound,
    OrderPlaced,
}

impl fmt::Display for ResultCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultCode::OperationCompleted => "OPERATION_COMPLETED",
            ResultCode::OperationFailed => "OPERATION_FAILED",
            ResultCode::ProductNotFound => "PRODUCT_NOT_FOUND",
            ResultCode::ProductExists => "PRODUCT_EXISTS",
            ResultCode::NameInUse => "NAME_IN_USE",
            ResultCode::NotDecimal => "NOT_DECIMAL",
            ResultCode::NoSuchMember => "NO_SUCH_MEMBER",
            ResultCode::NoOrderFound => "NO_ORDER_FOUND",
            ResultCode::OrderPlaced => "ORDER_PLACED",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Store Error
// =============================================================================

/// Failures reported by the [`Store`](crate::Store) facade.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No product with this id is in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// A product with this id is already in the catalog.
    #[error("Product with id {0} already exists")]
    ProductExists(String),

    /// Another product already uses this name.
    #[error("Product with name {0} already exists")]
    NameInUse(String),

    /// Price text could not be read as a decimal amount.
    #[error("Price {0} cannot be converted to a dollar value")]
    NotDecimal(String),

    /// No member with this id.
    #[error("No such member: {0}")]
    NoSuchMember(String),

    /// Finalizing for an unknown member.
    ///
    /// The checkout is handed back so the caller can retry with another id
    /// instead of losing the scanned items.
    #[error("No such member: {member_id}")]
    UnknownBuyer {
        member_id: String,
        transaction: Box<Transaction>,
    },

    /// No outstanding order with this id.
    #[error("No outstanding order: {0}")]
    NoOrderFound(String),

    /// Input failed validation before the store was touched.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl StoreError {
    /// Maps the error to its result code.
    pub fn code(&self) -> ResultCode {
        match self {
            StoreError::ProductNotFound(_) => ResultCode::ProductNotFound,
            StoreError::ProductExists(_) => ResultCode::ProductExists,
            StoreError::NameInUse(_) => ResultCode::NameInUse,
            StoreError::NotDecimal(_) => ResultCode::NotDecimal,
            StoreError::NoSuchMember(_) | StoreError::UnknownBuyer { .. } => {
                ResultCode::NoSuchMember
            }
            StoreError::NoOrderFound(_) => ResultCode::NoOrderFound,
            StoreError::Validation(_) => ResultCode::OperationFailed,
        }
    }

    /// Recovers the in-progress checkout from a failed finalize.
    pub fn into_transaction(self) -> Option<Transaction> {
        match self {
            StoreError::UnknownBuyer { transaction, .. } => Some(*transaction),
            _ => None,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

/// Result code of a finished facade call.
pub fn result_code<T>(result: &StoreResult<T>) -> ResultCode {
    match result {
        Ok(_) => ResultCode::OperationCompleted,
        Err(err) => err.code(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_error_maps_to_one_code() {
        assert_eq!(
            StoreError::ProductExists("P1".into()).code(),
            ResultCode::ProductExists
        );
        assert_eq!(StoreError::NameInUse("Eggs".into()).code(), ResultCode::NameInUse);
        assert_eq!(StoreError::NotDecimal("x".into()).code(), ResultCode::NotDecimal);
        assert_eq!(StoreError::NoOrderFound("O9".into()).code(), ResultCode::NoOrderFound);
        assert_eq!(
            StoreError::UnknownBuyer {
                member_id: "M9".into(),
                transaction: Box::new(Transaction::new()),
            }
            .code(),
            ResultCode::NoSuchMember
        );
    }

    #[test]
    fn test_validation_converts_to_operation_failed() {
        let err: StoreError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert!(matches!(err, StoreError::Validation(_)));
        assert_eq!(err.code(), ResultCode::OperationFailed);
        assert_eq!(err.to_string(), "Validation error: name is required");
    }

    #[test]
    fn test_result_code_of_results() {
        let ok: StoreResult<()> = Ok(());
        assert_eq!(result_code(&ok), ResultCode::OperationCompleted);

        let err: StoreResult<()> = Err(StoreError::NoSuchMember("M3".into()));
        assert_eq!(result_code(&err), ResultCode::NoSuchMember);
    }

    #[test]
    fn test_code_display() {
        assert_eq!(ResultCode::NotDecimal.to_string(), "NOT_DECIMAL");
        assert_eq!(ResultCode::OrderPlaced.to_string(), "ORDER_PLACED");
    }

    #[test]
    fn test_recover_transaction_from_unknown_buyer() {
        let err = StoreError::UnknownBuyer {
            member_id: "M7".into(),
            transaction: Box::new(Transaction::new()),
        };
        assert!(err.into_transaction().is_some());
        assert!(StoreError::NoSuchMember("M7".into())
            .into_transaction()
            .is_none());
    }
}
