//! # Console Error Type
//!
//! Failures at the edge of the application, plus the operator-facing text
//! for every store result code.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  Store call fails ─── StoreError ──► describe() ──► printed, menu goes  │
//! │                                                     on                  │
//! │                                                                         │
//! │  Save/load fails ──── PersistError ──► logged + printed, menu goes on   │
//! │                                                                         │
//! │  Config invalid ──┐                                                     │
//! │  stdin/stdout  ───┼── ConsoleError ──► run() returns, exit code 1       │
//! │  test bed fails ──┘                                                     │
//! │                                                                         │
//! │  stdin closed ─────── ConsoleError::InputClosed ──► clean exit          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use coop_core::{ResultCode, StoreError};
use coop_persist::PersistError;
use thiserror::Error;

/// Errors that end the console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Config file could not be read or parsed.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Config values are unusable.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Reading stdin or writing stdout failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The operator closed the input stream.
    #[error("Input closed")]
    InputClosed,

    #[error(transparent)]
    Persist(#[from] PersistError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<toml::de::Error> for ConsoleError {
    fn from(err: toml::de::Error) -> Self {
        ConsoleError::ConfigLoadFailed(err.to_string())
    }
}

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

// =============================================================================
// Result Code Messages
// =============================================================================

/// Operator-facing text for a result code.
pub fn code_message(code: ResultCode) -> &'static str {
    match code {
        ResultCode::OperationCompleted => "Done.",
        ResultCode::OperationFailed => "The operation could not be completed.",
        ResultCode::ProductNotFound => "No product with that id.",
        ResultCode::ProductExists => "A product with that id already exists.",
        ResultCode::NameInUse => "A product with that name already exists.",
        ResultCode::NotDecimal => "The price must be a decimal amount such as 4.50.",
        ResultCode::NoSuchMember => "No member with that id.",
        ResultCode::NoOrderFound => "No outstanding order with that id.",
        ResultCode::OrderPlaced => "Restock orders were placed.",
    }
}

/// What to print when a store call fails.
///
/// Validation failures name the offending field; everything else is fully
/// described by its code.
pub fn describe(err: &StoreError) -> String {
    match err {
        StoreError::Validation(detail) => {
            format!("{} {}.", code_message(err.code()), detail)
        }
        _ => code_message(err.code()).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coop_core::ValidationError;

    #[test]
    fn test_describe_uses_code_message() {
        let err = StoreError::NoOrderFound("O7".into());
        assert_eq!(describe(&err), "No outstanding order with that id.");
    }

    #[test]
    fn test_describe_validation_names_field() {
        let err = StoreError::from(ValidationError::MustBePositive {
            field: "quantity".into(),
        });
        assert_eq!(
            describe(&err),
            "The operation could not be completed. quantity must be positive."
        );
    }

    #[test]
    fn test_toml_error_is_config_load_failure() {
        let err: ConsoleError = toml::from_str::<toml::Table>("data = [").unwrap_err().into();
        assert!(matches!(err, ConsoleError::ConfigLoadFailed(_)));
    }
}
