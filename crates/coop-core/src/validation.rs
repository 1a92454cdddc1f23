//! # Validation Module
//!
//! Input checks run by the Store before it touches any collection.
//!
//! ## Where Validation Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Console                                                                │
//! │  ├── Re-prompts until numbers/dates parse                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Store facade                                                           │
//! │  ├── THIS MODULE: blank ids/names, quantity and level ranges            │
//! │  └── Uniqueness (id, name) and decimal checks                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed check surfaces as `ResultCode::OperationFailed`.

use crate::error::ValidationError;
use crate::{MAX_LEVEL, MAX_PURCHASE_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_ID_LEN: usize = 32;
const MAX_NAME_LEN: usize = 200;

fn required(field: &str, value: &str, max: usize) -> ValidationResult<()> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if value.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(())
}

/// Validates an operator-assigned product id such as `P12`.
///
/// ```rust
/// use coop_core::validation::validate_product_id;
///
/// assert!(validate_product_id("P12").is_ok());
/// assert!(validate_product_id("  ").is_err());
/// ```
pub fn validate_product_id(id: &str) -> ValidationResult<()> {
    required("product id", id, MAX_ID_LEN)
}

/// Validates a product name.
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    required("product name", name, MAX_NAME_LEN)
}

/// Validates a stock or reorder level and narrows it to `u32`.
///
/// Zero is allowed; anything above [`MAX_LEVEL`] is treated as a typo.
pub fn validate_level(field: &str, level: i64) -> ValidationResult<u32> {
    if !(0..=i64::from(MAX_LEVEL)).contains(&level) {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::from(MAX_LEVEL),
        });
    }

    Ok(level as u32)
}

/// Validates a checkout quantity.
///
/// ## Rules
/// - Must be positive
/// - Must not exceed [`MAX_PURCHASE_QUANTITY`]
pub fn validate_quantity(quantity: u32) -> ValidationResult<()> {
    if quantity == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if quantity > MAX_PURCHASE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: i64::from(MAX_PURCHASE_QUANTITY),
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_id() {
        assert!(validate_product_id("P1").is_ok());
        assert!(validate_product_id("").is_err());
        assert!(validate_product_id(&"P".repeat(40)).is_err());
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Eggs 12pk").is_ok());
        assert_eq!(
            validate_product_name(" ").unwrap_err(),
            ValidationError::Required {
                field: "product name".to_string()
            }
        );
    }

    #[test]
    fn test_validate_level() {
        assert_eq!(validate_level("reorder level", 0), Ok(0));
        assert_eq!(validate_level("stock on hand", 18), Ok(18));
        assert!(validate_level("reorder level", -1).is_err());
        assert!(validate_level("reorder level", i64::from(MAX_LEVEL) + 1).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_PURCHASE_QUANTITY).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(MAX_PURCHASE_QUANTITY + 1).is_err());
    }
}
