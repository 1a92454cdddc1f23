//! # Money Module
//!
//! Provides the `Money` type used for prices, fees, and receipt totals.
//!
//! ## Integer Cents
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operator types "4.50"                                                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Money::parse("4.50") ──► Money(450)   ← stored as cents                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LineItem subtotal = 450 × 6 = 2700 cents                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Display: "$27.00"                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Prices entered at the console are free text. Anything `parse` rejects is
//! reported back to the operator as "not a decimal".
//!
//! ## Usage
//! ```rust
//! use coop_core::money::Money;
//!
//! let price = Money::parse("4.50").unwrap();
//! assert_eq!(price.cents(), 450);
//! assert_eq!((price * 6).to_string(), "$27.00");
//! assert!(Money::parse("four fifty").is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};
use std::str::FromStr;

// =============================================================================
// Parse Error
// =============================================================================

/// Returned when text cannot be read as a non-negative decimal amount.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{input}' is not a decimal amount")]
pub struct NotDecimal {
    pub input: String,
}

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in cents.
///
/// Signed so that differences can be represented, but `parse` only ever
/// produces non-negative amounts.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount `parse` accepts: $1,000,000.00.
    ///
    /// Keeps `price × MAX_PURCHASE_QUANTITY` and receipt totals far inside `i64`.
    pub const MAX: Money = Money(100_000_000);

    /// Creates a Money value from cents.
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Parses decimal text such as `"4.50"`, `".35"`, `"299"` or `"$2.99"`.
    ///
    /// ## Rules
    /// - Surrounding whitespace and one leading `$` are ignored
    /// - At most two digits after the point
    /// - No sign, no exponent, no thousands separators
    /// - Not above [`Money::MAX`]
    ///
    /// ```rust
    /// use coop_core::money::Money;
    ///
    /// assert_eq!(Money::parse(".35").unwrap().cents(), 35);
    /// assert_eq!(Money::parse("299").unwrap().cents(), 29_900);
    /// assert_eq!(Money::parse("$1.5").unwrap().cents(), 150);
    /// assert!(Money::parse("1.234").is_err());
    /// assert!(Money::parse("-1").is_err());
    /// ```
    pub fn parse(input: &str) -> Result<Self, NotDecimal> {
        let reject = || NotDecimal {
            input: input.to_string(),
        };

        let text = input.trim();
        let text = text.strip_prefix('$').unwrap_or(text);

        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return Err(reject());
        }
        if fraction.len() > 2 {
            return Err(reject());
        }
        if !whole.chars().chain(fraction.chars()).all(|c| c.is_ascii_digit()) {
            return Err(reject());
        }

        let whole_cents = if whole.is_empty() {
            0
        } else {
            whole
                .parse::<i64>()
                .ok()
                .and_then(|dollars| dollars.checked_mul(100))
                .ok_or_else(reject)?
        };

        // "4.5" means fifty cents, not five
        let fraction_cents = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().map_err(|_| reject())? * 10,
            _ => fraction.parse::<i64>().map_err(|_| reject())?,
        };

        whole_cents
            .checked_add(fraction_cents)
            .filter(|&cents| cents <= Money::MAX.0)
            .map(Money)
            .ok_or_else(reject)
    }

    /// Multiplies a unit price by a quantity.
    #[inline]
    pub const fn times(&self, quantity: u32) -> Self {
        Money(self.0 * quantity as i64)
    }

}

// =============================================================================
// Trait Implementations
// =============================================================================

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        // honours width and alignment, e.g. `{:>9}`
        f.pad(&format!(
            "{}${}.{:02}",
            sign,
            (self.0 / 100).abs(),
            (self.0 % 100).abs()
        ))
    }
}

impl FromStr for Money {
    type Err = NotDecimal;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, quantity: u32) -> Self {
        self.times(quantity)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
