//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  An invoice total must match the printed copy to the cent.              │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    12,50 € is stored as 1250. Sums and line totals are exact.           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use rechnung_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(1250); // 12,50 €
//!
//! // Parse raw form input (accepts comma or dot)
//! let typed = Money::parse_decimal("12,50").unwrap();
//! assert_eq!(typed, price);
//!
//! // Arithmetic operations
//! let total = price + Money::from_cents(500); // 17,50 €
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in euro cents.
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic stays closed under subtraction even
///   though committed drafts only ever hold non-negative amounts
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use rechnung_core::money::Money;
    ///
    /// let price = Money::from_cents(1250); // Represents 12,50 €
    /// assert_eq!(price.cents(), 1250);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (euros) portion.
    ///
    /// ## Example
    /// ```rust
    /// use rechnung_core::money::Money;
    ///
    /// let price = Money::from_cents(1250);
    /// assert_eq!(price.euros(), 12);
    /// ```
    #[inline]
    pub const fn euros(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Parses a decimal string into Money.
    ///
    /// Accepts both `,` and `.` as the decimal separator because the form
    /// runs under a de-DE keyboard but numeric inputs report `.`.
    /// Fraction digits beyond the second are rounded half-up.
    ///
    /// ## Returns
    /// `None` for input that is not a plain decimal number. Callers decide
    /// the fallback (committed prices coerce to zero, see
    /// [`crate::validation::coerce_unit_price`]).
    ///
    /// ## Example
    /// ```rust
    /// use rechnung_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("12,50"), Some(Money::from_cents(1250)));
    /// assert_eq!(Money::parse_decimal("12.50"), Some(Money::from_cents(1250)));
    /// assert_eq!(Money::parse_decimal("7"), Some(Money::from_cents(700)));
    /// assert_eq!(Money::parse_decimal("abc"), None);
    /// ```
    pub fn parse_decimal(input: &str) -> Option<Money> {
        let normalized = input.trim().replace(',', ".");

        let (negative, digits) = match normalized.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, normalized.as_str()),
        };

        let (whole, frac) = match digits.split_once('.') {
            Some((w, f)) => (w, f),
            None => (digits, ""),
        };

        if whole.is_empty() && frac.is_empty() {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let whole: i64 = if whole.is_empty() {
            0
        } else {
            whole.parse().ok()?
        };

        // First two fraction digits are cents, the third rounds half-up.
        let frac_bytes = frac.as_bytes();
        let digit = |i: usize| frac_bytes.get(i).map_or(0, |b| i64::from(b - b'0'));
        let mut cents = whole.checked_mul(100)? + digit(0) * 10 + digit(1);
        if digit(2) >= 5 {
            cents += 1;
        }

        Some(Money(if negative { -cents } else { cents }))
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use rechnung_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299); // 2,99 €
    /// let line_total = unit_price.multiply_quantity(3);
    /// assert_eq!(line_total.cents(), 897); // 8,97 €
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Position: Catering Service, 12,50 €
    /// Menge: 3
    ///      │
    ///      ▼
    /// multiply_quantity(3) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Line Total: 37,50 €
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. User-facing output goes through
/// [`crate::format::format_eur`], which is the single formatting rule the
/// form, preview and export all share.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02} EUR", sign, self.euros().abs(), self.cents_part())
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1250);
        assert_eq!(money.cents(), 1250);
        assert_eq!(money.euros(), 12);
        assert_eq!(money.cents_part(), 50);
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 897);
    }

    #[test]
    fn test_parse_decimal_comma_and_dot() {
        assert_eq!(Money::parse_decimal("12,50"), Some(Money::from_cents(1250)));
        assert_eq!(Money::parse_decimal("12.50"), Some(Money::from_cents(1250)));
        assert_eq!(Money::parse_decimal(" 7 "), Some(Money::from_cents(700)));
        assert_eq!(Money::parse_decimal("0"), Some(Money::zero()));
        assert_eq!(Money::parse_decimal(",5"), Some(Money::from_cents(50)));
        assert_eq!(Money::parse_decimal("3."), Some(Money::from_cents(300)));
    }

    #[test]
    fn test_parse_decimal_rounds_third_digit() {
        assert_eq!(Money::parse_decimal("1.005"), Some(Money::from_cents(101)));
        assert_eq!(Money::parse_decimal("1.004"), Some(Money::from_cents(100)));
    }

    #[test]
    fn test_parse_decimal_rejects_garbage() {
        assert_eq!(Money::parse_decimal(""), None);
        assert_eq!(Money::parse_decimal("abc"), None);
        assert_eq!(Money::parse_decimal("12,5x"), None);
        assert_eq!(Money::parse_decimal("1.2.3"), None);
        assert_eq!(Money::parse_decimal("-"), None);
    }

    #[test]
    fn test_parse_decimal_negative() {
        assert_eq!(Money::parse_decimal("-2,50"), Some(Money::from_cents(-250)));
        assert!(Money::parse_decimal("-2,50").unwrap().is_negative());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1250)), "12.50 EUR");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50 EUR");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00 EUR");
    }
}
