//! # Validation Module
//!
//! Commit-time coercion of raw form input.
//!
//! ## Coercion Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Numeric Input Handling                             │
//! │                                                                         │
//! │  While typing, the form may hold anything ("", "0", "2x", "-3").       │
//! │  The transient value never reaches the draft: on commit (blur) the     │
//! │  raw string passes through THIS MODULE and comes out in range.         │
//! │                                                                         │
//! │  Menge (quantity)         Preis (unit price)                           │
//! │  ─────────────────        ──────────────────                           │
//! │  "3"    → 3               "12,50" → 1250 cents                         │
//! │  ""     → 1               "12.50" → 1250 cents                         │
//! │  "0"    → 1               ""      → 0                                  │
//! │  "-2"   → 1               "abc"   → 0                                  │
//! │  "abc"  → 1               "-5"    → 0                                  │
//! │                                                                         │
//! │  Invalid input is NEVER an error: it degrades to the nearest valid     │
//! │  value and the user sees the corrected field.                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::money::Money;

// =============================================================================
// Numeric Coercion
// =============================================================================

/// Coerces a raw quantity string to a committed quantity.
///
/// ## Rules
/// - parseable integer `>= 1`: kept
/// - everything else (empty, non-numeric, zero, negative): 1
///
/// ## Example
/// ```rust
/// use rechnung_core::validation::coerce_quantity;
///
/// assert_eq!(coerce_quantity("4"), 4);
/// assert_eq!(coerce_quantity(""), 1);
/// assert_eq!(coerce_quantity("0"), 1);
/// assert_eq!(coerce_quantity("-3"), 1);
/// ```
pub fn coerce_quantity(raw: &str) -> i64 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|qty| *qty >= 1)
        .unwrap_or(1)
}

/// Coerces a raw unit price string to committed euro cents.
///
/// ## Rules
/// - parseable non-negative decimal (comma or dot separator): kept
/// - everything else (empty, non-numeric, negative): 0
pub fn coerce_unit_price(raw: &str) -> Money {
    Money::parse_decimal(raw)
        .filter(|price| !price.is_negative())
        .unwrap_or(Money::zero())
}

// =============================================================================
// Unit Tests
// =============================================================================
