//! # Invoice Numbering
//!
//! Derives the next invoice number from the last finalized one.
//!
//! ## Number Format
//! `YYYY-NNN`: 4-digit year, dash, 3-digit zero-padded sequence
//! ("2026-001", "2026-002", ...). The sequence restarts at 001 when the
//! calendar year advances.
//!
//! ## Derivation Table
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  stored value        current year      next number                      │
//! │  ────────────        ────────────      ───────────                      │
//! │  (absent)            any               2026-001   (seed)                │
//! │  "notanumber"        any               2026-001   (seed)                │
//! │  "2025-007"          2025              2025-008   (increment)           │
//! │  "2025-007"          2026              2026-001   (rollover)            │
//! │  "2027-004"          2026              2027-005   (see below)           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A stored year *ahead* of the clock (clock skew, manually edited entry)
//! takes the increment path: the sequence keeps counting under the stored
//! year instead of resetting. Historical behavior, kept as-is.
//!
//! Writing the value back is the storage layer's job and is deliberately
//! unvalidated: a hand-edited invoice number is recorded verbatim, and the
//! defensive parse here falls back to the seed on the next read.

// =============================================================================
// Constants
// =============================================================================

/// Year component of the seed number: the first year the tool was in use.
pub const SEED_YEAR: i32 = 2026;

/// Width of the zero-padded sequence component ("001").
const SEQUENCE_WIDTH: usize = 3;

// =============================================================================
// Numbering Policy
// =============================================================================

/// The hardcoded first invoice number, used whenever no (valid) previous
/// number exists.
pub fn seed_number() -> String {
    format_number(SEED_YEAR, 1)
}

/// Parses a stored `YYYY-NNN` value into `(year, sequence)`.
///
/// Exactly four year digits, a dash and exactly three sequence digits;
/// anything else is `None` and treated as absent by [`next_number`].
///
/// ## Example
/// ```rust
/// use rechnung_core::numbering::parse_number;
///
/// assert_eq!(parse_number("2025-007"), Some((2025, 7)));
/// assert_eq!(parse_number("2025-7"), None);
/// assert_eq!(parse_number("notanumber"), None);
/// ```
pub fn parse_number(value: &str) -> Option<(i32, u32)> {
    let (year, seq) = value.split_once('-')?;

    if year.len() != 4 || seq.len() != SEQUENCE_WIDTH {
        return None;
    }
    if !year.bytes().all(|b| b.is_ascii_digit()) || !seq.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some((year.parse().ok()?, seq.parse().ok()?))
}

/// Derives the next invoice number from the stored last number.
///
/// ## Arguments
/// * `stored` - the persisted last invoice number, if any
/// * `current_year` - the current calendar year (callers read the clock;
///   this function stays pure)
///
/// ## Example
/// ```rust
/// use rechnung_core::numbering::next_number;
///
/// assert_eq!(next_number(Some("2025-007"), 2025), "2025-008");
/// assert_eq!(next_number(Some("2025-007"), 2026), "2026-001");
/// assert_eq!(next_number(None, 2026), "2026-001");
/// ```
pub fn next_number(stored: Option<&str>, current_year: i32) -> String {
    let Some((year, seq)) = stored.and_then(parse_number) else {
        return seed_number();
    };

    if current_year > year {
        // Rollover: new year starts a fresh sequence, whatever the old
        // sequence stood at.
        format_number(current_year, 1)
    } else {
        format_number(year, seq + 1)
    }
}

fn format_number(year: i32, seq: u32) -> String {
    format!("{year:04}-{seq:0width$}", width = SEQUENCE_WIDTH)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        assert_eq!(parse_number("2025-007"), Some((2025, 7)));
        assert_eq!(parse_number("2026-001"), Some((2026, 1)));
        assert_eq!(parse_number("1999-999"), Some((1999, 999)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("notanumber"), None);
        assert_eq!(parse_number("2025-7"), None);
        assert_eq!(parse_number("2025-0007"), None);
        assert_eq!(parse_number("25-007"), None);
        assert_eq!(parse_number("2025007"), None);
        assert_eq!(parse_number("2025-ab7"), None);
        assert_eq!(parse_number("SONDER-1"), None);
    }

    #[test]
    fn test_increment_within_year() {
        assert_eq!(next_number(Some("2025-007"), 2025), "2025-008");
        assert_eq!(next_number(Some("2026-001"), 2026), "2026-002");
    }

    #[test]
    fn test_rollover_resets_sequence() {
        assert_eq!(next_number(Some("2025-007"), 2026), "2026-001");
        assert_eq!(next_number(Some("2025-999"), 2026), "2026-001");
        // Several skipped years still land on the current one.
        assert_eq!(next_number(Some("2023-412"), 2026), "2026-001");
    }

    #[test]
    fn test_absent_or_malformed_returns_seed() {
        assert_eq!(next_number(None, 2026), "2026-001");
        assert_eq!(next_number(Some("notanumber"), 2026), "2026-001");
        assert_eq!(next_number(Some(""), 2026), "2026-001");
        assert_eq!(next_number(Some("2026-1"), 2026), "2026-001");
    }

    /// Stored year ahead of the clock keeps incrementing under the stored
    /// year. Regression test for the asymmetric branch documented in the
    /// module docs.
    #[test]
    fn test_future_stored_year_increments_not_resets() {
        assert_eq!(next_number(Some("2027-004"), 2026), "2027-005");
    }

    #[test]
    fn test_sequence_overflow_widens() {
        // 999 + 1 does not wrap; the number simply grows a digit.
        assert_eq!(next_number(Some("2026-999"), 2026), "2026-1000");
    }

    #[test]
    fn test_seed_number() {
        assert_eq!(seed_number(), "2026-001");
    }
}
