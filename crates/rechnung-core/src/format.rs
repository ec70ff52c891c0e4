//! # de-DE Formatting
//!
//! The single formatting rule shared by every renderer.
//!
//! ## One Rule, Three Consumers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │            ┌──────────────► Form view ("= 12,50 €")                     │
//! │            │                                                            │
//! │  format_eur/format_date ──► A4 screen preview                           │
//! │            │                                                            │
//! │            └──────────────► Print / PDF export                          │
//! │                                                                         │
//! │  All three read the same draft AND the same formatting functions, so   │
//! │  the live preview can never disagree with the printed copy.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts: two decimals, comma as decimal separator, `" €"` suffix, no
//! thousands grouping ("1234,56 €"). Dates: `DD.MM.YYYY`.

use chrono::NaiveDate;

use crate::money::Money;

/// Formats an amount for display: `"1234,56 €"`.
///
/// ## Example
/// ```rust
/// use rechnung_core::format::format_eur;
/// use rechnung_core::money::Money;
///
/// assert_eq!(format_eur(Money::from_cents(123456)), "1234,56 €");
/// assert_eq!(format_eur(Money::zero()), "0,00 €");
/// ```
pub fn format_eur(amount: Money) -> String {
    let sign = if amount.is_negative() { "-" } else { "" };
    format!("{}{},{:02} €", sign, amount.euros().abs(), amount.cents_part())
}

/// Formats a date for display: `"07.08.2026"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eur() {
        assert_eq!(format_eur(Money::from_cents(0)), "0,00 €");
        assert_eq!(format_eur(Money::from_cents(5)), "0,05 €");
        assert_eq!(format_eur(Money::from_cents(1250)), "12,50 €");
        // No thousands grouping, matching the printed layout.
        assert_eq!(format_eur(Money::from_cents(123456)), "1234,56 €");
    }

    #[test]
    fn test_format_eur_negative() {
        assert_eq!(format_eur(Money::from_cents(-550)), "-5,50 €");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        assert_eq!(format_date(date), "07.08.2026");
    }
}
