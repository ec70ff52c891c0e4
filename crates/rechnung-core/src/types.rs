//! # Domain Types
//!
//! Core domain types used throughout Rechnung.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌───────────────────────┐        ┌───────────────────────┐            │
//! │  │     InvoiceDraft      │        │     InvoiceItem       │            │
//! │  │  ───────────────────  │ 1    * │  ───────────────────  │            │
//! │  │  date                 │───────►│  id (UUID, stable)    │            │
//! │  │  invoice_number       │        │  description          │            │
//! │  │  customer_*           │        │  quantity (≥ 1)       │            │
//! │  │  items (never empty)  │        │  unit_price_cents     │            │
//! │  └───────────────────────┘        └───────────────────────┘            │
//! │                                                                         │
//! │  Derived, never stored:                                                 │
//! │    line total = quantity × unit_price_cents                             │
//! │    draft total = Σ line totals (recomputed on every read)               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity Pattern
//! Line items carry a UUID v4 `id` generated at creation. The id is the
//! only field used to address an item and is never reused after removal,
//! so edits keep targeting the same row while the collection changes
//! around it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Invoice Item
// =============================================================================

/// A single billable position on the invoice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceItem {
    /// Unique identifier (UUID v4). Stable across edits, never reused.
    pub id: String,

    /// Free-text description ("Catering Service", ...). May be empty while
    /// the user is still typing.
    pub description: String,

    /// Quantity. A committed item always has `quantity >= 1`.
    pub quantity: i64,

    /// Unit price in euro cents. A committed item always has
    /// `unit_price_cents >= 0`.
    pub unit_price_cents: i64,
}

impl InvoiceItem {
    /// Creates a fresh, empty line item: no description, quantity 1,
    /// price 0, new UUID.
    pub fn new() -> Self {
        InvoiceItem {
            id: Uuid::new_v4().to_string(),
            description: String::new(),
            quantity: 1,
            unit_price_cents: 0,
        }
    }

    /// Returns the unit price as Money.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_cents(self.unit_price_cents)
    }

    /// Calculates the line total (unit price × quantity). Derived on every
    /// call, never cached.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.unit_price().multiply_quantity(self.quantity)
    }
}

impl Default for InvoiceItem {
    fn default() -> Self {
        InvoiceItem::new()
    }
}

// =============================================================================
// Invoice Draft
// =============================================================================

/// The in-memory invoice being edited.
///
/// ## Invariants
/// - `items` is never empty (a draft starts with one empty item and the
///   reducer refuses to remove the last one)
/// - item ids are unique for the draft's lifetime
/// - committed numeric fields satisfy the ranges on [`InvoiceItem`]
///
/// The total is *not* a field: it is derived fresh on every
/// [`InvoiceDraft::total`] call so it can never drift from the items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct InvoiceDraft {
    /// Invoice date.
    #[ts(as = "String")]
    pub date: NaiveDate,

    /// Invoice number shown on the document. Suggested by the numbering
    /// policy but free text: the user may overwrite it with anything.
    pub invoice_number: String,

    /// Customer name or company. Empty allowed.
    pub customer_name: String,

    /// Customer street and house number. Empty allowed.
    pub customer_street: String,

    /// Customer postal code. Empty allowed.
    pub customer_postal_code: String,

    /// Customer city. Empty allowed.
    pub customer_city: String,

    /// Line items in display order (insertion order). Never empty.
    pub items: Vec<InvoiceItem>,
}

impl InvoiceDraft {
    /// Creates a new draft with the given date and invoice number, empty
    /// customer fields and exactly one fresh line item.
    pub fn new(date: NaiveDate, invoice_number: impl Into<String>) -> Self {
        InvoiceDraft {
            date,
            invoice_number: invoice_number.into(),
            customer_name: String::new(),
            customer_street: String::new(),
            customer_postal_code: String::new(),
            customer_city: String::new(),
            items: vec![InvoiceItem::new()],
        }
    }

    /// Looks up an item by id.
    pub fn item(&self, id: &str) -> Option<&InvoiceItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Number of line items.
    #[inline]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// The invoice total: Σ quantity × unit price over all items.
    ///
    /// Recomputed from the item collection on every call.
    pub fn total(&self) -> Money {
        self.items
            .iter()
            .fold(Money::zero(), |sum, item| sum + item.line_total())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_item_defaults() {
        let item = InvoiceItem::new();
        assert!(item.description.is_empty());
        assert_eq!(item.quantity, 1);
        assert_eq!(item.unit_price_cents, 0);
        assert!(!item.id.is_empty());
    }

    #[test]
    fn test_item_ids_are_unique() {
        let a = InvoiceItem::new();
        let b = InvoiceItem::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_line_total() {
        let mut item = InvoiceItem::new();
        item.quantity = 3;
        item.unit_price_cents = 1250;
        assert_eq!(item.line_total().cents(), 3750);
    }

    #[test]
    fn test_new_draft_has_one_item() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let draft = InvoiceDraft::new(date, "2026-001");
        assert_eq!(draft.item_count(), 1);
        assert_eq!(draft.invoice_number, "2026-001");
        assert!(draft.customer_name.is_empty());
        assert_eq!(draft.total(), Money::zero());
    }

    #[test]
    fn test_total_follows_items() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let mut draft = InvoiceDraft::new(date, "2026-001");
        draft.items[0].quantity = 2;
        draft.items[0].unit_price_cents = 500;

        let mut second = InvoiceItem::new();
        second.quantity = 1;
        second.unit_price_cents = 199;
        draft.items.push(second);

        assert_eq!(draft.total().cents(), 1199);
    }

    /// The renderers consume camelCase JSON; the field names are a contract.
    #[test]
    fn test_serializes_camel_case() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
        let draft = InvoiceDraft::new(date, "2026-001");
        let json = serde_json::to_value(&draft).unwrap();

        assert_eq!(json["invoiceNumber"], "2026-001");
        assert_eq!(json["date"], "2026-08-07");
        assert!(json["customerPostalCode"].is_string());
        assert_eq!(json["items"][0]["unitPriceCents"], 0);
    }
}
