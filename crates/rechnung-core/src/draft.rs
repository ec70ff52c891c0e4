//! # Draft Reducer
//!
//! Pure state transitions over [`InvoiceDraft`] snapshots.
//!
//! ## Reducer Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft State Transitions                              │
//! │                                                                         │
//! │  Frontend Action          DraftAction            Snapshot Change       │
//! │  ───────────────          ───────────            ───────────────       │
//! │                                                                         │
//! │  "+ Hinzufügen" ─────────► AddItem ─────────────► items + fresh item   │
//! │                                                                         │
//! │  "Löschen" ──────────────► RemoveItem{id} ──────► items - item         │
//! │                                                   (kept if last one)   │
//! │                                                                         │
//! │  edit position field ────► EditItem{id, edit} ──► item field replaced  │
//! │                                                   (numbers coerced)    │
//! │                                                                         │
//! │  edit date/number/        ─► EditHeader(edit) ──► header field         │
//! │  customer fields                                  replaced             │
//! │                                                                         │
//! │  reduce() NEVER mutates its input: it returns a fresh snapshot, and    │
//! │  the state layer swaps it in wholesale. Observers only ever see        │
//! │  complete drafts, and every returned draft satisfies the invariants    │
//! │  on InvoiceDraft.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Misses are silent: removing the last remaining item and editing an
//! unknown id both return the snapshot unchanged. Nothing in here fails.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{InvoiceDraft, InvoiceItem};
use crate::validation::{coerce_quantity, coerce_unit_price};

// =============================================================================
// Actions
// =============================================================================

/// An edit to a single line item field.
///
/// Numeric fields carry the *raw* form string; committing them through the
/// reducer applies the coercion rules in [`crate::validation`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum ItemEdit {
    /// Replace the description text.
    Description(String),
    /// Commit a quantity; out-of-range input coerces to 1.
    Quantity(String),
    /// Commit a unit price; non-numeric input coerces to 0.
    UnitPrice(String),
}

/// An edit to a draft header field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum HeaderEdit {
    /// Set the invoice date from an ISO `YYYY-MM-DD` string. A value that
    /// does not parse leaves the date unchanged.
    Date(String),
    /// Set the invoice number. Free text: the suggested `YYYY-NNN` value
    /// may be overwritten with anything, and whatever stands here is what
    /// finalize records.
    InvoiceNumber(String),
    /// Customer name or company.
    CustomerName(String),
    /// Customer street and house number.
    CustomerStreet(String),
    /// Customer postal code.
    CustomerPostalCode(String),
    /// Customer city.
    CustomerCity(String),
}

/// A state transition on the current draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "camelCase")]
#[ts(export)]
pub enum DraftAction {
    /// Append one fresh line item (empty description, quantity 1, price 0).
    AddItem,
    /// Remove the item with the given id. No-op when the id is unknown or
    /// only one item remains.
    RemoveItem { id: String },
    /// Edit one field of the item with the given id. No-op when the id is
    /// unknown.
    EditItem { id: String, edit: ItemEdit },
    /// Edit one header field.
    EditHeader { edit: HeaderEdit },
}

// =============================================================================
// Reducer
// =============================================================================

/// Applies an action to a draft snapshot and returns the next snapshot.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use rechnung_core::{reduce, DraftAction, InvoiceDraft};
///
/// let date = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
/// let draft = InvoiceDraft::new(date, "2026-001");
/// let next = reduce(&draft, DraftAction::AddItem);
/// assert_eq!(next.item_count(), 2);
/// assert_eq!(draft.item_count(), 1); // input untouched
/// ```
pub fn reduce(draft: &InvoiceDraft, action: DraftAction) -> InvoiceDraft {
    let mut next = draft.clone();

    match action {
        DraftAction::AddItem => {
            next.items.push(InvoiceItem::new());
        }

        DraftAction::RemoveItem { id } => {
            // The last remaining item is kept: an invoice always has at
            // least one position.
            if next.items.len() > 1 {
                next.items.retain(|item| item.id != id);
            }
        }

        DraftAction::EditItem { id, edit } => {
            if let Some(item) = next.items.iter_mut().find(|item| item.id == id) {
                match edit {
                    ItemEdit::Description(text) => item.description = text,
                    ItemEdit::Quantity(raw) => item.quantity = coerce_quantity(&raw),
                    ItemEdit::UnitPrice(raw) => {
                        item.unit_price_cents = coerce_unit_price(&raw).cents()
                    }
                }
            }
        }

        DraftAction::EditHeader { edit } => match edit {
            HeaderEdit::Date(raw) => {
                if let Ok(date) = raw.parse() {
                    next.date = date;
                }
            }
            HeaderEdit::InvoiceNumber(text) => next.invoice_number = text,
            HeaderEdit::CustomerName(text) => next.customer_name = text,
            HeaderEdit::CustomerStreet(text) => next.customer_street = text,
            HeaderEdit::CustomerPostalCode(text) => next.customer_postal_code = text,
            HeaderEdit::CustomerCity(text) => next.customer_city = text,
        },
    }

    next
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn draft() -> InvoiceDraft {
        InvoiceDraft::new(NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(), "2026-001")
    }

    #[test]
    fn test_add_item_appends_at_end() {
        let d = draft();
        let first_id = d.items[0].id.clone();

        let d = reduce(&d, DraftAction::AddItem);
        assert_eq!(d.item_count(), 2);
        assert_eq!(d.items[0].id, first_id);
        assert_eq!(d.items[1].quantity, 1);
        assert_eq!(d.items[1].unit_price_cents, 0);
    }

    #[test]
    fn test_remove_item() {
        let d = reduce(&draft(), DraftAction::AddItem);
        let second_id = d.items[1].id.clone();

        let d = reduce(&d, DraftAction::RemoveItem { id: second_id.clone() });
        assert_eq!(d.item_count(), 1);
        assert!(d.item(&second_id).is_none());
    }

    #[test]
    fn test_remove_last_item_is_a_noop() {
        let d = draft();
        let only_id = d.items[0].id.clone();

        let next = reduce(&d, DraftAction::RemoveItem { id: only_id });
        assert_eq!(next, d);
    }

    #[test]
    fn test_remove_unknown_id_is_a_noop() {
        let d = reduce(&draft(), DraftAction::AddItem);
        let next = reduce(&d, DraftAction::RemoveItem { id: "nope".into() });
        assert_eq!(next, d);
    }

    #[test]
    fn test_edit_item_description() {
        let d = draft();
        let id = d.items[0].id.clone();

        let d = reduce(
            &d,
            DraftAction::EditItem {
                id,
                edit: ItemEdit::Description("Catering Service".into()),
            },
        );
        assert_eq!(d.items[0].description, "Catering Service");
    }

    #[test]
    fn test_edit_item_coerces_numbers() {
        let d = draft();
        let id = d.items[0].id.clone();

        let d = reduce(
            &d,
            DraftAction::EditItem {
                id: id.clone(),
                edit: ItemEdit::Quantity("0".into()),
            },
        );
        assert_eq!(d.items[0].quantity, 1);

        let d = reduce(
            &d,
            DraftAction::EditItem {
                id: id.clone(),
                edit: ItemEdit::Quantity("12".into()),
            },
        );
        assert_eq!(d.items[0].quantity, 12);

        let d = reduce(
            &d,
            DraftAction::EditItem {
                id,
                edit: ItemEdit::UnitPrice("12,50".into()),
            },
        );
        assert_eq!(d.items[0].unit_price_cents, 1250);
    }

    #[test]
    fn test_edit_unknown_item_is_a_noop() {
        let d = draft();
        let next = reduce(
            &d,
            DraftAction::EditItem {
                id: "nope".into(),
                edit: ItemEdit::Description("x".into()),
            },
        );
        assert_eq!(next, d);
    }

    #[test]
    fn test_edit_header_fields() {
        let d = draft();

        let d = reduce(
            &d,
            DraftAction::EditHeader {
                edit: HeaderEdit::CustomerName("Muster GmbH".into()),
            },
        );
        let d = reduce(
            &d,
            DraftAction::EditHeader {
                edit: HeaderEdit::InvoiceNumber("SONDER-1".into()),
            },
        );
        assert_eq!(d.customer_name, "Muster GmbH");
        assert_eq!(d.invoice_number, "SONDER-1");
    }

    #[test]
    fn test_edit_date_parses_iso() {
        let d = reduce(
            &draft(),
            DraftAction::EditHeader {
                edit: HeaderEdit::Date("2026-12-24".into()),
            },
        );
        assert_eq!(d.date, NaiveDate::from_ymd_opt(2026, 12, 24).unwrap());
    }

    #[test]
    fn test_edit_date_invalid_keeps_old_value() {
        let d = draft();
        let next = reduce(
            &d,
            DraftAction::EditHeader {
                edit: HeaderEdit::Date("24.12.2026".into()),
            },
        );
        assert_eq!(next.date, d.date);
    }

    /// Add/remove sequences can never empty the item list.
    #[test]
    fn test_items_never_empty() {
        let mut d = draft();
        for _ in 0..3 {
            d = reduce(&d, DraftAction::AddItem);
        }
        let ids: Vec<String> = d.items.iter().map(|i| i.id.clone()).collect();
        for id in ids {
            d = reduce(&d, DraftAction::RemoveItem { id });
        }
        assert_eq!(d.item_count(), 1);
    }

    /// Create, add two items, remove one: the total covers the remaining
    /// two items only.
    #[test]
    fn test_total_reflects_remaining_items() {
        let mut d = draft();
        d = reduce(&d, DraftAction::AddItem);
        d = reduce(&d, DraftAction::AddItem);

        let ids: Vec<String> = d.items.iter().map(|i| i.id.clone()).collect();
        for (id, price) in ids.iter().zip(["10,00", "20,00", "40,00"]) {
            d = reduce(
                &d,
                DraftAction::EditItem {
                    id: id.clone(),
                    edit: ItemEdit::UnitPrice(price.into()),
                },
            );
        }
        assert_eq!(d.total().cents(), 7000);

        d = reduce(&d, DraftAction::RemoveItem { id: ids[1].clone() });
        assert_eq!(d.item_count(), 2);
        assert_eq!(d.total().cents(), 5000);
    }
}
