//! # Invoice Services
//!
//! Numbering and finalize: the one place where draft state and durable
//! storage meet.
//!
//! ## Numbering Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Numbering Round Trip                                 │
//! │                                                                         │
//! │  new_draft                                                              │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  settings.get("lastInvoiceNumber")  ──► "2026-002" (or absent)         │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  next_number(stored, current year)  ──► "2026-003" suggested           │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  ... user edits the draft, may overwrite the number ...                 │
//! │      │                                                                  │
//! │      ▼                                                                  │
//! │  finalize_invoice                                                       │
//! │      ├── settings.set("lastInvoiceNumber", draft.invoice_number)        │
//! │      │       (verbatim - whatever stands in the field is recorded)      │
//! │      ├── build InvoiceDocument (formatted snapshot for the renderers)   │
//! │      └── replace draft: today's date + next suggested number            │
//! │                                                                         │
//! │  Reading a suggestion never writes; only finalize advances the          │
//! │  counter. Abandoned drafts therefore never burn a number.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{ConfigState, DraftState, StoreState};
use rechnung_core::format::{format_date, format_eur};
use rechnung_core::{numbering, InvoiceDraft, LAST_INVOICE_NUMBER_KEY};

// =============================================================================
// Responses
// =============================================================================

/// One formatted line of the final document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceLine {
    pub description: String,
    pub quantity: i64,
    /// Unit price, de-DE formatted ("12,50 €").
    pub unit_price: String,
    /// Line total, de-DE formatted.
    pub line_total: String,
}

/// The finalized invoice, ready for the print/PDF renderer.
///
/// All amounts and the date are pre-formatted with the same rules the live
/// preview uses, so the exported copy can never diverge from what the user
/// saw on screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceDocument {
    pub invoice_number: String,
    /// Invoice date, `DD.MM.YYYY`.
    pub date: String,
    pub customer_name: String,
    pub customer_street: String,
    pub customer_postal_code: String,
    pub customer_city: String,
    pub lines: Vec<InvoiceLine>,
    pub total_cents: i64,
    /// Grand total, de-DE formatted.
    pub total: String,
    /// Issuer letterhead, bank account and tax note.
    pub business: ConfigState,
}

impl InvoiceDocument {
    fn build(draft: &InvoiceDraft, config: &ConfigState) -> Self {
        InvoiceDocument {
            invoice_number: draft.invoice_number.clone(),
            date: format_date(draft.date),
            customer_name: draft.customer_name.clone(),
            customer_street: draft.customer_street.clone(),
            customer_postal_code: draft.customer_postal_code.clone(),
            customer_city: draft.customer_city.clone(),
            lines: draft
                .items
                .iter()
                .map(|item| InvoiceLine {
                    description: item.description.clone(),
                    quantity: item.quantity,
                    unit_price: format_eur(item.unit_price()),
                    line_total: format_eur(item.line_total()),
                })
                .collect(),
            total_cents: draft.total().cents(),
            total: format_eur(draft.total()),
            business: config.clone(),
        }
    }
}

// =============================================================================
// Services
// =============================================================================

/// Derives the next suggested invoice number from storage.
///
/// Read-only: the counter does not advance until [`finalize_invoice`].
/// Absent or malformed stored state falls back to the hardcoded seed.
pub async fn next_invoice_number(store: &StoreState) -> Result<String, ApiError> {
    let stored = store.inner().settings().get(LAST_INVOICE_NUMBER_KEY).await?;
    let current_year = Utc::now().year();

    let number = numbering::next_number(stored.as_deref(), current_year);
    debug!(stored = ?stored, number = %number, "next_invoice_number");

    Ok(number)
}

/// Records an invoice number as the last one used.
///
/// Unconditional overwrite, no validation: a user-edited number that does
/// not match `YYYY-NNN` is persisted verbatim (and the defensive parse in
/// the numbering policy falls back to the seed on the next read).
pub async fn commit_invoice_number(store: &StoreState, number: &str) -> Result<(), ApiError> {
    store
        .inner()
        .settings()
        .set(LAST_INVOICE_NUMBER_KEY, number)
        .await?;

    info!(number = %number, "Invoice number recorded");
    Ok(())
}

/// Finalizes the current draft.
///
/// ## What This Does
/// 1. Records the draft's invoice number - the value currently in the
///    field, which may be user-edited - as the last used number
/// 2. Builds the formatted [`InvoiceDocument`] for the print renderer
/// 3. Replaces the draft with a fresh one: today's date, the next
///    suggested number, one empty line item
///
/// ## When Used
/// - "PDF Drucken / Speichern" (print action)
/// - Explicit "new invoice" after a finished one
pub async fn finalize_invoice(
    store: &StoreState,
    draft: &DraftState,
    config: &ConfigState,
) -> Result<InvoiceDocument, ApiError> {
    let snapshot = draft.snapshot();
    debug!(invoice_number = %snapshot.invoice_number, "finalize_invoice");

    commit_invoice_number(store, &snapshot.invoice_number).await?;

    let document = InvoiceDocument::build(&snapshot, config);

    let number = next_invoice_number(store).await?;
    draft.replace(InvoiceDraft::new(Utc::now().date_naive(), number));

    info!(
        invoice_number = %document.invoice_number,
        total = %document.total,
        lines = document.lines.len(),
        "Invoice finalized"
    );

    Ok(document)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rechnung_core::{DraftAction, HeaderEdit, ItemEdit};
    use rechnung_store::{Store, StoreConfig};

    async fn store_state() -> StoreState {
        StoreState::new(Store::new(StoreConfig::in_memory()).await.unwrap())
    }

    fn draft_state(number: &str) -> DraftState {
        DraftState::new(InvoiceDraft::new(
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            number,
        ))
    }

    #[tokio::test]
    async fn test_first_suggestion_is_seed() {
        let store = store_state().await;
        assert_eq!(next_invoice_number(&store).await.unwrap(), "2026-001");
    }

    #[tokio::test]
    async fn test_suggestion_is_read_only() {
        let store = store_state().await;
        next_invoice_number(&store).await.unwrap();
        next_invoice_number(&store).await.unwrap();

        // Still nothing persisted.
        let stored = store
            .inner()
            .settings()
            .get(LAST_INVOICE_NUMBER_KEY)
            .await
            .unwrap();
        assert_eq!(stored, None);
    }

    #[tokio::test]
    async fn test_finalize_records_number_and_advances() {
        let store = store_state().await;
        // Pin the draft number to the current year so the successor stays
        // on the increment path whenever the suite runs.
        let year = Utc::now().year();
        let draft = draft_state(&format!("{year}-001"));
        let config = ConfigState::default();

        let document = finalize_invoice(&store, &draft, &config).await.unwrap();
        assert_eq!(document.invoice_number, format!("{year}-001"));

        let stored = store
            .inner()
            .settings()
            .get(LAST_INVOICE_NUMBER_KEY)
            .await
            .unwrap();
        assert_eq!(stored, Some(format!("{year}-001")));

        // The fresh draft carries the successor, one empty line.
        let next = draft.snapshot();
        assert_eq!(next.invoice_number, format!("{year}-002"));
        assert_eq!(next.item_count(), 1);
        assert!(next.customer_name.is_empty());
    }

    #[tokio::test]
    async fn test_finalize_records_user_edited_number_verbatim() {
        let store = store_state().await;
        let draft = draft_state("2026-001");
        draft.apply(DraftAction::EditHeader {
            edit: HeaderEdit::InvoiceNumber("SONDER-1".into()),
        });
        let config = ConfigState::default();

        let document = finalize_invoice(&store, &draft, &config).await.unwrap();
        assert_eq!(document.invoice_number, "SONDER-1");

        let stored = store
            .inner()
            .settings()
            .get(LAST_INVOICE_NUMBER_KEY)
            .await
            .unwrap();
        assert_eq!(stored, Some("SONDER-1".to_string()));

        // Malformed stored value: the next suggestion falls back to seed.
        let next = draft.snapshot();
        assert_eq!(next.invoice_number, "2026-001");
    }

    #[tokio::test]
    async fn test_document_formatting() {
        let store = store_state().await;
        let draft = draft_state("2026-001");
        let id = draft.snapshot().items[0].id.clone();
        draft.apply(DraftAction::EditItem {
            id: id.clone(),
            edit: ItemEdit::Description("Catering Service".into()),
        });
        draft.apply(DraftAction::EditItem {
            id: id.clone(),
            edit: ItemEdit::Quantity("3".into()),
        });
        draft.apply(DraftAction::EditItem {
            id,
            edit: ItemEdit::UnitPrice("12,50".into()),
        });

        let config = ConfigState::default();
        let document = finalize_invoice(&store, &draft, &config).await.unwrap();

        assert_eq!(document.date, "07.08.2026");
        assert_eq!(document.lines.len(), 1);
        assert_eq!(document.lines[0].unit_price, "12,50 €");
        assert_eq!(document.lines[0].line_total, "37,50 €");
        assert_eq!(document.total, "37,50 €");
        assert_eq!(document.total_cents, 3750);
        assert_eq!(document.business.business_name, "Dzevida's Catering");
    }

    /// Two finalize cycles walk the sequence: 001 recorded, 002 suggested
    /// and recorded, 003 suggested.
    #[tokio::test]
    async fn test_consecutive_finalizes_increment() {
        let store = store_state().await;
        let config = ConfigState::default();
        let year = Utc::now().year();
        let draft = draft_state(&format!("{year}-001"));

        finalize_invoice(&store, &draft, &config).await.unwrap();
        let second = finalize_invoice(&store, &draft, &config).await.unwrap();

        assert_eq!(second.invoice_number, format!("{year}-002"));
        assert_eq!(draft.snapshot().invoice_number, format!("{year}-003"));
    }
}
