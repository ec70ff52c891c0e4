//! # Draft Services
//!
//! Services for editing the current invoice draft.
//!
//! ## Draft Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft Lifecycle                                      │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐     ┌──────────┐       │
//! │  │  Fresh   │────►│ Editing  │────►│ Preview  │────►│Finalized │       │
//! │  │  Draft   │     │          │     │          │     │ Document │       │
//! │  └──────────┘     └──────────┘     └──────────┘     └──────────┘       │
//! │       ▲                │                                  │             │
//! │       │           add_line_item                    finalize_invoice    │
//! │       │           update_line_item                 (invoice.rs)        │
//! │       │           remove_line_item                        │             │
//! │       │           update_draft_header                     │             │
//! │       │                                                   │             │
//! │       └───────────────── new_draft ◄──────────────────────┘             │
//! │                     (next suggested number)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every edit returns the full new snapshot plus derived totals; the form
//! and the live preview both re-render from the same response.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::commands::invoice::next_invoice_number;
use crate::error::ApiError;
use crate::state::{DraftState, DraftTotals, StoreState};
use chrono::Utc;
use rechnung_core::{DraftAction, HeaderEdit, InvoiceDraft, ItemEdit};

/// Draft response including the snapshot and derived totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftResponse {
    pub draft: InvoiceDraft,
    pub totals: DraftTotals,
}

impl From<InvoiceDraft> for DraftResponse {
    fn from(draft: InvoiceDraft) -> Self {
        let totals = DraftTotals::from(&draft);
        DraftResponse { draft, totals }
    }
}

/// Gets the current draft and its totals.
///
/// ## When Used
/// - App startup (initial form render)
/// - Switching between form and preview tabs
pub fn get_draft(draft: &DraftState) -> DraftResponse {
    debug!("get_draft");
    DraftResponse::from(draft.snapshot())
}

/// Starts a fresh draft, discarding the current one.
///
/// The new draft carries today's date, the next suggested invoice number
/// and a single empty line item. Reading the suggestion does NOT consume
/// it: the counter only advances on finalize.
pub async fn new_draft(store: &StoreState, draft: &DraftState) -> Result<DraftResponse, ApiError> {
    debug!("new_draft");

    let number = next_invoice_number(store).await?;
    let next = draft.replace(InvoiceDraft::new(Utc::now().date_naive(), number));

    Ok(DraftResponse::from(next))
}

/// Appends a fresh line item to the draft.
///
/// Never fails; the new item has an empty description, quantity 1 and
/// price 0.
pub fn add_line_item(draft: &DraftState) -> DraftResponse {
    debug!("add_line_item");
    DraftResponse::from(draft.apply(DraftAction::AddItem))
}

/// Commits an edit to one field of one line item.
///
/// ## Behavior
/// - Unknown `item_id`: draft returned unchanged (silent no-op)
/// - Numeric fields arrive as raw form strings and are coerced into range
///   (quantity ≥ 1, price ≥ 0) before they land in the snapshot
pub fn update_line_item(draft: &DraftState, item_id: String, edit: ItemEdit) -> DraftResponse {
    debug!(item_id = %item_id, ?edit, "update_line_item");
    DraftResponse::from(draft.apply(DraftAction::EditItem { id: item_id, edit }))
}

/// Removes a line item from the draft.
///
/// ## Behavior
/// - Unknown `item_id`: draft returned unchanged
/// - Last remaining item: draft returned unchanged - an invoice always
///   keeps at least one position, matching the disabled delete button in
///   the form
pub fn remove_line_item(draft: &DraftState, item_id: String) -> DraftResponse {
    debug!(item_id = %item_id, "remove_line_item");
    DraftResponse::from(draft.apply(DraftAction::RemoveItem { id: item_id }))
}

/// Commits an edit to a draft header field (date, invoice number,
/// customer address).
///
/// Header strings are accepted as-is; the invoice number in particular is
/// free text even though the numbering service suggested a default.
pub fn update_draft_header(draft: &DraftState, edit: HeaderEdit) -> DraftResponse {
    debug!(?edit, "update_draft_header");
    DraftResponse::from(draft.apply(DraftAction::EditHeader { edit }))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rechnung_store::{Store, StoreConfig};

    fn draft_state() -> DraftState {
        DraftState::new(InvoiceDraft::new(
            NaiveDate::from_ymd_opt(2026, 8, 7).unwrap(),
            "2026-001",
        ))
    }

    async fn store_state() -> StoreState {
        StoreState::new(Store::new(StoreConfig::in_memory()).await.unwrap())
    }

    #[test]
    fn test_add_then_remove_line() {
        let state = draft_state();

        let response = add_line_item(&state);
        assert_eq!(response.totals.item_count, 2);

        let second_id = response.draft.items[1].id.clone();
        let response = remove_line_item(&state, second_id);
        assert_eq!(response.totals.item_count, 1);
    }

    #[test]
    fn test_remove_last_line_is_noop() {
        let state = draft_state();
        let only_id = state.snapshot().items[0].id.clone();

        let response = remove_line_item(&state, only_id.clone());
        assert_eq!(response.totals.item_count, 1);
        assert_eq!(response.draft.items[0].id, only_id);
    }

    #[test]
    fn test_update_line_recomputes_totals() {
        let state = draft_state();
        let id = state.snapshot().items[0].id.clone();

        update_line_item(&state, id.clone(), ItemEdit::Quantity("3".into()));
        let response = update_line_item(&state, id, ItemEdit::UnitPrice("12,50".into()));

        assert_eq!(response.totals.total_cents, 3750);
        assert_eq!(response.totals.total, "37,50 €");
    }

    #[test]
    fn test_update_header_overrides_number() {
        let state = draft_state();

        let response =
            update_draft_header(&state, HeaderEdit::InvoiceNumber("SONDER-1".into()));
        assert_eq!(response.draft.invoice_number, "SONDER-1");
    }

    #[tokio::test]
    async fn test_new_draft_resets_to_single_item() {
        let store = store_state().await;
        let state = draft_state();
        add_line_item(&state);
        update_draft_header(&state, HeaderEdit::CustomerName("Muster GmbH".into()));

        let response = new_draft(&store, &state).await.unwrap();

        assert_eq!(response.totals.item_count, 1);
        assert!(response.draft.customer_name.is_empty());
        // Nothing finalized yet, so the suggestion is the seed.
        assert_eq!(response.draft.invoice_number, "2026-001");
    }

    /// The response JSON is the renderer contract.
    #[test]
    fn test_response_shape() {
        let state = draft_state();
        let json = serde_json::to_value(get_draft(&state)).unwrap();

        assert!(json["draft"]["items"].is_array());
        assert_eq!(json["totals"]["totalCents"], 0);
        assert_eq!(json["totals"]["total"], "0,00 €");
    }
}
