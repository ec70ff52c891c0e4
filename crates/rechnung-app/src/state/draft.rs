//! # Draft State
//!
//! Holds the current invoice draft snapshot.
//!
//! ## Thread Safety
//! The draft is wrapped in `Arc<Mutex<T>>` because the UI host may call
//! services from its event loop and background tasks. The lock is held
//! only long enough to swap or clone the snapshot.
//!
//! ## Replace-On-Change Discipline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Draft State Operations                               │
//! │                                                                         │
//! │  Frontend Action          Service                Snapshot Change       │
//! │  ───────────────          ───────                ───────────────       │
//! │                                                                         │
//! │  "+ Hinzufügen" ─────────► add_line_item() ─────► apply(AddItem)       │
//! │                                                                         │
//! │  blur Menge field ───────► update_line_item() ──► apply(EditItem)      │
//! │                                                                         │
//! │  "Löschen" ──────────────► remove_line_item() ──► apply(RemoveItem)    │
//! │                                                                         │
//! │  print / new invoice ────► finalize_invoice() ──► replace(fresh draft) │
//! │                                                                         │
//! │  The reducer computes a complete new snapshot and it is swapped in     │
//! │  under the lock. Readers never observe a partially edited draft.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};

use rechnung_core::format::format_eur;
use rechnung_core::{reduce, DraftAction, InvoiceDraft};

/// Managed draft state.
#[derive(Debug)]
pub struct DraftState {
    draft: Arc<Mutex<InvoiceDraft>>,
}

impl DraftState {
    /// Creates draft state holding the given initial draft.
    pub fn new(initial: InvoiceDraft) -> Self {
        DraftState {
            draft: Arc::new(Mutex::new(initial)),
        }
    }

    /// Returns a clone of the current snapshot.
    pub fn snapshot(&self) -> InvoiceDraft {
        self.draft.lock().expect("Draft mutex poisoned").clone()
    }

    /// Applies an action through the pure reducer and swaps the resulting
    /// snapshot in. Returns the new snapshot.
    pub fn apply(&self, action: DraftAction) -> InvoiceDraft {
        let mut guard = self.draft.lock().expect("Draft mutex poisoned");
        let next = reduce(&guard, action);
        *guard = next.clone();
        next
    }

    /// Replaces the current snapshot wholesale (new draft after finalize).
    /// Returns the new snapshot.
    pub fn replace(&self, next: InvoiceDraft) -> InvoiceDraft {
        let mut guard = self.draft.lock().expect("Draft mutex poisoned");
        *guard = next.clone();
        next
    }
}

/// Draft totals summary for service responses.
///
/// `total` carries the shared de-DE formatting so the form footer shows
/// exactly what the printed copy will.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftTotals {
    pub item_count: usize,
    pub total_cents: i64,
    pub total: String,
}

impl From<&InvoiceDraft> for DraftTotals {
    fn from(draft: &InvoiceDraft) -> Self {
        let total = draft.total();
        DraftTotals {
            item_count: draft.item_count(),
            total_cents: total.cents(),
            total: format_eur(total),
        }
    }
}
