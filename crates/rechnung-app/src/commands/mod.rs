//! # Services Module
//!
//! All services exposed to the UI host.
//!
//! ## Service Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── draft.rs    ◄─── Draft editing (add/edit/remove lines, header)
//! ├── invoice.rs  ◄─── Numbering + finalize
//! ├── auth.rs     ◄─── Access gate
//! └── config.rs   ◄─── Configuration retrieval
//! ```
//!
//! ## How Services Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Service Call Flow                                    │
//! │                                                                         │
//! │  Frontend (WebView)                                                     │
//! │  ─────────────────                                                      │
//! │  user blurs the Menge field of one position                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  update_line_item(draft_state, item_id, Quantity("3"))                  │
//! │         │                                                               │
//! │         │  reducer commits the coerced value,                           │
//! │         │  state swaps in the new snapshot                              │
//! │         ▼                                                               │
//! │  DraftResponse { draft, totals } ── JSON ──► form + preview re-render  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each service declares only the state it needs:
//! ```rust,ignore
//! // Only needs the draft
//! fn add_line_item(draft: &DraftState) -> DraftResponse
//!
//! // Needs storage and the draft (reads the numbering counter)
//! async fn new_draft(store: &StoreState, draft: &DraftState) -> ...
//!
//! // Needs everything (commits the number, builds the document)
//! async fn finalize_invoice(store, draft, config) -> ...
//! ```

pub mod auth;
pub mod config;
pub mod draft;
pub mod invoice;
