//! # rechnung-core: Pure Business Logic for Rechnung
//!
//! This crate is the **heart** of Rechnung. It contains all business logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Rechnung Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (WebView)                           │   │
//! │  │    Form View ──► A4 Preview ──► Print / PDF Export             │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ service calls                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    rechnung-app services                        │   │
//! │  │    new_draft, add_line_item, finalize_invoice, authenticate    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ rechnung-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   draft   │  │ numbering │  │  format   │  │   │
//! │  │   │  Invoice  │  │  reducer  │  │ YYYY-NNN  │  │  de-DE    │  │   │
//! │  │   │  Draft    │  │  actions  │  │ rollover  │  │  € / date │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO CLOCK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 rechnung-store (Storage Layer)                  │   │
//! │  │        SQLite-backed settings: last number, auth flag           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types ([`InvoiceItem`], [`InvoiceDraft`])
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`draft`] - Pure reducer over draft snapshots
//! - [`numbering`] - Invoice number derivation and year rollover
//! - [`access`] - Shared-secret check for the access gate
//! - [`validation`] - Commit-time coercion of raw form input
//! - [`format`] - de-DE currency and date formatting
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: All monetary values are in euro cents (i64)
//! 4. **Safe Defaults**: Bad input coerces, it never aborts - removing the
//!    last line item, editing an unknown id and malformed stored numbers
//!    all degrade silently

// =============================================================================
// Module Declarations
// =============================================================================

pub mod access;
pub mod draft;
pub mod format;
pub mod money;
pub mod numbering;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use rechnung_core::Money` instead of
// `use rechnung_core::money::Money`

pub use draft::{reduce, DraftAction, HeaderEdit, ItemEdit};
pub use money::Money;
pub use types::{InvoiceDraft, InvoiceItem};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Settings key holding the last finalized invoice number (`YYYY-NNN`).
///
/// ## Lifecycle
/// Absent on first run, written on every finalize, read before suggesting
/// the next draft's number. Malformed values are treated as absent.
pub const LAST_INVOICE_NUMBER_KEY: &str = "lastInvoiceNumber";

/// Settings key holding the access-gate flag.
///
/// Set to [`AUTH_GRANTED_VALUE`] after one successful secret check and
/// never cleared (there is no logout).
pub const AUTH_GRANTED_KEY: &str = "invoiceAuthGranted";

/// The value stored under [`AUTH_GRANTED_KEY`] once access was granted.
/// Any other stored value counts as "not granted".
pub const AUTH_GRANTED_VALUE: &str = "true";
