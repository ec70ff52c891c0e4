//! # rechnung-store: Storage Layer for Rechnung
//!
//! This crate provides durable storage for the Rechnung system: a small
//! SQLite-backed string key-value store holding the numbering and access
//! state that must survive restarts.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Rechnung Data Flow                                │
//! │                                                                         │
//! │  App service (finalize_invoice, authenticate)                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  rechnung-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │ Repositories  │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │ (settings.rs) │    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │◄───│ SettingsRepo  │    │ 001_*.sql    │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │   ~/.local/share/rechnung/rechnung.db                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Storage error types
//! - [`repository`] - Repository implementations (settings)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rechnung_store::{Store, StoreConfig};
//!
//! let store = Store::new(StoreConfig::new("path/to/rechnung.db")).await?;
//! store.settings().set("lastInvoiceNumber", "2026-003").await?;
//! let last = store.settings().get("lastInvoiceNumber").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::StoreError;
pub use pool::{Store, StoreConfig};

// Repository re-exports for convenience
pub use repository::settings::SettingsRepository;
