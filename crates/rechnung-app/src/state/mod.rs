//! # State Module
//!
//! Manages application state for the service layer.
//!
//! ## Why Multiple State Types?
//! Instead of a single `AppState` struct containing everything,
//! we use separate state types. This approach:
//!
//! 1. **Better Separation of Concerns**: Each state type has a single responsibility
//! 2. **Easier Testing**: Can construct individual states in isolation
//! 3. **Clearer Service Signatures**: Services declare exactly what state they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │          ┌──────────────────┬──────────────────┐                        │
//! │          ▼                  ▼                  ▼                        │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  StoreState  │  │  DraftState  │  │   ConfigState    │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Settings    │  │  Arc<Mutex<  │  │  business name   │              │
//! │  │  (SQLite     │  │   Invoice    │  │  address, bank   │              │
//! │  │   pool)      │  │   Draft>>    │  │  tax note        │              │
//! │  └──────────────┘  └──────────────┘  └──────────────────┘              │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • StoreState: pool is internally thread-safe                          │
//! │  • DraftState: protected by Arc<Mutex<T>>, replace-on-change           │
//! │  • ConfigState: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod draft;
mod store;

pub use config::{BankAccount, ConfigState};
pub use draft::{DraftState, DraftTotals};
pub use store::StoreState;
