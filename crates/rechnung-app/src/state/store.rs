//! # Store State
//!
//! Wraps the settings `Store` for use in service functions.
//!
//! ## Thread Safety
//! The `Store` struct from `rechnung-store` contains a `SqlitePool` which
//! is inherently thread-safe; no explicit locking here.

use rechnung_store::Store;

/// Wrapper around `Store` for the service layer.
///
/// ## Why a Wrapper?
/// Keeps the service signatures symmetrical with the other state types and
/// leaves room to add app-level storage helpers without touching the store
/// crate.
#[derive(Debug)]
pub struct StoreState {
    store: Store,
}

impl StoreState {
    /// Creates a new StoreState wrapping the settings store.
    pub fn new(store: Store) -> Self {
        StoreState { store }
    }

    /// Returns a reference to the inner Store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let last = store_state.inner().settings().get(key).await?;
    /// ```
    pub fn inner(&self) -> &Store {
        &self.store
    }
}
