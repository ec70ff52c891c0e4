//! # API Error Type
//!
//! Unified error type for the service layer.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Rechnung                               │
//! │                                                                         │
//! │  Storage Error? ── StoreError::QueryFailed("...") ──┐                  │
//! │                                                     ▼                  │
//! │  Startup Error? ── path resolution failed ─────── ApiError ──► UI     │
//! │                                                                         │
//! │  NOT errors (safe defaults instead):                                   │
//! │  • invalid numeric input        → coerced on commit                    │
//! │  • malformed stored number      → falls back to seed                   │
//! │  • wrong access secret          → AuthResponse { granted: false }      │
//! │  • removing the last line item  → draft returned unchanged             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Serialization
//! The UI host receives errors as JSON with both a machine-readable `code`
//! and a human-readable `message`.

use serde::Serialize;
use rechnung_store::StoreError;

/// API error returned from service functions.
///
/// ## Serialization
/// ```json
/// {
///   "code": "STORAGE_ERROR",
///   "message": "Storage operation failed"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Storage operation failed (settings unreadable/unwritable)
    StorageError,

    /// Internal error (startup, path resolution)
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts storage errors to API errors.
///
/// The concrete cause is logged; the UI host gets a generic message so
/// storage internals never leak into the document view.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        tracing::error!("Storage error: {}", err);
        ApiError::new(ErrorCode::StorageError, "Storage operation failed")
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
