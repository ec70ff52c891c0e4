//! # Settings Repository
//!
//! Durable string key-value pairs: the numbering counter and the access
//! flag live here.
//!
//! ## Access Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Settings Usage                                       │
//! │                                                                         │
//! │  new_draft ─────────► get("lastInvoiceNumber") ──► suggest number      │
//! │                                                                         │
//! │  finalize_invoice ──► set("lastInvoiceNumber", n) ─► recorded verbatim │
//! │                                                                         │
//! │  authenticate ──────► set("invoiceAuthGranted", "true")                │
//! │                                                                         │
//! │  auth_status ───────► get("invoiceAuthGranted")                        │
//! │                                                                         │
//! │  Reads go to the database every time - there is no in-memory cache     │
//! │  to drift. Writes are unconditional upserts: last writer wins.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Values are written verbatim. In particular a hand-edited invoice number
//! that does not match `YYYY-NNN` is persisted as-is; the numbering policy
//! parses defensively on the next read.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::StoreResult;

/// Repository for settings operations.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    pool: SqlitePool,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SettingsRepository { pool }
    }

    /// Reads the value stored under `key`.
    ///
    /// ## Returns
    /// `None` when the key was never written. A missing key is an expected
    /// state (first run), not an error.
    pub async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        debug!(key = %key, "settings get");

        let value = sqlx::query_scalar::<_, String>("SELECT value FROM settings WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// Unconditional upsert: no validation of the value, no read-back.
    pub async fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        debug!(key = %key, "settings set");

        let now = Utc::now();

        sqlx::query(
            r#"
            INSERT INTO settings (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
