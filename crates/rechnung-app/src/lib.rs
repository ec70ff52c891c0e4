//! # Rechnung Application Library
//!
//! Orchestration layer for the Rechnung invoice tool. The UI host links
//! against this crate, calls [`bootstrap`] once at startup and then maps
//! user input 1:1 onto the service functions in [`commands`].
//!
//! ## Module Organization
//! ```text
//! rechnung_app/
//! ├── lib.rs          ◄─── You are here (startup & wiring)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── Settings store wrapper
//! │   ├── draft.rs    ◄─── Current draft snapshot
//! │   └── config.rs   ◄─── Business profile (letterhead, bank)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Service exports
//! │   ├── draft.rs    ◄─── Draft editing services
//! │   ├── invoice.rs  ◄─── Numbering + finalize services
//! │   ├── auth.rs     ◄─── Access gate services
//! │   └── config.rs   ◄─── Configuration retrieval
//! └── error.rs        ◄─── API error type for services
//! ```
//!
//! ## State Management (Multiple State Types)
//! Instead of a single `AppState` struct, we use multiple focused state
//! types. Each service only takes the state it needs, which keeps the
//! signatures honest and the tests small.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: INFO, can be overridden with RUST_LOG                    │
//! │                                                                         │
//! │  2. Determine Storage Path ───────────────────────────────────────────► │
//! │     • Linux: ~/.local/share/rechnung/rechnung.db                        │
//! │     • macOS: ~/Library/Application Support/de.dzevida.rechnung/...      │
//! │     • Override: RECHNUNG_DB_PATH                                        │
//! │                                                                         │
//! │  3. Open Settings Store ──────────────────────────────────────────────► │
//! │     • SQLite with WAL mode, run pending migrations                      │
//! │                                                                         │
//! │  4. Initialize State Objects ─────────────────────────────────────────► │
//! │     • StoreState: wraps the settings store                              │
//! │     • ConfigState: business profile from defaults + environment         │
//! │     • DraftState: today's date + suggested next invoice number          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use chrono::Utc;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use rechnung_core::InvoiceDraft;
use rechnung_store::{Store, StoreConfig};
use state::{ConfigState, DraftState, StoreState};

/// Everything a UI host needs to run the tool.
///
/// The fields are deliberately separate state types; pass each service the
/// ones it asks for.
#[derive(Debug)]
pub struct AppHandles {
    pub store: StoreState,
    pub draft: DraftState,
    pub config: ConfigState,
}

/// Opens the store and builds the initial application state.
///
/// The initial draft carries today's date and the suggested next invoice
/// number. Suggesting is read-only: nothing is persisted until the first
/// finalize.
pub async fn bootstrap() -> Result<AppHandles, ApiError> {
    info!("Starting Rechnung");

    let db_path = default_store_path()?;
    info!(?db_path, "Storage path determined");

    let store = StoreState::new(Store::new(StoreConfig::new(db_path)).await?);
    let config = ConfigState::from_env();

    let number = commands::invoice::next_invoice_number(&store).await?;
    let draft = DraftState::new(InvoiceDraft::new(Utc::now().date_naive(), number));

    info!("State initialized");

    Ok(AppHandles {
        store,
        draft,
        config,
    })
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=rechnung=trace` - Show trace for rechnung crates only
/// - Default: INFO level
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rechnung=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the settings database path based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/de.dzevida.rechnung/rechnung.db`
/// - **Windows**: `%APPDATA%\dzevida\rechnung\rechnung.db`
/// - **Linux**: `~/.local/share/rechnung/rechnung.db`
///
/// ## Development Override
/// Set `RECHNUNG_DB_PATH` environment variable to use a custom path.
pub fn default_store_path() -> Result<PathBuf, ApiError> {
    if let Ok(path) = std::env::var("RECHNUNG_DB_PATH") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = ProjectDirs::from("de", "dzevida", "rechnung")
        .ok_or_else(|| ApiError::internal("Could not determine app data directory"))?;

    let data_dir = proj_dirs.data_dir();

    std::fs::create_dir_all(data_dir)
        .map_err(|e| ApiError::internal(format!("Could not create data directory: {e}")))?;

    Ok(data_dir.join("rechnung.db"))
}
