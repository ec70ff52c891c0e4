//! # Access Gate Services
//!
//! The tool sits behind a single shared secret; these services check it
//! and remember a successful check across sessions.
//!
//! ## Gate Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Access Gate Flow                                     │
//! │                                                                         │
//! │  App start ──► auth_status ──► granted? ──► yes ──► show the form      │
//! │                                   │                                     │
//! │                                   no                                    │
//! │                                   ▼                                     │
//! │                            secret prompt                                │
//! │                                   │                                     │
//! │                                   ▼                                     │
//! │  authenticate(input) ──► correct? ──► yes ──► persist flag, unlock     │
//! │                                   │                                     │
//! │                                   no ──► { granted: false }            │
//! │                                          (inline message, store        │
//! │                                           untouched, ask again)        │
//! │                                                                         │
//! │  There is no logout: once granted, the flag stays for this profile.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A wrong secret is an expected outcome, not an `ApiError`; only storage
//! failures surface as errors.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::StoreState;
use rechnung_core::{access, AUTH_GRANTED_KEY, AUTH_GRANTED_VALUE};

/// Gate check result.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub granted: bool,
}

/// Checks the entered secret and, on success, persists the grant.
///
/// ## Behavior
/// - Correct secret: flag persisted, `{ granted: true }` - the UI unlocks
///   for this session and all future ones on the same profile
/// - Wrong secret: `{ granted: false }`, nothing persisted - the caller
///   shows a generic failure message (never the secret itself)
pub async fn authenticate(store: &StoreState, secret: String) -> Result<AuthResponse, ApiError> {
    debug!("authenticate");

    if !access::verify_secret(&secret) {
        // Deliberately logs neither the input nor the expected value.
        warn!("Access gate: secret rejected");
        return Ok(AuthResponse { granted: false });
    }

    store
        .inner()
        .settings()
        .set(AUTH_GRANTED_KEY, AUTH_GRANTED_VALUE)
        .await?;

    info!("Access gate: unlocked");
    Ok(AuthResponse { granted: true })
}

/// Reads whether access was granted on this profile.
///
/// Only the exact affirmative marker counts; a missing or mangled flag
/// means the prompt is shown again.
pub async fn auth_status(store: &StoreState) -> Result<AuthResponse, ApiError> {
    let flag = store.inner().settings().get(AUTH_GRANTED_KEY).await?;
    let granted = flag.as_deref() == Some(AUTH_GRANTED_VALUE);

    debug!(granted, "auth_status");
    Ok(AuthResponse { granted })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rechnung_core::access::SHARED_SECRET;
    use rechnung_store::{Store, StoreConfig};

    async fn store_state() -> StoreState {
        StoreState::new(Store::new(StoreConfig::in_memory()).await.unwrap())
    }

    #[tokio::test]
    async fn test_wrong_secret_rejected_and_not_persisted() {
        let store = store_state().await;

        let response = authenticate(&store, "wrong".into()).await.unwrap();
        assert!(!response.granted);

        let flag = store.inner().settings().get(AUTH_GRANTED_KEY).await.unwrap();
        assert_eq!(flag, None);
        assert!(!auth_status(&store).await.unwrap().granted);
    }

    #[tokio::test]
    async fn test_correct_secret_grants_and_persists() {
        let store = store_state().await;

        let response = authenticate(&store, SHARED_SECRET.into()).await.unwrap();
        assert!(response.granted);

        let flag = store.inner().settings().get(AUTH_GRANTED_KEY).await.unwrap();
        assert_eq!(flag, Some("true".to_string()));
        assert!(auth_status(&store).await.unwrap().granted);
    }

    #[tokio::test]
    async fn test_mangled_flag_counts_as_not_granted() {
        let store = store_state().await;
        store
            .inner()
            .settings()
            .set(AUTH_GRANTED_KEY, "yes")
            .await
            .unwrap();

        assert!(!auth_status(&store).await.unwrap().granted);
    }

    #[tokio::test]
    async fn test_failed_attempt_keeps_existing_grant() {
        let store = store_state().await;
        authenticate(&store, SHARED_SECRET.into()).await.unwrap();

        let response = authenticate(&store, "wrong".into()).await.unwrap();
        assert!(!response.granted);
        // The earlier grant survives; failure never alters stored state.
        assert!(auth_status(&store).await.unwrap().granted);
    }
}
