//! # Config Services
//!
//! Retrieval of the issuer's business profile.

use tracing::debug;

use crate::state::ConfigState;

/// Gets the business profile.
///
/// ## When Used
/// - App startup (to render the letterhead)
/// - Preview and print (sender line, bank block, tax note)
///
/// ## Returns
/// Complete configuration state (read-only)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config");
    config.clone()
}
