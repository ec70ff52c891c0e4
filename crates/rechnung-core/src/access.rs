//! # Access Gate
//!
//! Shared-secret check guarding the tool behind a single password.
//!
//! This is a convenience lock for a single-user tool, not an authorization
//! boundary: one plaintext constant, exact string comparison, no rate
//! limiting, no hashing. The app layer persists a flag after the first
//! successful check so the question is only asked once per profile.

/// The shared secret unlocking the tool.
pub const SHARED_SECRET: &str = "dzevida2026";

/// Checks an entered secret against [`SHARED_SECRET`].
///
/// Exact, case-sensitive string equality. Callers surface a generic
/// failure message; the secret itself never appears in responses or logs.
pub fn verify_secret(input: &str) -> bool {
    input == SHARED_SECRET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correct_secret_passes() {
        assert!(verify_secret(SHARED_SECRET));
    }

    #[test]
    fn test_wrong_secret_fails() {
        assert!(!verify_secret("wrong"));
        assert!(!verify_secret(""));
        // No trimming, no case folding: the comparison is exact.
        assert!(!verify_secret(" dzevida2026"));
        assert!(!verify_secret("Dzevida2026"));
    }
}
