//! # Configuration State
//!
//! The issuer's business profile: everything static that appears on the
//! printed invoice around the draft data.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`RECHNUNG_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::{Deserialize, Serialize};

/// Bank account details printed in the invoice footer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    /// Bank name.
    pub bank_name: String,

    /// IBAN, formatted in groups of four as printed.
    pub iban: String,

    /// BIC / SWIFT code.
    pub bic: String,
}

/// The issuer's business profile.
///
/// ## Fields
/// Defaults reproduce the letterhead of the printed invoice; deployments
/// for another business override via environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Business name (letterhead and sender line).
    pub business_name: String,

    /// Street and house number.
    pub street: String,

    /// Postal code.
    pub postal_code: String,

    /// City.
    pub city: String,

    /// Contact phone number.
    pub phone: String,

    /// Contact e-mail address.
    pub email: String,

    /// Bank account for payments.
    pub bank: BankAccount,

    /// Tax status note printed above the footer. The business runs under
    /// the German small-trader rule, so no VAT appears on the invoice.
    pub tax_note: String,

    /// Closing line under the totals block.
    pub closing_note: String,
}

impl Default for ConfigState {
    /// Returns the profile of the business the tool was built for.
    fn default() -> Self {
        ConfigState {
            business_name: "Dzevida's Catering".to_string(),
            street: "Bingener str 38".to_string(),
            postal_code: "55469".to_string(),
            city: "Simmern".to_string(),
            phone: "0157 77964382".to_string(),
            email: "dzevidas.catering@hotmail.com".to_string(),
            bank: BankAccount {
                bank_name: "Sparda Bank Südwest eG".to_string(),
                iban: "DE74 5509 0500 0006 6453 05".to_string(),
                bic: "GENODEF1S01".to_string(),
            },
            tax_note: "Kein Ausweis von Umsatzsteuer, da Kleinunternehmer gemäß §19 UStG"
                .to_string(),
            closing_note: "Wir sagen Danke! :)".to_string(),
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `RECHNUNG_BUSINESS_NAME`: Override business name
    /// - `RECHNUNG_PHONE`: Override contact phone
    /// - `RECHNUNG_EMAIL`: Override contact e-mail
    /// - `RECHNUNG_IBAN`: Override bank IBAN
    pub fn from_env() -> Self {
        let mut config = ConfigState::default();

        if let Ok(name) = std::env::var("RECHNUNG_BUSINESS_NAME") {
            config.business_name = name;
        }

        if let Ok(phone) = std::env::var("RECHNUNG_PHONE") {
            config.phone = phone;
        }

        if let Ok(email) = std::env::var("RECHNUNG_EMAIL") {
            config.email = email;
        }

        if let Ok(iban) = std::env::var("RECHNUNG_IBAN") {
            config.bank.iban = iban;
        }

        config
    }

    /// The one-line sender address shown above the customer window
    /// ("Dzevida's Catering · Bingener str 38 · 55469 Simmern").
    pub fn sender_line(&self) -> String {
        format!(
            "{} · {} · {} {}",
            self.business_name, self.street, self.postal_code, self.city
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_profile() {
        let config = ConfigState::default();
        assert_eq!(config.business_name, "Dzevida's Catering");
        assert_eq!(config.bank.bic, "GENODEF1S01");
    }

    #[test]
    fn test_sender_line() {
        let config = ConfigState::default();
        assert_eq!(
            config.sender_line(),
            "Dzevida's Catering · Bingener str 38 · 55469 Simmern"
        );
    }
}
