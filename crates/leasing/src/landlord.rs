use serde::{Deserialize, Serialize};

use proptech_core::{DomainError, DomainResult};

/// The portfolio owner's profile, printed on statements as the payee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Landlord {
    full_name: String,
    id_number: String,
    bank_account: String,
}

impl Landlord {
    pub fn new(
        full_name: impl Into<String>,
        id_number: impl Into<String>,
        bank_account: impl Into<String>,
    ) -> DomainResult<Self> {
        let full_name = full_name.into();
        let id_number = id_number.into();
        if full_name.trim().is_empty() {
            return Err(DomainError::validation("landlord name is required"));
        }
        if id_number.trim().is_empty() {
            return Err(DomainError::validation("landlord id number is required"));
        }
        Ok(Self {
            full_name: full_name.trim().to_string(),
            id_number: id_number.trim().to_string(),
            bank_account: bank_account.into().trim().to_string(),
        })
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn id_number(&self) -> &str {
        &self.id_number
    }

    /// May be empty until banking details are captured.
    pub fn bank_account(&self) -> &str {
        &self.bank_account
    }

    pub fn update_bank_account(&mut self, account: impl Into<String>) {
        self.bank_account = account.into().trim().to_string();
    }
}

impl Default for Landlord {
    fn default() -> Self {
        Self {
            full_name: "Default Landlord".to_string(),
            id_number: "0000000000".to_string(),
            bank_account: "000-000-000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bank_account_can_be_replaced_or_cleared() {
        let mut landlord = Landlord::new("Lerato Nkosi", "8001015009087", "").unwrap();
        assert_eq!(landlord.bank_account(), "");

        landlord.update_bank_account(" 62-1234-5678 ");
        assert_eq!(landlord.bank_account(), "62-1234-5678");
        landlord.update_bank_account("");
        assert_eq!(landlord.bank_account(), "");
    }

    #[test]
    fn name_and_id_number_are_required() {
        assert!(matches!(Landlord::new(" ", "800101", ""), Err(DomainError::Validation(_))));
        assert!(matches!(Landlord::new("Lerato Nkosi", "", ""), Err(DomainError::Validation(_))));
    }

    #[test]
    fn default_profile_is_a_placeholder() {
        let landlord = Landlord::default();
        assert_eq!(landlord.full_name(), "Default Landlord");
        assert_eq!(landlord.id_number(), "0000000000");
    }
}
