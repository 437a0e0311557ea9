use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use proptech_core::{DomainError, DomainResult, Entity, PropertyId};

/// A rental property. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    id: PropertyId,
    address: String,
    monthly_rent: Decimal,
}

impl Property {
    /// Invariants: non-blank id, strictly positive rent.
    pub fn new(
        id: PropertyId,
        address: impl Into<String>,
        monthly_rent: Decimal,
    ) -> DomainResult<Self> {
        if id.is_blank() {
            return Err(DomainError::validation("property id is required"));
        }
        if monthly_rent <= Decimal::ZERO {
            return Err(DomainError::validation(
                "property monthly rent must be positive",
            ));
        }
        Ok(Self {
            id,
            address: address.into(),
            monthly_rent,
        })
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn monthly_rent(&self) -> Decimal {
        self.monthly_rent
    }
}

impl Entity for Property {
    type Id = PropertyId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn creates_property_with_positive_rent() {
        let p = Property::new(PropertyId::new("P001"), "12 Mandela Ave, Soweto", dec!(3800)).unwrap();
        assert_eq!(p.id().as_str(), "P001");
        assert_eq!(p.monthly_rent(), dec!(3800));
        assert_eq!(p.address(), "12 Mandela Ave, Soweto");
    }

    #[test]
    fn rejects_non_positive_rent() {
        let err = Property::new(PropertyId::new("P001"), "x", dec!(0)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn rejects_blank_id() {
        let err = Property::new(PropertyId::new("  "), "x", dec!(100)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
