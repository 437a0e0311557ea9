use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use proptech_core::{Entity, LeaseId};

use crate::property::Property;
use crate::tenant::Tenant;

/// Binding of one tenant to one property at a captured rent.
///
/// Tenant and property are immutable, so the lease holds its own copies;
/// `monthly_rent` is the property's rent at signing and never follows later
/// changes to the property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaseAgreement {
    id: LeaseId,
    lessee: Tenant,
    property: Property,
    monthly_rent: Decimal,
    signed_at: DateTime<Utc>,
}

impl LeaseAgreement {
    /// Sign a new lease at the property's current rent.
    pub fn sign(lessee: Tenant, property: Property) -> Self {
        let monthly_rent = property.monthly_rent();
        Self::with_rent(LeaseId::generate(), lessee, property, monthly_rent)
    }

    pub fn with_rent(
        id: LeaseId,
        lessee: Tenant,
        property: Property,
        monthly_rent: Decimal,
    ) -> Self {
        Self {
            id,
            lessee,
            property,
            monthly_rent,
            signed_at: Utc::now(),
        }
    }

    pub fn lessee(&self) -> &Tenant {
        &self.lessee
    }

    pub fn property(&self) -> &Property {
        &self.property
    }

    pub fn monthly_rent(&self) -> Decimal {
        self.monthly_rent
    }

    pub fn signed_at(&self) -> DateTime<Utc> {
        self.signed_at
    }
}

impl Entity for LeaseAgreement {
    type Id = LeaseId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptech_core::{PropertyId, TenantId};
    use rust_decimal_macros::dec;

    #[test]
    fn sign_captures_current_property_rent() {
        let tenant = Tenant::new(TenantId::new("T1"), "Thabo Mokoena").unwrap();
        let property = Property::new(PropertyId::new("P001"), "12 Mandela Ave", dec!(3800)).unwrap();

        let lease = LeaseAgreement::sign(tenant.clone(), property);

        assert_eq!(lease.monthly_rent(), dec!(3800));
        assert_eq!(lease.lessee(), &tenant);
        assert_eq!(lease.property().id().as_str(), "P001");
    }
}
