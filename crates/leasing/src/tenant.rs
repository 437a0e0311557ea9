use serde::{Deserialize, Serialize};

use proptech_core::{DomainError, DomainResult, Entity, TenantId};

/// A person renting a property. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tenant {
    id: TenantId,
    full_name: String,
}

impl Tenant {
    pub fn new(id: TenantId, full_name: impl Into<String>) -> DomainResult<Self> {
        let full_name = full_name.into();
        if id.is_blank() {
            return Err(DomainError::validation("tenant id is required"));
        }
        if full_name.trim().is_empty() {
            return Err(DomainError::validation("tenant name is required"));
        }
        Ok(Self {
            id,
            full_name: full_name.trim().to_string(),
        })
    }

    /// Create a tenant with a freshly generated id.
    pub fn register(full_name: impl Into<String>) -> DomainResult<Self> {
        Self::new(TenantId::generate(), full_name)
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }
}

impl Entity for Tenant {
    type Id = TenantId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
