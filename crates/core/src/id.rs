//! Strongly-typed identifiers used across the domain.
//!
//! Every entity is keyed by a string that compares case-insensitively
//! (`"P001"` and `"p001"` name the same property). [`EntityKey`] keeps the
//! caller's spelling for display and a lower-cased copy for identity.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

use crate::error::DomainError;

/// Case-insensitive string key.
///
/// Equality, ordering and hashing use only the normalized form, so two keys
/// that differ in case are the same key.
#[derive(Debug, Clone)]
pub struct EntityKey {
    display: String,
    normalized: String,
}

impl EntityKey {
    /// Build a key from caller-supplied text (surrounding whitespace is trimmed).
    pub fn new(raw: impl Into<String>) -> Self {
        let display = raw.into().trim().to_string();
        let normalized = display.to_lowercase();
        Self {
            display,
            normalized,
        }
    }

    /// Generate a fresh unique key (UUIDv7, time-ordered).
    pub fn generate() -> Self {
        Self::new(Uuid::now_v7().to_string())
    }

    /// Parse a key, rejecting blank or whitespace-only input.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if raw.trim().is_empty() {
            return Err(DomainError::validation("identifier must not be blank"));
        }
        Ok(Self::new(raw))
    }

    /// The key as the caller spelled it.
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Lower-cased form used for comparison.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn is_blank(&self) -> bool {
        self.normalized.is_empty()
    }

    /// Case-insensitive comparison against a raw string.
    pub fn matches(&self, raw: &str) -> bool {
        self.normalized == raw.trim().to_lowercase()
    }
}

impl PartialEq for EntityKey {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for EntityKey {}

impl Hash for EntityKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

impl PartialOrd for EntityKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EntityKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.normalized.cmp(&other.normalized)
    }
}

impl core::fmt::Display for EntityKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.display)
    }
}

impl Serialize for EntityKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.display)
    }
}

impl<'de> Deserialize<'de> for EntityKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

/// Identifier of a rental property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(EntityKey);

/// Identifier of a tenant (the person renting, not a multi-tenant boundary).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantId(EntityKey);

/// Identifier of a lease agreement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaseId(EntityKey);

/// Identifier of an invoice.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(EntityKey);

/// Identifier of a tenant account statement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatementId(EntityKey);

/// Identifier of a 360° virtual tour.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TourId(EntityKey);

/// Identifier of an AI insight record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsightId(EntityKey);

macro_rules! impl_key_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Wrap caller-supplied text (may be blank; see `parse`).
            pub fn new(raw: impl Into<String>) -> Self {
                Self(EntityKey::new(raw))
            }

            /// Generate a fresh unique identifier.
            ///
            /// Prefer passing IDs explicitly in tests for determinism.
            pub fn generate() -> Self {
                Self(EntityKey::generate())
            }

            pub fn parse(raw: &str) -> Result<Self, DomainError> {
                EntityKey::parse(raw)
                    .map(Self)
                    .map_err(|_| DomainError::validation(concat!($name, " must not be blank")))
            }

            pub fn key(&self) -> &EntityKey {
                &self.0
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }

            pub fn is_blank(&self) -> bool {
                self.0.is_blank()
            }

            pub fn matches(&self, raw: &str) -> bool {
                self.0.matches(raw)
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }
    };
}

impl_key_newtype!(PropertyId, "PropertyId");
impl_key_newtype!(TenantId, "TenantId");
impl_key_newtype!(LeaseId, "LeaseId");
impl_key_newtype!(InvoiceId, "InvoiceId");
impl_key_newtype!(StatementId, "StatementId");
impl_key_newtype!(TourId, "TourId");
impl_key_newtype!(InsightId, "InsightId");
