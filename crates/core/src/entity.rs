//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Entities in this system are owned by the domain store and looked up by
/// their (case-insensitive) identifier.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + core::fmt::Display;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
