//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// An entity is compared by identity, not by attribute values: two entities
/// with the same id are the same entity, whatever their attributes say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
