//! Typed entity IDs
//!
//! [`Id<T>`] is a UUID tagged with a zero-sized marker type, so IDs of
//! different entities cannot be mixed up at compile time. Domain crates
//! declare their own markers:
//!
//! ```
//! use kernel::id::Id;
//!
//! struct UserMarker;
//! type UserId = Id<UserMarker>;
//!
//! let id = UserId::new();
//! assert_eq!(id, UserId::from_uuid(*id.as_uuid()));
//! ```

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

/// UUID wrapper carrying an entity marker
pub struct Id<T> {
    uuid: Uuid,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Fresh random ID (UUID v4)
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g. loaded from storage)
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self {
            uuid,
            _marker: PhantomData,
        }
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.uuid
    }

    pub fn into_uuid(self) -> Uuid {
        self.uuid
    }
}

// Manual impls: derives would demand T: Clone/Eq/... although the marker
// is never instantiated.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.uuid == other.uuid
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.uuid.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.uuid)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.uuid, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Alpha;
    struct Beta;

    #[test]
    fn test_markers_keep_types_apart() {
        // Compiles only because the two IDs never meet in one expression
        let a: Id<Alpha> = Id::new();
        let b: Id<Beta> = Id::new();
        assert_ne!(a.as_uuid(), b.as_uuid());
    }

    #[test]
    fn test_roundtrip_through_uuid() {
        let uuid = Uuid::new_v4();
        let id: Id<Alpha> = Id::from_uuid(uuid);
        assert_eq!(id.into_uuid(), uuid);
    }

    #[test]
    fn test_display_is_bare_uuid() {
        let id: Id<Alpha> = Id::new();
        assert_eq!(id.to_string(), id.as_uuid().to_string());
    }
}
