//! Sequential object identifiers.
//!
//! Every object owned by a map (node, faction, entity) carries an
//! [`ObjectId`] assigned from a per-collection [`IdSequence`]. Ids are
//! monotonically increasing and never re-issued, so a live id is unique
//! within its owning map for the map's whole lifetime.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A map-unique sequential object identifier.
///
/// The value `-1` is reserved as the invalid sentinel.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ObjectId(i64);

impl ObjectId {
    /// Creates an id from a raw value.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the sentinel value representing "no object".
    #[must_use]
    pub const fn invalid() -> Self {
        Self(-1)
    }

    /// Returns true if this id is not the invalid sentinel.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 >= 0
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "ObjectId({})", self.0)
        } else {
            write!(f, "ObjectId(invalid)")
        }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ObjectId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// Allocates monotonically increasing [`ObjectId`]s.
///
/// Externally supplied ids (explicit creation ids, ids read back from a
/// serialized map) are fed through [`IdSequence::observe`] so the
/// sequence never re-issues them.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IdSequence {
    next: i64,
}

impl IdSequence {
    /// Creates a sequence starting at id 0.
    #[must_use]
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Allocates the next id.
    pub fn next_id(&mut self) -> ObjectId {
        let id = ObjectId(self.next);
        self.next += 1;
        id
    }

    /// Records an externally assigned id.
    ///
    /// Subsequent [`IdSequence::next_id`] calls allocate strictly above
    /// every observed id. Invalid sentinels are ignored.
    pub fn observe(&mut self, id: ObjectId) {
        if id.is_valid() && id.0 >= self.next {
            self.next = id.0 + 1;
        }
    }

    /// Returns the id that the next allocation would produce.
    #[must_use]
    pub fn peek(&self) -> ObjectId {
        ObjectId(self.next)
    }
}
