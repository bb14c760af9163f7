//! Error types for the Wargrid system.
//!
//! Uses `thiserror` for ergonomic error definition. Every kind belongs
//! to one of three categories: malformed input ([`ErrorCategory::Value`]),
//! file I/O ([`ErrorCategory::Io`]), and transparently propagated
//! rules-layer failures ([`ErrorCategory::Rule`]).
//!
//! Not-found conditions on removal operations are deliberately *not*
//! errors anywhere in this workspace; removals return `Option` instead.

use thiserror::Error;

use crate::id::ObjectId;

/// Convenience alias for results with Wargrid errors.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Wargrid operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates an unknown-direction error.
    #[must_use]
    pub fn unknown_direction(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownDirection(name.into()))
    }

    /// Creates a non-adjacent direction pair error.
    #[must_use]
    pub fn unconnectable_directions(first: &'static str, second: &'static str) -> Self {
        Self::new(ErrorKind::UnconnectableDirections { first, second })
    }

    /// Creates an empty-pool error.
    #[must_use]
    pub fn empty_pool(pool: &'static str) -> Self {
        Self::new(ErrorKind::EmptyPool(pool))
    }

    /// Creates a world-mismatch error.
    #[must_use]
    pub fn world_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::new(ErrorKind::WorldMismatch {
            expected: expected.into(),
            actual: actual.into(),
        })
    }

    /// Creates a missing-field error.
    #[must_use]
    pub fn missing_field(field: &'static str) -> Self {
        Self::new(ErrorKind::MissingField(field))
    }

    /// Creates a value type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: &'static str, field: &'static str) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, field })
    }

    /// Creates an unresolved object reference error.
    #[must_use]
    pub fn unresolved_reference(id: ObjectId) -> Self {
        Self::new(ErrorKind::UnresolvedReference(id))
    }

    /// Creates a duplicate-id error.
    #[must_use]
    pub fn duplicate_id(id: ObjectId) -> Self {
        Self::new(ErrorKind::DuplicateId(id))
    }

    /// Creates an ownership-mismatch error.
    #[must_use]
    pub fn owner_mismatch(object: impl Into<String>) -> Self {
        Self::new(ErrorKind::OwnerMismatch(object.into()))
    }

    /// Creates a missing-civilization error.
    #[must_use]
    pub fn missing_civilization() -> Self {
        Self::new(ErrorKind::MissingCivilization)
    }

    /// Creates a wire-codec error carrying the encoder or decoder message.
    #[must_use]
    pub fn codec(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Codec(message.into()))
    }

    /// Creates a rules-layer error carrying an opaque message.
    #[must_use]
    pub fn rule(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Rule(message.into()))
    }

    /// Returns the category this error belongs to.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        self.kind.category()
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A direction name did not match one of the six canonical names.
    #[error("unknown direction: {0:?}")]
    UnknownDirection(String),

    /// Two directions passed to connecting-direction lookup are not
    /// cyclically adjacent.
    #[error("directions {first} and {second} are not adjacent")]
    UnconnectableDirections {
        /// The first direction name.
        first: &'static str,
        /// The second direction name.
        second: &'static str,
    },

    /// A banner or color pool was empty during appearance allocation.
    #[error("cannot draw from empty {0} pool")]
    EmptyPool(&'static str),

    /// A serialized map's world identifier did not match the loading world.
    #[error("map belongs to world {expected:?}, not {actual:?}")]
    WorldMismatch {
        /// The world identifier embedded in the map payload.
        expected: String,
        /// The identifier of the world the map was loaded against.
        actual: String,
    },

    /// A required field was absent from a serialized value.
    #[error("missing field: {0}")]
    MissingField(&'static str),

    /// A serialized field held a value of the wrong shape.
    #[error("expected {expected} for field {field}")]
    TypeMismatch {
        /// The expected value shape.
        expected: &'static str,
        /// The field being decoded.
        field: &'static str,
    },

    /// A serialized neighbour or owner reference named an absent object.
    #[error("reference to unknown object {0}")]
    UnresolvedReference(ObjectId),

    /// An explicitly supplied id is already in use in this map.
    #[error("id {0} is already in use")]
    DuplicateId(ObjectId),

    /// An object offered to a map declares a different owner.
    #[error("ownership mismatch for {0}")]
    OwnerMismatch(String),

    /// A faction was created without a civilization reference.
    #[error("faction requires a civilization")]
    MissingCivilization,

    /// A wire-format encode or decode failure.
    #[error("codec error: {0}")]
    Codec(String),

    /// File read or write failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// An error surfaced by the external rules layer, passed through
    /// without interpretation.
    #[error("rule error: {0}")]
    Rule(String),
}

impl ErrorKind {
    /// Returns the category this kind belongs to.
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownDirection(_)
            | Self::UnconnectableDirections { .. }
            | Self::EmptyPool(_)
            | Self::WorldMismatch { .. }
            | Self::MissingField(_)
            | Self::TypeMismatch { .. }
            | Self::UnresolvedReference(_)
            | Self::DuplicateId(_)
            | Self::OwnerMismatch(_)
            | Self::MissingCivilization
            | Self::Codec(_) => ErrorCategory::Value,
            Self::Io(_) => ErrorCategory::Io,
            Self::Rule(_) => ErrorCategory::Rule,
        }
    }
}

/// The coarse error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Malformed input: surfaced to the caller, never silently recovered.
    Value,
    /// File not found or unreadable: surfaced, not retried.
    Io,
    /// Domain-rule violation from the external rules layer: propagated
    /// transparently.
    Rule,
}
