//! Hex-adjacency directions and direction arithmetic.
//!
//! The six directions are cyclically ordered West, NorthWest,
//! NorthEast, East, SouthEast, SouthWest; one step through
//! [`HexDirection::ALL`] is a 60-degree clockwise turn. All arithmetic
//! here is index arithmetic on that canonical cycle.

use std::fmt;
use std::str::FromStr;

use wargrid_foundation::{Error, Result};

/// One of the six hex-adjacency directions.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum HexDirection {
    /// Toward the western neighbour.
    West,
    /// Toward the north-western neighbour.
    NorthWest,
    /// Toward the north-eastern neighbour.
    NorthEast,
    /// Toward the eastern neighbour.
    East,
    /// Toward the south-eastern neighbour.
    SouthEast,
    /// Toward the south-western neighbour.
    SouthWest,
}

impl HexDirection {
    /// All six directions in canonical cyclic order.
    pub const ALL: [HexDirection; 6] = [
        Self::West,
        Self::NorthWest,
        Self::NorthEast,
        Self::East,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Position of this direction in the canonical cycle.
    pub(crate) const fn index(self) -> usize {
        match self {
            Self::West => 0,
            Self::NorthWest => 1,
            Self::NorthEast => 2,
            Self::East => 3,
            Self::SouthEast => 4,
            Self::SouthWest => 5,
        }
    }

    const fn from_index(index: usize) -> Self {
        Self::ALL[index % 6]
    }

    /// Returns the opposite direction.
    ///
    /// This is a total involution: `d.opposite().opposite() == d` and
    /// `d.opposite() != d` for every direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Returns the direction one step clockwise in the canonical cycle.
    #[must_use]
    pub const fn clockwise(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Returns the direction one step counter-clockwise.
    #[must_use]
    pub const fn counter_clockwise(self) -> Self {
        Self::from_index(self.index() + 5)
    }

    /// Returns the two directions cyclically adjacent to this one, as
    /// `(counter_clockwise, clockwise)`.
    ///
    /// If a node has a neighbour along `self`, any neighbour along one
    /// of these two directions is also a neighbour of that neighbour.
    #[must_use]
    pub const fn neighbour_directions(self) -> (Self, Self) {
        (self.counter_clockwise(), self.clockwise())
    }

    /// Returns how the far endpoints of two edges from a common origin
    /// relate to each other.
    ///
    /// Given a node A with neighbour B along `self` and neighbour C
    /// along `other`, returns `(B→C, C→B)`.
    ///
    /// Precondition: `self` and `other` must be cyclically adjacent
    /// (one of the pairs produced by [`HexDirection::neighbour_directions`]).
    /// Any other pair fails with a value error; the relation is simply
    /// not defined for non-adjacent edges.
    pub fn connecting_directions(self, other: Self) -> Result<(Self, Self)> {
        if other == self.clockwise() {
            Ok((other.clockwise(), self.counter_clockwise()))
        } else if other == self.counter_clockwise() {
            Ok((other.counter_clockwise(), self.clockwise()))
        } else {
            Err(Error::unconnectable_directions(self.name(), other.name()))
        }
    }

    /// Returns the canonical name of this direction.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::West => "West",
            Self::NorthWest => "NorthWest",
            Self::NorthEast => "NorthEast",
            Self::East => "East",
            Self::SouthEast => "SouthEast",
            Self::SouthWest => "SouthWest",
        }
    }
}

impl fmt::Display for HexDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HexDirection {
    type Err = Error;

    /// Parses a canonical direction name. Case-sensitive exact match;
    /// anything else is a value error.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "West" => Ok(Self::West),
            "NorthWest" => Ok(Self::NorthWest),
            "NorthEast" => Ok(Self::NorthEast),
            "East" => Ok(Self::East),
            "SouthEast" => Ok(Self::SouthEast),
            "SouthWest" => Ok(Self::SouthWest),
            _ => Err(Error::unknown_direction(s)),
        }
    }
}
