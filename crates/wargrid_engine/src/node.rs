//! A single hex cell of a map.

use std::fmt;
use std::sync::Arc;

use wargrid_foundation::ObjectId;

use crate::direction::HexDirection;
use crate::map::MapId;

/// An opaque terrain-type reference.
///
/// The engine never interprets terrain; it is supplied by the world
/// definition and read back by the rendering layer.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct TerrainId(Arc<str>);

impl TerrainId {
    /// Creates a terrain reference from its name.
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        Self(name.into())
    }

    /// Returns the terrain name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for TerrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TerrainId({:?})", self.0)
    }
}

impl fmt::Display for TerrainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TerrainId {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

/// A single hex cell.
///
/// Neighbour slots hold non-owning references by id. Setting a slot
/// never touches the reciprocal slot on the other node; every
/// construction path (the topology generator, the map's validated
/// mutators, deserialization) is responsible for establishing both
/// directions, and a graph where it hasn't is inconsistent.
#[derive(Debug, Clone)]
pub struct MapNode {
    id: ObjectId,
    terrain: Option<TerrainId>,
    neighbours: [Option<ObjectId>; 6],
    owner: Option<MapId>,
}

impl MapNode {
    /// Creates a detached node with the given id and no neighbours.
    #[must_use]
    pub fn new(id: ObjectId) -> Self {
        Self {
            id,
            terrain: None,
            neighbours: [None; 6],
            owner: None,
        }
    }

    /// Returns this node's id.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Returns the neighbour along `direction`, if any.
    #[must_use]
    pub fn neighbour(&self, direction: HexDirection) -> Option<ObjectId> {
        self.neighbours[Self::slot(direction)]
    }

    /// Sets the neighbour slot for `direction` unconditionally.
    ///
    /// Does not set the reciprocal link; see the type-level contract.
    pub fn set_neighbour(&mut self, direction: HexDirection, neighbour: Option<ObjectId>) {
        self.neighbours[Self::slot(direction)] = neighbour;
    }

    /// Iterates the filled neighbour slots as `(direction, id)` pairs.
    pub fn neighbours(&self) -> impl Iterator<Item = (HexDirection, ObjectId)> + '_ {
        HexDirection::ALL
            .into_iter()
            .filter_map(|d| self.neighbour(d).map(|id| (d, id)))
    }

    /// Returns the number of filled neighbour slots.
    #[must_use]
    pub fn neighbour_count(&self) -> usize {
        self.neighbours.iter().flatten().count()
    }

    /// Returns the terrain reference, if assigned.
    #[must_use]
    pub fn terrain(&self) -> Option<&TerrainId> {
        self.terrain.as_ref()
    }

    /// Assigns or clears the terrain reference.
    pub fn set_terrain(&mut self, terrain: Option<TerrainId>) {
        self.terrain = terrain;
    }

    /// Returns the owning map's id, if this node is owned.
    #[must_use]
    pub fn owner(&self) -> Option<MapId> {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: Option<MapId>) {
        self.owner = owner;
    }

    const fn slot(direction: HexDirection) -> usize {
        direction.index()
    }
}
