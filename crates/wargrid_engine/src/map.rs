//! The map aggregate.
//!
//! A [`Map`] exclusively owns its nodes, factions, and entities and
//! holds a shared handle to the [`World`] it was built for. Objects
//! carry an owner tag naming the map they belong to; the add operations
//! refuse objects tagged for another map, so an object is never owned
//! twice. Removal hands ownership back to the caller.
//!
//! The aggregate is single-threaded: no internal locking, no
//! reentrancy guarantees. Callers serialize access.

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use rand::Rng;

use wargrid_foundation::{Error, IdSequence, ObjectId, Observers, Result, SubscriptionId, Value};

use crate::appearance::allocate_appearance;
use crate::direction::HexDirection;
use crate::entity::Entity;
use crate::faction::Faction;
use crate::node::{MapNode, TerrainId};
use crate::topology::generate_rings;
use crate::world::{Civilization, World};

static NEXT_MAP_ID: AtomicU64 = AtomicU64::new(0);

/// A process-unique tag identifying one live [`Map`].
///
/// Owner tags on nodes, factions, and entities compare against this to
/// detect objects offered to the wrong map.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct MapId(u64);

impl MapId {
    fn mint() -> Self {
        Self(NEXT_MAP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A change event delivered to map observers.
///
/// Mutators notify only when state actually changed; no-op setters are
/// silent.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MapEvent {
    /// The map's display name changed.
    NameChanged,
    /// The node collection changed (created, added, removed, or
    /// regenerated nodes, or a terrain change).
    NodesChanged,
    /// A node's neighbour slots changed.
    NodeNeighboursChanged(ObjectId),
    /// The faction collection changed.
    FactionsChanged,
    /// The entity collection changed.
    EntitiesChanged,
}

/// The aggregate root: a named hex map with its factions and entities.
#[derive(Debug)]
pub struct Map {
    id: MapId,
    name: String,
    world: Arc<World>,
    nodes: Vec<MapNode>,
    factions: Vec<Faction>,
    entities: Vec<Entity>,
    node_ids: IdSequence,
    faction_ids: IdSequence,
    entity_ids: IdSequence,
    observers: Observers<MapEvent>,
}

impl Map {
    /// Creates an empty map bound to a world.
    #[must_use]
    pub fn new(name: impl Into<String>, world: Arc<World>) -> Self {
        Self {
            id: MapId::mint(),
            name: name.into(),
            world,
            nodes: Vec::new(),
            factions: Vec::new(),
            entities: Vec::new(),
            node_ids: IdSequence::new(),
            faction_ids: IdSequence::new(),
            entity_ids: IdSequence::new(),
            observers: Observers::new(),
        }
    }

    /// Returns this map's process-unique id.
    #[must_use]
    pub fn id(&self) -> MapId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the display name. Notifies on actual change only.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.name == name {
            return false;
        }
        self.name = name;
        self.observers.notify(&MapEvent::NameChanged);
        true
    }

    /// Returns the world this map draws from.
    #[must_use]
    pub fn world(&self) -> &Arc<World> {
        &self.world
    }

    /// Registers an observer callback.
    pub fn subscribe(&mut self, callback: impl FnMut(&MapEvent) + 'static) -> SubscriptionId {
        self.observers.subscribe(callback)
    }

    /// Removes an observer. Returns true if the subscription existed.
    pub fn unsubscribe(&mut self, subscription: SubscriptionId) -> bool {
        self.observers.unsubscribe(subscription)
    }

    // ------------------------------------------------------------------
    // Nodes
    // ------------------------------------------------------------------

    /// Returns all nodes in insertion order.
    #[must_use]
    pub fn nodes(&self) -> &[MapNode] {
        &self.nodes
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the node with the given id, if it is owned here.
    #[must_use]
    pub fn node(&self, id: ObjectId) -> Option<&MapNode> {
        self.nodes.iter().find(|n| n.id() == id)
    }

    /// Creates a new node owned by this map.
    ///
    /// With `explicit_id` the node takes that id (and the sequence skips
    /// past it); otherwise the next sequential id is used.
    ///
    /// # Errors
    ///
    /// Fails if `explicit_id` is already in use.
    pub fn create_map_node(&mut self, explicit_id: Option<ObjectId>) -> Result<ObjectId> {
        let nodes = &self.nodes;
        let id = Self::claim_id(&mut self.node_ids, explicit_id, |id| {
            nodes.iter().any(|n| n.id() == id)
        })?;
        let mut node = MapNode::new(id);
        node.set_owner(Some(self.id));
        self.nodes.push(node);
        self.observers.notify(&MapEvent::NodesChanged);
        Ok(id)
    }

    /// Takes ownership of an externally constructed node.
    ///
    /// The node must already carry this map's owner tag; a node built
    /// for (or still owned by) another map is refused.
    ///
    /// # Errors
    ///
    /// Fails on an ownership mismatch or a duplicate id.
    pub fn add_map_node(&mut self, node: MapNode) -> Result<ObjectId> {
        if node.owner() != Some(self.id) {
            return Err(Error::owner_mismatch(format!("node {}", node.id())));
        }
        if self.node(node.id()).is_some() {
            return Err(Error::duplicate_id(node.id()));
        }
        let id = node.id();
        self.node_ids.observe(id);
        self.nodes.push(node);
        self.observers.notify(&MapEvent::NodesChanged);
        Ok(id)
    }

    /// Removes a node and returns ownership of it.
    ///
    /// Every reciprocal link held by another node is severed first,
    /// notifying per affected node, then observers learn of the removal
    /// before the node leaves the aggregate. An unknown id is a silent
    /// no-op returning `None`.
    pub fn remove_map_node(&mut self, id: ObjectId) -> Option<MapNode> {
        let index = self.nodes.iter().position(|n| n.id() == id)?;

        let mut affected = Vec::new();
        for other in &mut self.nodes {
            if other.id() == id {
                continue;
            }
            let mut changed = false;
            for direction in HexDirection::ALL {
                if other.neighbour(direction) == Some(id) {
                    other.set_neighbour(direction, None);
                    changed = true;
                }
            }
            if changed {
                affected.push(other.id());
            }
        }
        for other_id in affected {
            self.observers
                .notify(&MapEvent::NodeNeighboursChanged(other_id));
        }

        self.observers.notify(&MapEvent::NodesChanged);
        let mut node = self.nodes.remove(index);
        node.set_owner(None);
        Some(node)
    }

    /// Sets one neighbour slot on a node, validating the reference.
    ///
    /// Only the named slot changes; callers wanting a reciprocal link
    /// set both sides. Returns whether the slot actually changed.
    ///
    /// # Errors
    ///
    /// Fails if either the node or a `Some` neighbour id is not owned by
    /// this map.
    pub fn set_node_neighbour(
        &mut self,
        id: ObjectId,
        direction: HexDirection,
        neighbour: Option<ObjectId>,
    ) -> Result<bool> {
        if let Some(neighbour_id) = neighbour {
            if self.node(neighbour_id).is_none() {
                return Err(Error::unresolved_reference(neighbour_id));
            }
        }
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id() == id)
            .ok_or_else(|| Error::unresolved_reference(id))?;

        if node.neighbour(direction) == neighbour {
            return Ok(false);
        }
        node.set_neighbour(direction, neighbour);
        self.observers.notify(&MapEvent::NodeNeighboursChanged(id));
        Ok(true)
    }

    /// Sets or clears a node's terrain. Returns whether it changed.
    ///
    /// # Errors
    ///
    /// Fails if the node is not owned by this map.
    pub fn set_node_terrain(&mut self, id: ObjectId, terrain: Option<TerrainId>) -> Result<bool> {
        let node = self
            .nodes
            .iter_mut()
            .find(|n| n.id() == id)
            .ok_or_else(|| Error::unresolved_reference(id))?;

        if node.terrain() == terrain.as_ref() {
            return Ok(false);
        }
        node.set_terrain(terrain);
        self.observers.notify(&MapEvent::NodesChanged);
        Ok(true)
    }

    /// Replaces all nodes with a freshly generated ring topology.
    ///
    /// Destructive: current nodes are dropped without undo. Radius 0
    /// empties the map.
    pub fn generate_map_nodes(&mut self, radius: u32) {
        self.nodes.clear();
        for mut node in generate_rings(radius, &mut self.node_ids) {
            node.set_owner(Some(self.id));
            self.nodes.push(node);
        }
        self.observers.notify(&MapEvent::NodesChanged);
    }

    // ------------------------------------------------------------------
    // Factions
    // ------------------------------------------------------------------

    /// Returns all factions in insertion order.
    #[must_use]
    pub fn factions(&self) -> &[Faction] {
        &self.factions
    }

    /// Returns the number of factions.
    #[must_use]
    pub fn faction_count(&self) -> usize {
        self.factions.len()
    }

    /// Returns the faction with the given id, if it is owned here.
    #[must_use]
    pub fn faction(&self, id: ObjectId) -> Option<&Faction> {
        self.factions.iter().find(|f| f.id() == id)
    }

    /// Creates a faction with a templated name and a fresh appearance.
    ///
    /// The appearance is drawn against the world's pools with a thread
    /// RNG; it avoids every triple already used by this map's factions.
    ///
    /// # Errors
    ///
    /// Fails on an empty civilization reference, an explicit id already
    /// in use, or empty world pools.
    pub fn create_faction(
        &mut self,
        civilization: Civilization,
        explicit_id: Option<ObjectId>,
    ) -> Result<ObjectId> {
        self.create_faction_with_rng(&mut rand::thread_rng(), civilization, explicit_id)
    }

    /// [`create_faction`](Self::create_faction) with a caller-supplied
    /// RNG, for deterministic appearance draws.
    ///
    /// # Errors
    ///
    /// As [`create_faction`](Self::create_faction).
    pub fn create_faction_with_rng<R: Rng>(
        &mut self,
        rng: &mut R,
        civilization: Civilization,
        explicit_id: Option<ObjectId>,
    ) -> Result<ObjectId> {
        if civilization.name().is_empty() {
            return Err(Error::missing_civilization());
        }
        let used: HashSet<_> = self
            .factions
            .iter()
            .map(|f| f.appearance().clone())
            .collect();
        let appearance =
            allocate_appearance(rng, &used, self.world.banners(), self.world.colors())?;

        let factions = &self.factions;
        let id = Self::claim_id(&mut self.faction_ids, explicit_id, |id| {
            factions.iter().any(|f| f.id() == id)
        })?;
        let mut faction = Faction::new(id, Faction::default_name(id), civilization, appearance);
        faction.set_owner(Some(self.id));
        self.factions.push(faction);
        self.observers.notify(&MapEvent::FactionsChanged);
        Ok(id)
    }

    /// Takes ownership of an externally constructed faction.
    ///
    /// # Errors
    ///
    /// Fails on an ownership mismatch or a duplicate id.
    pub fn add_faction(&mut self, faction: Faction) -> Result<ObjectId> {
        if faction.owner() != Some(self.id) {
            return Err(Error::owner_mismatch(format!("faction {}", faction.id())));
        }
        if self.faction(faction.id()).is_some() {
            return Err(Error::duplicate_id(faction.id()));
        }
        let id = faction.id();
        self.faction_ids.observe(id);
        self.factions.push(faction);
        self.observers.notify(&MapEvent::FactionsChanged);
        Ok(id)
    }

    /// Removes a faction and returns ownership of it.
    ///
    /// An unknown id is a silent no-op returning `None`.
    pub fn remove_faction(&mut self, id: ObjectId) -> Option<Faction> {
        let index = self.factions.iter().position(|f| f.id() == id)?;
        self.observers.notify(&MapEvent::FactionsChanged);
        let mut faction = self.factions.remove(index);
        faction.set_owner(None);
        Some(faction)
    }

    // ------------------------------------------------------------------
    // Entities
    // ------------------------------------------------------------------

    /// Returns all entities in insertion order.
    #[must_use]
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    /// Returns the number of entities.
    #[must_use]
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Returns the entity with the given id, if it is owned here.
    #[must_use]
    pub fn entity(&self, id: ObjectId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    /// Sets or clears an entity's display name. Returns whether it
    /// changed.
    ///
    /// # Errors
    ///
    /// Fails if the entity is not owned by this map.
    pub fn set_entity_name(&mut self, id: ObjectId, name: Option<String>) -> Result<bool> {
        let entity = self.owned_entity_mut(id)?;
        if !entity.set_name(name) {
            return Ok(false);
        }
        self.observers.notify(&MapEvent::EntitiesChanged);
        Ok(true)
    }

    /// Stores a component value on an entity. Returns whether the
    /// stored value actually changed.
    ///
    /// # Errors
    ///
    /// Fails if the entity is not owned by this map.
    pub fn set_entity_component(
        &mut self,
        id: ObjectId,
        component_type: &str,
        value: Value,
    ) -> Result<bool> {
        let entity = self.owned_entity_mut(id)?;
        if entity.component(component_type) == Some(&value) {
            return Ok(false);
        }
        entity.set_component(component_type, value);
        self.observers.notify(&MapEvent::EntitiesChanged);
        Ok(true)
    }

    /// Removes a component from an entity. Returns whether it was
    /// present.
    ///
    /// # Errors
    ///
    /// Fails if the entity is not owned by this map.
    pub fn remove_entity_component(&mut self, id: ObjectId, component_type: &str) -> Result<bool> {
        let entity = self.owned_entity_mut(id)?;
        if !entity.remove_component(component_type) {
            return Ok(false);
        }
        self.observers.notify(&MapEvent::EntitiesChanged);
        Ok(true)
    }

    fn owned_entity_mut(&mut self, id: ObjectId) -> Result<&mut Entity> {
        self.entities
            .iter_mut()
            .find(|e| e.id() == id)
            .ok_or_else(|| Error::unresolved_reference(id))
    }

    /// Creates an entity of the given type owned by this map.
    ///
    /// # Errors
    ///
    /// Fails if `explicit_id` is already in use.
    pub fn create_entity(
        &mut self,
        entity_type: impl Into<String>,
        name: Option<String>,
        explicit_id: Option<ObjectId>,
    ) -> Result<ObjectId> {
        let entities = &self.entities;
        let id = Self::claim_id(&mut self.entity_ids, explicit_id, |id| {
            entities.iter().any(|e| e.id() == id)
        })?;
        let mut entity = Entity::new(id, entity_type);
        entity.set_name(name);
        entity.set_owner(Some(self.id));
        self.entities.push(entity);
        self.observers.notify(&MapEvent::EntitiesChanged);
        Ok(id)
    }

    /// Takes ownership of an externally constructed entity.
    ///
    /// # Errors
    ///
    /// Fails on an ownership mismatch or a duplicate id.
    pub fn add_entity(&mut self, entity: Entity) -> Result<ObjectId> {
        if entity.owner() != Some(self.id) {
            return Err(Error::owner_mismatch(format!("entity {}", entity.id())));
        }
        if self.entity(entity.id()).is_some() {
            return Err(Error::duplicate_id(entity.id()));
        }
        let id = entity.id();
        self.entity_ids.observe(id);
        self.entities.push(entity);
        self.observers.notify(&MapEvent::EntitiesChanged);
        Ok(id)
    }

    /// Removes an entity and returns ownership of it.
    ///
    /// An unknown id is a silent no-op returning `None`.
    pub fn remove_entity(&mut self, id: ObjectId) -> Option<Entity> {
        let index = self.entities.iter().position(|e| e.id() == id)?;
        self.observers.notify(&MapEvent::EntitiesChanged);
        let mut entity = self.entities.remove(index);
        entity.set_owner(None);
        Some(entity)
    }

    /// Claims an id from a sequence, honouring an explicit request.
    fn claim_id(
        sequence: &mut IdSequence,
        explicit: Option<ObjectId>,
        in_use: impl Fn(ObjectId) -> bool,
    ) -> Result<ObjectId> {
        match explicit {
            Some(id) => {
                if in_use(id) {
                    return Err(Error::duplicate_id(id));
                }
                sequence.observe(id);
                Ok(id)
            }
            None => Ok(sequence.next_id()),
        }
    }

    /// Tags a detached node as belonging to this map.
    ///
    /// Pairs with [`add_map_node`](Self::add_map_node): claiming is the
    /// deliberate step that marks an externally built node for this map
    /// and no other.
    #[must_use]
    pub fn claim_node(&self, mut node: MapNode) -> MapNode {
        node.set_owner(Some(self.id));
        node
    }

    /// Tags a detached faction as belonging to this map.
    #[must_use]
    pub fn claim_faction(&self, mut faction: Faction) -> Faction {
        faction.set_owner(Some(self.id));
        faction
    }

    /// Tags a detached entity as belonging to this map.
    #[must_use]
    pub fn claim_entity(&self, mut entity: Entity) -> Entity {
        entity.set_owner(Some(self.id));
        entity
    }
}
