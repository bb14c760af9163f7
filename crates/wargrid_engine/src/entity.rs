//! Entities: typed game objects with pass-through component storage.
//!
//! The engine does not interpret components; they are structured
//! values keyed by component-type name, stored for the rules and
//! rendering layers.

use wargrid_foundation::{ObjectId, Value, WgMap};

use crate::map::MapId;

/// A game entity owned by a map.
#[derive(Debug, Clone)]
pub struct Entity {
    id: ObjectId,
    entity_type: String,
    name: Option<String>,
    components: WgMap<Value, Value>,
    owner: Option<MapId>,
}

impl Entity {
    /// Creates a detached entity of the given type.
    #[must_use]
    pub fn new(id: ObjectId, entity_type: impl Into<String>) -> Self {
        Self {
            id,
            entity_type: entity_type.into(),
            name: None,
            components: WgMap::new(),
            owner: None,
        }
    }

    /// Returns this entity's id.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Returns the opaque entity-type reference.
    #[must_use]
    pub fn entity_type(&self) -> &str {
        &self.entity_type
    }

    /// Returns the display name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Sets or clears the display name. Returns true on actual change.
    pub fn set_name(&mut self, name: Option<String>) -> bool {
        if self.name == name {
            return false;
        }
        self.name = name;
        true
    }

    /// Returns the component value for a component-type name.
    #[must_use]
    pub fn component(&self, component_type: &str) -> Option<&Value> {
        self.components.get(&Value::from(component_type))
    }

    /// Stores a component value under a component-type name.
    pub fn set_component(&mut self, component_type: &str, value: Value) {
        self.components = self.components.insert(Value::from(component_type), value);
    }

    /// Removes a component. Returns true if it was present.
    pub fn remove_component(&mut self, component_type: &str) -> bool {
        let key = Value::from(component_type);
        if !self.components.contains_key(&key) {
            return false;
        }
        self.components = self.components.remove(&key);
        true
    }

    /// Returns the full component map.
    #[must_use]
    pub fn components(&self) -> &WgMap<Value, Value> {
        &self.components
    }

    pub(crate) fn set_components(&mut self, components: WgMap<Value, Value>) {
        self.components = components;
    }

    /// Returns the owning map's id, if this entity is owned.
    #[must_use]
    pub fn owner(&self) -> Option<MapId> {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: Option<MapId>) {
        self.owner = owner;
    }
}
