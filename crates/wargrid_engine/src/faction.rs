//! Factions: named players with a civilization and a visual identity.

use wargrid_foundation::ObjectId;

use crate::appearance::Appearance;
use crate::map::MapId;
use crate::world::Civilization;

/// A faction owned by a map.
///
/// The appearance triple is unique among the owning map's factions at
/// creation time; the engine does not re-check it afterwards.
#[derive(Debug, Clone)]
pub struct Faction {
    id: ObjectId,
    name: String,
    civilization: Civilization,
    appearance: Appearance,
    owner: Option<MapId>,
}

impl Faction {
    /// Creates a detached faction.
    #[must_use]
    pub fn new(
        id: ObjectId,
        name: impl Into<String>,
        civilization: Civilization,
        appearance: Appearance,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            civilization,
            appearance,
            owner: None,
        }
    }

    /// Returns the default display name for a faction id.
    #[must_use]
    pub fn default_name(id: ObjectId) -> String {
        format!("New Faction {id}")
    }

    /// Returns this faction's id.
    #[must_use]
    pub fn id(&self) -> ObjectId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets the display name. Returns true if the name changed.
    pub fn set_name(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.name == name {
            return false;
        }
        self.name = name;
        true
    }

    /// Returns the civilization reference.
    #[must_use]
    pub fn civilization(&self) -> &Civilization {
        &self.civilization
    }

    /// Returns the appearance triple.
    #[must_use]
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Returns the owning map's id, if this faction is owned.
    #[must_use]
    pub fn owner(&self) -> Option<MapId> {
        self.owner
    }

    pub(crate) fn set_owner(&mut self, owner: Option<MapId>) {
        self.owner = owner;
    }
}
