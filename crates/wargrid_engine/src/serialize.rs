//! Structured-value serialization of maps.
//!
//! A map serializes to a [`Value`] tree; wire encodings are layered on
//! top (see the `persist` module). Neighbour references are written as
//! direction-name keyed id entries and resolved in a second pass on
//! load, so payload order never matters.

use std::sync::Arc;

use wargrid_foundation::{Error, ObjectId, Result, Value, WgMap, WgVec};

use crate::appearance::Appearance;
use crate::direction::HexDirection;
use crate::entity::Entity;
use crate::faction::Faction;
use crate::map::Map;
use crate::node::{MapNode, TerrainId};
use crate::world::{Banner, Civilization, Color, World};

impl Map {
    /// Serializes this map to a structured value.
    #[must_use]
    pub fn serialize(&self) -> Value {
        let nodes: WgVec<Value> = self.nodes().iter().map(serialize_node).collect();
        let factions: WgVec<Value> = self.factions().iter().map(serialize_faction).collect();
        let entities: WgVec<Value> = self.entities().iter().map(serialize_entity).collect();

        Value::Map(
            WgMap::new()
                .insert(Value::from("name"), Value::from(self.name()))
                .insert(Value::from("world"), Value::from(self.world().uuid()))
                .insert(Value::from("mapNodes"), Value::Seq(nodes))
                .insert(Value::from("factions"), Value::Seq(factions))
                .insert(Value::from("entities"), Value::Seq(entities)),
        )
    }

    /// Reconstructs a map from a structured value.
    ///
    /// The payload's embedded world identifier is checked against
    /// `world` before anything is constructed. Nodes are rebuilt in two
    /// passes so neighbour references can point anywhere in the payload.
    ///
    /// # Errors
    ///
    /// Fails on a world mismatch, missing or mistyped fields, unknown
    /// direction names, duplicate ids, and neighbour references to
    /// absent nodes.
    pub fn deserialize(value: &Value, world: Arc<World>) -> Result<Self> {
        let top = value
            .as_map()
            .ok_or_else(|| Error::type_mismatch("map", "root"))?;

        let embedded = str_field(top, "world")?;
        if embedded != world.uuid() {
            return Err(Error::world_mismatch(embedded, world.uuid()));
        }

        let mut map = Map::new(str_field(top, "name")?, world);

        let node_records = seq_field(top, "mapNodes")?;
        // Pass one: create every node so references can resolve.
        for record in node_records.iter() {
            let record = record
                .as_map()
                .ok_or_else(|| Error::type_mismatch("map", "mapNodes"))?;
            let id = id_field(record, "id")?;
            map.create_map_node(Some(id))?;
            if let Some(terrain) = optional_str_field(record, "terrainType")? {
                map.set_node_terrain(id, Some(TerrainId::new(terrain)))?;
            }
        }
        // Pass two: resolve neighbour references.
        for record in node_records.iter() {
            let record = record
                .as_map()
                .ok_or_else(|| Error::type_mismatch("map", "mapNodes"))?;
            let id = id_field(record, "id")?;
            for (key, value) in map_field(record, "neighbours")?.iter() {
                let direction: HexDirection = key
                    .as_str()
                    .ok_or_else(|| Error::type_mismatch("string", "neighbours"))?
                    .parse()?;
                let neighbour = value
                    .as_int()
                    .map(ObjectId::new)
                    .ok_or_else(|| Error::type_mismatch("integer", "neighbours"))?;
                map.set_node_neighbour(id, direction, Some(neighbour))?;
            }
        }

        for record in seq_field(top, "factions")?.iter() {
            let record = record
                .as_map()
                .ok_or_else(|| Error::type_mismatch("map", "factions"))?;
            let faction = Faction::new(
                id_field(record, "id")?,
                str_field(record, "displayName")?,
                Civilization::new(str_field(record, "civilization")?),
                Appearance {
                    banner: Banner::new(str_field(record, "banner")?),
                    primary: Color::new(str_field(record, "primaryColor")?),
                    secondary: Color::new(str_field(record, "secondaryColor")?),
                },
            );
            let faction = map.claim_faction(faction);
            map.add_faction(faction)?;
        }

        for record in seq_field(top, "entities")?.iter() {
            let record = record
                .as_map()
                .ok_or_else(|| Error::type_mismatch("map", "entities"))?;
            let mut entity = Entity::new(id_field(record, "id")?, str_field(record, "type")?);
            entity.set_name(optional_str_field(record, "name")?.map(str::to_owned));
            entity.set_components(map_field(record, "components")?.clone());
            let entity = map.claim_entity(entity);
            map.add_entity(entity)?;
        }

        Ok(map)
    }
}

fn serialize_node(node: &MapNode) -> Value {
    let neighbours = node.neighbours().fold(WgMap::new(), |record, (d, id)| {
        record.insert(Value::from(d.name()), Value::Int(id.value()))
    });
    let mut record = WgMap::new()
        .insert(Value::from("id"), Value::Int(node.id().value()))
        .insert(Value::from("neighbours"), Value::Map(neighbours));
    if let Some(terrain) = node.terrain() {
        record = record.insert(Value::from("terrainType"), Value::from(terrain.name()));
    }
    Value::Map(record)
}

fn serialize_faction(faction: &Faction) -> Value {
    let appearance = faction.appearance();
    Value::Map(
        WgMap::new()
            .insert(Value::from("id"), Value::Int(faction.id().value()))
            .insert(Value::from("displayName"), Value::from(faction.name()))
            .insert(
                Value::from("civilization"),
                Value::from(faction.civilization().name()),
            )
            .insert(Value::from("banner"), Value::from(appearance.banner.name()))
            .insert(
                Value::from("primaryColor"),
                Value::from(appearance.primary.name()),
            )
            .insert(
                Value::from("secondaryColor"),
                Value::from(appearance.secondary.name()),
            ),
    )
}

fn serialize_entity(entity: &Entity) -> Value {
    let name = entity.name().map_or(Value::Nil, Value::from);
    Value::Map(
        WgMap::new()
            .insert(Value::from("id"), Value::Int(entity.id().value()))
            .insert(Value::from("type"), Value::from(entity.entity_type()))
            .insert(Value::from("name"), name)
            .insert(
                Value::from("components"),
                Value::Map(entity.components().clone()),
            ),
    )
}

fn field<'a>(record: &'a WgMap<Value, Value>, name: &'static str) -> Result<&'a Value> {
    record
        .get(&Value::from(name))
        .ok_or_else(|| Error::missing_field(name))
}

fn str_field<'a>(record: &'a WgMap<Value, Value>, name: &'static str) -> Result<&'a str> {
    field(record, name)?
        .as_str()
        .ok_or_else(|| Error::type_mismatch("string", name))
}

fn optional_str_field<'a>(
    record: &'a WgMap<Value, Value>,
    name: &'static str,
) -> Result<Option<&'a str>> {
    match record.get(&Value::from(name)) {
        None | Some(Value::Nil) => Ok(None),
        Some(value) => value
            .as_str()
            .map(Some)
            .ok_or_else(|| Error::type_mismatch("string", name)),
    }
}

fn id_field(record: &WgMap<Value, Value>, name: &'static str) -> Result<ObjectId> {
    field(record, name)?
        .as_int()
        .map(ObjectId::new)
        .ok_or_else(|| Error::type_mismatch("integer", name))
}

fn seq_field<'a>(record: &'a WgMap<Value, Value>, name: &'static str) -> Result<&'a WgVec<Value>> {
    field(record, name)?
        .as_seq()
        .ok_or_else(|| Error::type_mismatch("sequence", name))
}

fn map_field<'a>(
    record: &'a WgMap<Value, Value>,
    name: &'static str,
) -> Result<&'a WgMap<Value, Value>> {
    field(record, name)?
        .as_map()
        .ok_or_else(|| Error::type_mismatch("map", name))
}
