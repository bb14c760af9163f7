//! Hex map engine for Wargrid.
//!
//! This crate provides:
//! - [`HexDirection`] - Six-direction hex adjacency arithmetic
//! - [`MapNode`] - A single hex cell with id-keyed neighbour slots
//! - [`topology`] - Concentric-ring map generation
//! - [`appearance`] - Collision-free faction appearance allocation
//! - [`Map`] - The aggregate root owning nodes, factions, and entities
//! - Structured-value serialization and (behind the `persist` feature)
//!   map-file save/load

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod appearance;
mod direction;
mod entity;
mod faction;
mod map;
mod node;
#[cfg(feature = "persist")]
pub mod persist;
mod serialize;
pub mod topology;
mod world;

pub use appearance::Appearance;
pub use direction::HexDirection;
pub use entity::Entity;
pub use faction::Faction;
pub use map::{Map, MapEvent, MapId};
pub use node::{MapNode, TerrainId};
pub use world::{Banner, Civilization, Color, World};
