//! Wargrid - Hex-grid strategy-game map engine
//!
//! This crate re-exports both layers of the Wargrid system for
//! convenient access. For detailed documentation, see the individual
//! layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: wargrid_engine     — Directions, topology, factions, maps,
//!                               serialization, map-file persistence
//! Layer 0: wargrid_foundation — Core types (Value, ObjectId, Error),
//!                               persistent collections, observers
//! ```

pub use wargrid_engine as engine;
pub use wargrid_foundation as foundation;
