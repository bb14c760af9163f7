//! Map-file persistence.
//!
//! The outermost encoding step: the structured-value form from
//! [`Map::serialize`] written to disk as msgpack. No format versioning
//! and no retries; I/O failures and decode failures surface directly.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use wargrid_foundation::{Error, Result, Value};

use crate::map::Map;
use crate::world::World;

/// Writes a map to `path` in msgpack encoding.
///
/// # Errors
///
/// Fails with a codec error when encoding fails and an I/O error when
/// the file cannot be written.
pub fn save_map(path: impl AsRef<Path>, map: &Map) -> Result<()> {
    let bytes =
        rmp_serde::to_vec(&map.serialize()).map_err(|err| Error::codec(err.to_string()))?;
    fs::write(path, bytes)?;
    Ok(())
}

/// Reads a map file and reconstructs the map against `world`.
///
/// # Errors
///
/// Fails with an I/O error when the file cannot be read, a codec error
/// when the bytes are not valid msgpack, and a value error when the
/// decoded payload does not describe a map for `world`.
pub fn load_map(path: impl AsRef<Path>, world: Arc<World>) -> Result<Map> {
    let bytes = fs::read(path)?;
    let payload: Value =
        rmp_serde::from_slice(&bytes).map_err(|err| Error::codec(err.to_string()))?;
    Map::deserialize(&payload, world)
}
