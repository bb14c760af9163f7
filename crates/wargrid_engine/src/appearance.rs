//! Faction appearance allocation.
//!
//! A faction's visual identity is a (banner, primary color, secondary
//! color) triple drawn from the owning world's pools. Allocation is
//! rejection sampling against the triples already in use; the draw is
//! cosmetic, so no reproducibility is promised by the map layer (it
//! uses a fresh thread RNG), but the sampler takes any [`Rng`] so
//! deterministic callers can seed their own.

use std::collections::HashSet;

use rand::Rng;

use wargrid_foundation::{Error, Result};

use crate::world::{Banner, Color};

/// A faction's visual identity triple.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Appearance {
    /// The banner asset.
    pub banner: Banner,
    /// The primary color.
    pub primary: Color,
    /// The secondary color.
    pub secondary: Color,
}

/// Draws an appearance triple not present in `used`.
///
/// The secondary color is bumped to the next pool index (modulo pool
/// size) when it collides with the primary, so primary and secondary
/// always differ when the color pool has at least two entries.
///
/// # Errors
///
/// Fails with a value error when either pool is empty.
///
/// Availability: when `used` approaches the number of representable
/// triples (|banners| x |colors| x (|colors|-1)), the rejection loop
/// may run arbitrarily long, and forever once the space is exhausted.
/// Callers that cannot rule that out should bound the pools or the
/// used set up front.
pub fn allocate_appearance<R: Rng>(
    rng: &mut R,
    used: &HashSet<Appearance>,
    banners: &[Banner],
    colors: &[Color],
) -> Result<Appearance> {
    if banners.is_empty() {
        return Err(Error::empty_pool("banner"));
    }
    if colors.is_empty() {
        return Err(Error::empty_pool("color"));
    }

    loop {
        let banner = banners[rng.gen_range(0..banners.len())].clone();
        let primary_index = rng.gen_range(0..colors.len());
        let mut secondary_index = rng.gen_range(0..colors.len());
        if secondary_index == primary_index {
            secondary_index = (secondary_index + 1) % colors.len();
        }

        let candidate = Appearance {
            banner,
            primary: colors[primary_index].clone(),
            secondary: colors[secondary_index].clone(),
        };
        if !used.contains(&candidate) {
            return Ok(candidate);
        }
    }
}
