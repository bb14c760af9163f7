//! Integration tests for faction appearance allocation
//!
//! Tests pool guards, the secondary-color bump, and collision-free
//! draws against a used set.

use std::collections::HashSet;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use wargrid_engine::appearance::allocate_appearance;
use wargrid_engine::{Banner, Color};
use wargrid_foundation::ErrorKind;

fn banners(names: &[&str]) -> Vec<Banner> {
    names.iter().map(|n| Banner::new(*n)).collect()
}

fn colors(names: &[&str]) -> Vec<Color> {
    names.iter().map(|n| Color::new(*n)).collect()
}

// =============================================================================
// Pool Guards
// =============================================================================

#[test]
fn empty_pools_fail_before_sampling() {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    let used = HashSet::new();

    let err = allocate_appearance(&mut rng, &used, &[], &colors(&["red"])).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyPool("banner")));

    let err = allocate_appearance(&mut rng, &used, &banners(&["Eagle"]), &[]).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EmptyPool("color")));
}

// =============================================================================
// Color Separation
// =============================================================================

#[test]
fn primary_and_secondary_never_coincide_with_two_or_more_colors() {
    let mut rng = ChaCha8Rng::seed_from_u64(17);
    let banners = banners(&["Eagle", "Dragon"]);
    let colors = colors(&["red", "blue", "gold"]);

    for _ in 0..200 {
        let appearance = allocate_appearance(&mut rng, &HashSet::new(), &banners, &colors).unwrap();
        assert_ne!(appearance.primary, appearance.secondary);
    }
}

#[test]
fn all_pool_entries_are_eventually_drawn() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let banners = banners(&["Eagle", "Dragon", "Wolf"]);
    let colors = colors(&["red", "blue"]);

    let mut seen_banners = HashSet::new();
    for _ in 0..100 {
        let appearance = allocate_appearance(&mut rng, &HashSet::new(), &banners, &colors).unwrap();
        seen_banners.insert(appearance.banner);
    }
    assert_eq!(seen_banners.len(), 3);
}

// =============================================================================
// Collision Avoidance
// =============================================================================

#[test]
fn draws_exhaust_a_small_triple_space() {
    // One banner, two colors: (red, blue) and (blue, red) only.
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let banners = banners(&["Eagle"]);
    let colors = colors(&["red", "blue"]);

    let mut used = HashSet::new();
    for _ in 0..2 {
        let appearance = allocate_appearance(&mut rng, &used, &banners, &colors).unwrap();
        assert!(used.insert(appearance));
    }
    assert_eq!(used.len(), 2);
}

#[test]
fn used_set_is_respected_across_many_draws() {
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let banners = banners(&["Eagle", "Dragon", "Wolf", "Raven"]);
    let colors = colors(&["red", "blue", "gold", "green", "white"]);

    // 4 x 5 x 4 = 80 triples; 40 draws stay comfortably clear of
    // exhaustion.
    let mut used = HashSet::new();
    for _ in 0..40 {
        let appearance = allocate_appearance(&mut rng, &used, &banners, &colors).unwrap();
        assert!(used.insert(appearance));
    }
}
