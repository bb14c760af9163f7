//! Integration tests for persistent collections
//!
//! Tests structural sharing and the persistent update API of WgVec and
//! WgMap.

use wargrid_foundation::{WgMap, WgVec};

// =============================================================================
// WgVec
// =============================================================================

#[test]
fn vec_starts_empty() {
    let v: WgVec<i32> = WgVec::new();
    assert!(v.is_empty());
    assert_eq!(v.len(), 0);
    assert_eq!(v.get(0), None);
}

#[test]
fn vec_push_back_leaves_the_original_untouched() {
    let v1: WgVec<i32> = [1, 2].into_iter().collect();
    let v2 = v1.push_back(3);

    assert_eq!(v1.len(), 2);
    assert_eq!(v2.len(), 3);
    assert_eq!(v2.get(2), Some(&3));
}

#[test]
fn vec_from_iterator_preserves_order() {
    let v: WgVec<i32> = (0..5).collect();
    let collected: Vec<i32> = v.iter().copied().collect();
    assert_eq!(collected, vec![0, 1, 2, 3, 4]);
}

#[test]
fn vec_equality_is_structural() {
    let v1: WgVec<i32> = [1, 2, 3].into_iter().collect();
    let v2: WgVec<i32> = [1, 2, 3].into_iter().collect();
    let v3 = v2.push_back(4);
    assert_eq!(v1, v2);
    assert_ne!(v1, v3);
}

// =============================================================================
// WgMap
// =============================================================================

#[test]
fn map_insert_leaves_the_original_untouched() {
    let m1 = WgMap::new().insert("a", 1);
    let m2 = m1.insert("b", 2);

    assert_eq!(m1.len(), 1);
    assert_eq!(m1.get(&"b"), None);
    assert_eq!(m2.get(&"b"), Some(&2));
}

#[test]
fn map_remove_leaves_the_original_untouched() {
    let m1 = WgMap::new().insert("a", 1).insert("b", 2);
    let m2 = m1.remove(&"a");

    assert!(m1.contains_key(&"a"));
    assert!(!m2.contains_key(&"a"));
    assert_eq!(m2.len(), 1);
}

#[test]
fn map_insert_overwrites() {
    let m = WgMap::new().insert("a", 1).insert("a", 9);
    assert_eq!(m.get(&"a"), Some(&9));
    assert_eq!(m.len(), 1);
}

#[test]
fn map_equality_ignores_insertion_order() {
    let m1: WgMap<&str, i32> = [("a", 1), ("b", 2)].into_iter().collect();
    let m2: WgMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
    assert_eq!(m1, m2);
}

#[test]
fn map_iterators_cover_all_entries() {
    let m: WgMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();
    assert_eq!(m.keys().count(), 3);
    assert_eq!(m.values().sum::<i32>(), 6);
}
