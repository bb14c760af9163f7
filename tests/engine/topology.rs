//! Integration tests for ring topology generation
//!
//! Tests node counts, link structure, and id allocation across radii.

use wargrid_engine::topology::generate_rings;
use wargrid_engine::{HexDirection, MapNode};
use wargrid_foundation::{IdSequence, ObjectId};

fn generate(radius: u32) -> Vec<MapNode> {
    let mut ids = IdSequence::new();
    generate_rings(radius, &mut ids)
}

fn find(nodes: &[MapNode], id: ObjectId) -> &MapNode {
    nodes.iter().find(|n| n.id() == id).unwrap()
}

// =============================================================================
// Node Counts
// =============================================================================

#[test]
fn small_radii_have_documented_counts() {
    assert_eq!(generate(0).len(), 0);
    assert_eq!(generate(1).len(), 1);
    assert_eq!(generate(2).len(), 7);
    assert_eq!(generate(3).len(), 19);
    assert_eq!(generate(4).len(), 37);
}

#[test]
fn each_ring_adds_six_times_its_index() {
    let mut previous = 0;
    for radius in 1u32..6 {
        let count = generate(radius).len();
        let added = count - previous;
        let expected = if radius == 1 { 1 } else { 6 * (radius as usize - 1) };
        assert_eq!(added, expected);
        previous = count;
    }
}

// =============================================================================
// Link Structure
// =============================================================================

#[test]
fn interior_nodes_are_fully_linked() {
    let nodes = generate(4);
    // The first 19 nodes are rings 0..3, all interior at radius 4.
    for node in &nodes[..19] {
        assert_eq!(node.neighbour_count(), 6, "node {} not full", node.id());
    }
}

#[test]
fn every_link_is_reciprocal() {
    let nodes = generate(4);
    for a in &nodes {
        for (direction, b_id) in a.neighbours() {
            let b = find(&nodes, b_id);
            assert_eq!(b.neighbour(direction.opposite()), Some(a.id()));
        }
    }
}

#[test]
fn neighbours_are_distinct_per_node() {
    let nodes = generate(5);
    for node in &nodes {
        let mut ids: Vec<ObjectId> = node.neighbours().map(|(_, id)| id).collect();
        let before = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
}

#[test]
fn no_node_links_to_itself() {
    let nodes = generate(4);
    for node in &nodes {
        assert!(node.neighbours().all(|(_, id)| id != node.id()));
    }
}

#[test]
fn origin_ring_mates_share_an_edge() {
    let nodes = generate(2);
    let origin = &nodes[0];
    // Walking the origin's West neighbour's cycle must reach the
    // NorthWest neighbour directly.
    let west = find(&nodes, origin.neighbour(HexDirection::West).unwrap());
    let north_west = origin.neighbour(HexDirection::NorthWest).unwrap();
    assert!(west.neighbours().any(|(_, id)| id == north_west));
}

// =============================================================================
// Id Allocation
// =============================================================================

#[test]
fn generation_continues_an_existing_sequence() {
    let mut ids = IdSequence::new();
    let first_batch = generate_rings(2, &mut ids);
    let second_batch = generate_rings(2, &mut ids);

    let max_first = first_batch.iter().map(|n| n.id()).max().unwrap();
    let min_second = second_batch.iter().map(|n| n.id()).min().unwrap();
    assert!(min_second > max_first);
}
