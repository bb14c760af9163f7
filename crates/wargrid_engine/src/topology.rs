//! Concentric-ring hex topology generation.
//!
//! Builds a complete hex grid of `radius` rings around an origin node:
//! ring 0 is the origin alone, ring k holds the 6k nodes exactly k
//! steps away. Every link in the result is reciprocal, and every node
//! off the outer boundary ends with all six neighbour slots filled.

use std::collections::HashMap;

use wargrid_foundation::{IdSequence, ObjectId};

use crate::direction::HexDirection;
use crate::node::MapNode;

/// Generates a ring-structured hex graph of the given radius.
///
/// Radius 0 yields no nodes at all; radius 1 yields exactly the origin.
/// Ids are drawn from `ids`, so generated nodes slot directly into the
/// id space of the map that owns the sequence. No upper bound on the
/// radius is enforced here; bounding it is the caller's job.
///
/// # Panics
///
/// Panics if an internal cross-link combines non-adjacent directions
/// (should never happen unless there's an internal bug).
#[must_use]
pub fn generate_rings(radius: u32, ids: &mut IdSequence) -> Vec<MapNode> {
    let mut builder = RingBuilder::new();
    if radius == 0 {
        return builder.nodes;
    }

    // Ring 0: the origin.
    let origin = builder.create(ids.next_id());
    let mut frontier = vec![origin];

    // Each sweep grows ring k from ring k-1's frontier only, bounding
    // the work per sweep to the ring size rather than the whole graph.
    for _ in 1..radius {
        let mut next_frontier = Vec::with_capacity(frontier.len() + 6);
        for &index in &frontier {
            for direction in HexDirection::ALL {
                if builder.nodes[index].neighbour(direction).is_some() {
                    // A slot, once filled, is never reassigned.
                    continue;
                }
                let created = builder.create(ids.next_id());
                builder.link(index, direction, created);
                builder.cross_link(index, direction, created);
                next_frontier.push(created);
            }
        }
        frontier = next_frontier;
    }

    builder.nodes
}

/// Accumulates nodes during generation, resolving ids to vector
/// positions so links can be written on both endpoints.
struct RingBuilder {
    nodes: Vec<MapNode>,
    positions: HashMap<ObjectId, usize>,
}

impl RingBuilder {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            positions: HashMap::new(),
        }
    }

    fn create(&mut self, id: ObjectId) -> usize {
        let index = self.nodes.len();
        self.nodes.push(MapNode::new(id));
        self.positions.insert(id, index);
        index
    }

    /// Links two nodes bidirectionally along `direction` (from `from`).
    fn link(&mut self, from: usize, direction: HexDirection, to: usize) {
        let from_id = self.nodes[from].id();
        let to_id = self.nodes[to].id();
        self.nodes[from].set_neighbour(direction, Some(to_id));
        self.nodes[to].set_neighbour(direction.opposite(), Some(from_id));
    }

    /// Connects a freshly created node to the existing third-party
    /// neighbours it shares with its parent.
    ///
    /// `created` was just linked to `parent` along `direction`. For
    /// each direction adjacent to `direction`, an existing neighbour of
    /// `parent` there is also adjacent to `created`; the connecting
    /// pair says along which directions.
    fn cross_link(&mut self, parent: usize, direction: HexDirection, created: usize) {
        let (ccw, cw) = direction.neighbour_directions();
        for adjacent in [ccw, cw] {
            let Some(third_id) = self.nodes[parent].neighbour(adjacent) else {
                continue;
            };
            let third = self.positions[&third_id];
            let (created_to_third, _) = direction
                .connecting_directions(adjacent)
                .expect("cyclically adjacent directions always connect");
            self.link(created, created_to_third, third);
        }
    }
}
