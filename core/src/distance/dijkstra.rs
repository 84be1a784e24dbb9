use super::Unreachable;
use crate::graph::{Edge, EdgeKind, GenreGraph, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};
use std::{cmp::Ordering, collections::BinaryHeap};
use tracing::debug;

/// Link kinds used by at least one minimum-cost path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PathFlags {
    pub via_origin: bool,
}

impl PathFlags {
    fn through(self, kind: EdgeKind) -> Self {
        Self {
            via_origin: self.via_origin || kind.is_origin(),
        }
    }

    fn merge(self, other: Self) -> Self {
        Self {
            via_origin: self.via_origin || other.via_origin,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath {
    pub cost: f32,
    pub path: Vec<NodeId>,
    pub flags: PathFlags,
    pub nodes_visited: usize,
}

#[derive(Clone)]
struct DijkstraNode {
    cost: f32,
    node: NodeId,
}

impl PartialEq for DijkstraNode {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl Eq for DijkstraNode {}

impl PartialOrd for DijkstraNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap (BinaryHeap is max-heap by default)
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
    }
}

struct DijkstraState {
    heap: BinaryHeap<DijkstraNode>,
    distances: FxHashMap<NodeId, f32>,
    parent_map: FxHashMap<NodeId, NodeId>,
    flags: FxHashMap<NodeId, PathFlags>,
    visited: FxHashSet<NodeId>,
}

impl DijkstraState {
    fn new(start: NodeId) -> Self {
        let mut heap = BinaryHeap::new();
        let mut distances = FxHashMap::default();

        heap.push(DijkstraNode {
            cost: 0.0,
            node: start,
        });
        distances.insert(start, 0.0);

        Self {
            heap,
            distances,
            parent_map: FxHashMap::default(),
            flags: FxHashMap::default(),
            visited: FxHashSet::default(),
        }
    }

    fn flags_of(&self, node: NodeId) -> PathFlags {
        self.flags.get(&node).copied().unwrap_or_default()
    }

    fn visit_neighbor(&mut self, edge: &Edge, current: NodeId, current_cost: f32) {
        let new_cost = current_cost + edge.weight;
        let new_flags = self.flags_of(current).through(edge.kind);

        if let Some(&existing_cost) = self.distances.get(&edge.target) {
            if new_cost > existing_cost {
                return;
            }
            if new_cost == existing_cost {
                let merged = self.flags_of(edge.target).merge(new_flags);
                self.flags.insert(edge.target, merged);
                return;
            }
        }

        self.distances.insert(edge.target, new_cost);
        self.parent_map.insert(edge.target, current);
        self.flags.insert(edge.target, new_flags);
        self.heap.push(DijkstraNode {
            cost: new_cost,
            node: edge.target,
        });
    }

    fn reconstruct_path(&self, start: NodeId, target: NodeId) -> Vec<NodeId> {
        let mut path = vec![target];
        let mut current_node = target;

        while current_node != start {
            current_node = self.parent_map[&current_node];
            path.push(current_node);
        }

        path.reverse();
        path
    }
}

/// Minimum-cost path from `start` to `target`.
///
/// Edges for which `skip` returns true are ignored. With a `bound`, the search
/// gives up once every remaining candidate costs more than the bound.
///
/// Equal-cost flag merging assumes strictly positive edge weights, which
/// [`Weights::validate`](crate::Weights::validate) enforces.
pub fn shortest_path<F>(
    graph: &GenreGraph,
    start: NodeId,
    target: NodeId,
    bound: Option<f32>,
    skip: F,
) -> Result<ShortestPath, Unreachable>
where
    F: Fn(NodeId, &Edge) -> bool,
{
    let mut state = DijkstraState::new(start);

    while let Some(DijkstraNode { cost, node: current }) = state.heap.pop() {
        if bound.is_some_and(|limit| cost > limit) {
            debug!(visited = state.visited.len(), "search bound reached");
            return Err(Unreachable::BeyondLimit);
        }

        if current == target {
            debug!(visited = state.visited.len(), cost, "path found");
            return Ok(ShortestPath {
                cost,
                path: state.reconstruct_path(start, target),
                flags: state.flags_of(target),
                nodes_visited: state.visited.len(),
            });
        }

        if !state.visited.insert(current) {
            continue;
        }

        for edge in graph.edges(current) {
            if skip(current, edge) {
                continue;
            }
            state.visit_neighbor(edge, current, cost);
        }
    }

    debug!(visited = state.visited.len(), "no path");
    Err(Unreachable::Disconnected)
}
