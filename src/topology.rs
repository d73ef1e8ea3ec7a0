//! Edge lookup and traversal helpers shared by both analysis passes.
//!
//! All functions are total over well-formed input: a node id that does not
//! appear in the graph simply yields empty results, never an error.

use crate::graph::Edge;
use ahash::{AHashMap, AHashSet};
use std::collections::VecDeque;

/// Edges flowing into `node_id`.
pub fn incoming_edges<'a>(node_id: &str, edges: &'a [Edge]) -> Vec<&'a Edge> {
    edges.iter().filter(|e| e.target == node_id).collect()
}

/// Edges flowing out of `node_id`.
pub fn outgoing_edges<'a>(node_id: &str, edges: &'a [Edge]) -> Vec<&'a Edge> {
    edges.iter().filter(|e| e.source == node_id).collect()
}

/// Sum of `flow_volume` over the incoming edges of `node_id`.
pub fn in_volume(node_id: &str, edges: &[Edge]) -> f64 {
    edges
        .iter()
        .filter(|e| e.target == node_id)
        .map(|e| e.flow_volume)
        .sum()
}

/// Sum of `flow_volume` over the outgoing edges of `node_id`.
pub fn out_volume(node_id: &str, edges: &[Edge]) -> f64 {
    edges
        .iter()
        .filter(|e| e.source == node_id)
        .map(|e| e.flow_volume)
        .sum()
}

/// True iff the node has neither incoming nor outgoing edges.
pub fn is_isolated(node_id: &str, edges: &[Edge]) -> bool {
    !edges.iter().any(|e| e.source == node_id || e.target == node_id)
}

/// The set of node ids reachable from `seeds` by following edges forward,
/// seeds included. Single BFS pass over an adjacency map, O(V+E).
///
/// Used to propagate "blocked" downstream of failing nodes: everything
/// reachable from a bottleneck is starved even if not itself failing.
pub fn reachable_from<'a, I>(seeds: I, edges: &[Edge]) -> AHashSet<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }

    let mut reached: AHashSet<String> = AHashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();
    for seed in seeds {
        if reached.insert(seed.to_string()) {
            queue.push_back(seed);
        }
    }

    while let Some(current) = queue.pop_front() {
        if let Some(targets) = adjacency.get(current) {
            for &target in targets {
                if reached.insert(target.to_string()) {
                    queue.push_back(target);
                }
            }
        }
    }

    reached
}
