use std::collections::BinaryHeap;

use hashbrown::HashMap;
use petgraph::{graph::NodeIndex, visit::EdgeRef};

use super::state::State;
use crate::{Meters, model::PathGraph};

/// Dijkstra's algorithm from `start` to `target` over the path network.
///
/// Returns the node sequence from `start` to `target` (inclusive) and its
/// total length, or `None` if `target` is not reachable. All state is local
/// to the call, so concurrent searches on one graph are independent.
pub(crate) fn dijkstra_path(
    graph: &PathGraph,
    start: NodeIndex,
    target: NodeIndex,
) -> Option<(Vec<NodeIndex>, Meters)> {
    // Estimate capacity based on graph size
    let estimated_nodes = graph.node_count().min(1000);
    let mut distances: HashMap<NodeIndex, Meters> = HashMap::with_capacity(estimated_nodes);
    let mut predecessors: HashMap<NodeIndex, NodeIndex> = HashMap::with_capacity(estimated_nodes);
    let mut heap = BinaryHeap::with_capacity(estimated_nodes / 4);

    // Start node has distance 0
    heap.push(State {
        cost: 0.0,
        node: start,
    });
    distances.insert(start, 0.0);

    while let Some(State { cost, node }) = heap.pop() {
        if node == target {
            return Some((reconstruct_path(&predecessors, start, target), cost));
        }

        // Stale entry, a shorter path to this node was already settled
        if distances.get(&node).is_some_and(|&best| cost > best) {
            continue;
        }

        for edge in graph.edges(node) {
            let next = edge.target();
            let next_cost = cost + edge.weight().weight;

            // Unvisited nodes are at infinite distance
            match distances.entry(next) {
                hashbrown::hash_map::Entry::Vacant(entry) => {
                    entry.insert(next_cost);
                }
                hashbrown::hash_map::Entry::Occupied(mut entry) => {
                    if next_cost >= *entry.get() {
                        continue;
                    }
                    *entry.get_mut() = next_cost;
                }
            }
            predecessors.insert(next, node);
            heap.push(State {
                cost: next_cost,
                node: next,
            });
        }
    }

    log::trace!(
        "Exhausted {} reachable nodes without finding the target",
        distances.len()
    );
    None
}

/// Follows predecessors backward from target to start
fn reconstruct_path(
    predecessors: &HashMap<NodeIndex, NodeIndex>,
    start: NodeIndex,
    target: NodeIndex,
) -> Vec<NodeIndex> {
    let mut node_path = vec![target];
    let mut current = target;
    while current != start {
        match predecessors.get(&current) {
            Some(&prev) => {
                node_path.push(prev);
                current = prev;
            }
            None => break,
        }
    }
    node_path.reverse(); // Now path is from start to target
    node_path
}
