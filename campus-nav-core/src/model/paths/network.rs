//! Walkable path network

use hashbrown::HashMap;
use petgraph::graph::{DiGraph, EdgeReference, NodeIndex};

use super::components::{NodeKey, PathEdge, PathNode};
use crate::{GeoPoint, Meters, distance};

/// Undirected path network stored as a directed graph with one edge per
/// direction. Nodes live in the `petgraph` arena and are looked up by
/// their coordinate key through `index`.
#[derive(Debug, Clone, Default)]
pub struct PathGraph {
    pub(crate) graph: DiGraph<PathNode, PathEdge>,
    pub(crate) index: HashMap<NodeKey, NodeIndex>,
}

impl PathGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the node for `point`'s key, inserting it if absent
    pub(crate) fn get_or_insert_node(&mut self, point: GeoPoint) -> NodeIndex {
        let key = NodeKey::from_point(point);
        *self
            .index
            .entry(key)
            .or_insert_with(|| self.graph.add_node(PathNode { key, point }))
    }

    /// Adds the segment `a`-`b` in both directions.
    ///
    /// Zero-length segments (both ends on the same key) and segments already
    /// present in the graph are skipped.
    pub(crate) fn add_segment(&mut self, a: GeoPoint, b: GeoPoint) {
        let from = self.get_or_insert_node(a);
        let to = self.get_or_insert_node(b);
        if from == to {
            log::trace!("Skipping zero-length segment at {}", self.graph[from].key);
            return;
        }
        if self.graph.find_edge(from, to).is_some() {
            return;
        }

        let (from_key, to_key) = (self.graph[from].key, self.graph[to].key);
        let weight = distance(self.graph[from].point, self.graph[to].point);

        self.graph.add_edge(
            from,
            to,
            PathEdge {
                from: from_key,
                to: to_key,
                weight,
            },
        );
        self.graph.add_edge(
            to,
            from,
            PathEdge {
                from: to_key,
                to: from_key,
                weight,
            },
        );
    }

    /// Linear scan for the node closest to `point`.
    ///
    /// Returns the node and its distance in metres, or `None` for an empty
    /// graph. On ties the first node in insertion order wins.
    pub fn nearest_node(&self, point: &GeoPoint) -> Option<(NodeIndex, Meters)> {
        self.graph
            .node_indices()
            .map(|idx| (idx, distance(self.graph[idx].point, *point)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    pub fn node(&self, idx: NodeIndex) -> Option<&PathNode> {
        self.graph.node_weight(idx)
    }

    pub fn node_by_key(&self, key: &NodeKey) -> Option<&PathNode> {
        self.index.get(key).map(|&idx| &self.graph[idx])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PathNode> {
        self.graph.node_weights()
    }

    pub fn node_keys(&self) -> impl Iterator<Item = NodeKey> + '_ {
        self.graph.node_weights().map(|node| node.key)
    }

    /// Outgoing edges of `node`
    pub fn edges(&self, node: NodeIndex) -> impl Iterator<Item = EdgeReference<'_, PathEdge>> {
        self.graph.edges(node)
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of directed edges, i.e. twice the number of segments
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }
}
