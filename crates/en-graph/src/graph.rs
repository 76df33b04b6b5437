//! Adjacency-set graph container.

use std::collections::{BTreeMap, BTreeSet};

/// Node identifier.
pub type NodeId = u32;

/// A simple undirected graph.
///
/// Adjacency is kept symmetric: `add_edge(u, v)` inserts both directions
/// and registers both endpoints. BTree storage gives deterministic
/// iteration order, which keeps downstream metrics reproducible.
///
/// Mutated only during construction (generators, edge-list loading);
/// every metric treats the graph as read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adj: BTreeMap<NodeId, BTreeSet<NodeId>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node with no edges. No-op if the node already exists.
    pub fn add_node(&mut self, n: NodeId) {
        self.adj.entry(n).or_default();
    }

    /// Add an undirected edge, registering both endpoints.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId) {
        self.adj.entry(u).or_default().insert(v);
        self.adj.entry(v).or_default().insert(u);
    }

    /// Remove an undirected edge if present. Endpoints stay registered.
    pub fn remove_edge(&mut self, u: NodeId, v: NodeId) {
        if let Some(set) = self.adj.get_mut(&u) {
            set.remove(&v);
        }
        if let Some(set) = self.adj.get_mut(&v) {
            set.remove(&u);
        }
    }

    /// Whether the edge (u, v) exists.
    pub fn has_edge(&self, u: NodeId, v: NodeId) -> bool {
        self.adj.get(&u).is_some_and(|set| set.contains(&v))
    }

    /// Whether the node is registered.
    pub fn contains_node(&self, n: NodeId) -> bool {
        self.adj.contains_key(&n)
    }

    /// All node ids in ascending order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adj.keys().copied()
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.adj.len()
    }

    /// All edges, each unordered pair reported once as (min, max).
    pub fn edges(&self) -> Vec<(NodeId, NodeId)> {
        let mut result = Vec::new();
        for (&u, neighbors) in &self.adj {
            for &v in neighbors.range(u..) {
                result.push((u, v));
            }
        }
        result
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adj
            .iter()
            .map(|(&u, neighbors)| neighbors.range(u..).count())
            .sum()
    }

    /// Degree of a node; 0 for unknown nodes.
    pub fn degree(&self, n: NodeId) -> usize {
        self.adj.get(&n).map_or(0, BTreeSet::len)
    }

    /// Neighbors of a node in ascending order; empty for unknown nodes.
    pub fn neighbors(&self, n: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.adj.get(&n).into_iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_is_symmetric() {
        let mut g = Graph::new();
        g.add_edge(1, 2);
        assert!(g.has_edge(1, 2));
        assert!(g.has_edge(2, 1));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.degree(1), 1);
        assert_eq!(g.degree(2), 1);
    }

    #[test]
    fn duplicate_edges_collapse() {
        let mut g = Graph::new();
        g.add_edge(1, 2);
        g.add_edge(2, 1);
        g.add_edge(1, 2);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.edges(), vec![(1, 2)]);
    }

    #[test]
    fn remove_edge_keeps_nodes() {
        let mut g = Graph::new();
        g.add_edge(1, 2);
        g.remove_edge(1, 2);
        assert!(!g.has_edge(1, 2));
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 0);
        assert_eq!(g.degree(1), 0);
    }

    #[test]
    fn isolated_nodes_and_unknown_nodes() {
        let mut g = Graph::new();
        g.add_node(5);
        g.add_node(5);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.degree(5), 0);
        assert_eq!(g.degree(99), 0);
        assert_eq!(g.neighbors(99).count(), 0);
        assert!(!g.contains_node(99));
    }

    #[test]
    fn edges_report_each_pair_once() {
        let mut g = Graph::new();
        g.add_edge(1, 2);
        g.add_edge(2, 3);
        g.add_edge(1, 3);
        assert_eq!(g.edges(), vec![(1, 2), (1, 3), (2, 3)]);
        assert_eq!(g.edge_count(), 3);
    }
}
