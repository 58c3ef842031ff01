//! Adjacency store for weighted, possibly-directed graphs

use crate::graph::types::{Cost, Edge, Path};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Outgoing edges of a single node: neighbor -> cost
pub type Neighbors<N> = BTreeMap<N, Cost>;

/// Full adjacency representation: node -> neighbor -> cost
pub type Adjacency<N> = BTreeMap<N, Neighbors<N>>;

/// Weighted graph keyed by opaque, ordered node identifiers.
///
/// The stored cost of every directed pair is the minimum of all costs ever
/// submitted for it. There is no removal. A node is known to the graph
/// only once it has an adjacency entry; queries involving unknown nodes
/// return `None`.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Graph<N: Ord = String> {
    nodes: Adjacency<N>,
}

impl<N: Ord> Default for Graph<N> {
    fn default() -> Self {
        Graph {
            nodes: BTreeMap::new(),
        }
    }
}

impl<N: Ord + fmt::Debug> fmt::Debug for Graph<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.nodes.iter()).finish()
    }
}

impl<N: Ord + Clone + fmt::Debug> Graph<N> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an adjacency snapshot, used as-is.
    ///
    /// The snapshot is trusted to already hold minimal costs. Nodes that only
    /// appear as neighbors are not registered.
    pub fn from_adjacency(nodes: Adjacency<N>) -> Self {
        Graph { nodes }
    }

    pub fn from_edges<I: IntoIterator<Item = Edge<N>>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.add_edges(edges);
        graph
    }

    /// Fold `edge` into the adjacency map.
    ///
    /// Keeps the cheaper cost when the directed pair already exists. A
    /// bidirectional edge also inserts its reverse.
    pub fn add_edge(&mut self, edge: Edge<N>) {
        let reverse = edge.is_bidirectional.then(|| edge.reversed());
        self.insert_directed(edge);
        if let Some(reverse) = reverse {
            self.insert_directed(reverse);
        }
    }

    /// Insert every edge in order
    pub fn add_edges<I: IntoIterator<Item = Edge<N>>>(&mut self, edges: I) {
        for edge in edges {
            self.add_edge(edge);
        }
    }

    fn insert_directed(&mut self, edge: Edge<N>) {
        let Edge {
            source,
            destination,
            cost,
            ..
        } = edge;

        tracing::trace!(?source, ?destination, cost = cost.value(), "insert_edge");

        if !self.nodes.contains_key(&destination) {
            self.nodes.insert(destination.clone(), BTreeMap::new());
        }

        self.nodes
            .entry(source)
            .or_default()
            .entry(destination)
            .and_modify(|existing| *existing = (*existing).min(cost))
            .or_insert(cost);
    }

    /// Register `node` with no outgoing edges. No-op if already known.
    pub fn add_node(&mut self, node: N) {
        self.nodes.entry(node).or_default();
    }

    /// Shortest path from `start` to `destination`, see
    /// [`shortest_path`](crate::graph::algos::dijkstra::shortest_path).
    pub fn shortest_path(&self, start: &N, destination: &N) -> Option<Path<N>> {
        crate::graph::algos::dijkstra::shortest_path(self, start, destination)
    }
}

impl<N: Ord> Graph<N> {
    pub fn contains(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// Stored cost of the directed pair `from -> to`
    pub fn cost(&self, from: &N, to: &N) -> Option<Cost> {
        self.nodes.get(from).and_then(|n| n.get(to)).copied()
    }

    pub fn neighbors(&self, node: &N) -> Option<&Neighbors<N>> {
        self.nodes.get(node)
    }

    /// Known nodes in identifier order
    pub fn nodes(&self) -> impl Iterator<Item = &N> {
        self.nodes.keys()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored directed pairs
    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn adjacency(&self) -> &Adjacency<N> {
        &self.nodes
    }
}

impl<N: Ord + Clone + fmt::Debug> Extend<Edge<N>> for Graph<N> {
    fn extend<I: IntoIterator<Item = Edge<N>>>(&mut self, edges: I) {
        self.add_edges(edges);
    }
}

impl<N: Ord + Clone + fmt::Debug> FromIterator<Edge<N>> for Graph<N> {
    fn from_iter<I: IntoIterator<Item = Edge<N>>>(edges: I) -> Self {
        Self::from_edges(edges)
    }
}
