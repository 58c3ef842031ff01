use serde::{Deserialize, Serialize};
use std::fmt;

/// Non-negative integral cost of traversing an edge or a path.
///
/// Addition saturates at [`Cost::INFINITE`], so adding any finite cost to an
/// unreachable total stays unreachable instead of wrapping.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Cost(u32);

impl Cost {
    pub const ZERO: Cost = Cost(0);

    /// Sentinel for "unreachable"
    pub const INFINITE: Cost = Cost(u32::MAX);

    pub const fn new(cost: u32) -> Self {
        Cost(cost)
    }

    pub const fn value(&self) -> u32 {
        self.0
    }

    pub const fn is_infinite(&self) -> bool {
        self.0 == u32::MAX
    }

    /// Checked addition; `None` if the sum would reach or pass the sentinel.
    pub fn checked_add(self, other: Cost) -> Option<Cost> {
        match self.0.checked_add(other.0) {
            Some(sum) if sum != u32::MAX => Some(Cost(sum)),
            _ => None,
        }
    }
}

impl std::ops::Add for Cost {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Cost(self.0.saturating_add(other.0))
    }
}

impl From<u32> for Cost {
    fn from(cost: u32) -> Self {
        Cost(cost)
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_infinite() {
            write!(f, "inf")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A weighted connection request between two nodes.
///
/// Edges are not stored as such: [`Graph::add_edge`](super::Graph::add_edge)
/// folds them into the adjacency map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<N = String> {
    pub source: N,
    pub destination: N,
    pub cost: Cost,
    pub is_bidirectional: bool,
}

impl<N: Clone> Edge<N> {
    /// Directed edge from `source` to `destination`
    pub fn new(source: N, destination: N, cost: u32) -> Self {
        Edge {
            source,
            destination,
            cost: Cost::new(cost),
            is_bidirectional: false,
        }
    }

    /// Edge inserted in both directions with the same cost
    pub fn bidirectional(source: N, destination: N, cost: u32) -> Self {
        Edge {
            is_bidirectional: true,
            ..Edge::new(source, destination, cost)
        }
    }

    /// The reverse-direction counterpart. Never bidirectional, so inserting it
    /// does not reverse again.
    pub fn reversed(&self) -> Self {
        Edge {
            source: self.destination.clone(),
            destination: self.source.clone(),
            cost: self.cost,
            is_bidirectional: false,
        }
    }
}

/// A walk from the first to the last node, with the summed edge cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path<N = String> {
    pub nodes: Vec<N>,
    pub cost: Cost,
}

impl<N> Path<N> {
    /// Zero-cost path consisting of a single node
    pub fn single(node: N) -> Self {
        Path {
            nodes: vec![node],
            cost: Cost::ZERO,
        }
    }

    /// Extend the path by one hop to `node` over an edge of `cost`
    pub fn then(mut self, node: N, cost: Cost) -> Self {
        self.nodes.push(node);
        self.cost = self.cost + cost;
        self
    }

    pub fn start(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn end(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Number of edges traversed
    pub fn hop_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}
