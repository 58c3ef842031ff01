mod hops;

pub use hops::{full_path_of, total_cost_of, Hop, Hops};

use crate::graph::types::{Cost, Path};
use crate::graph::Graph;
use std::collections::BTreeSet;
use std::fmt::Debug;

/// State tracked during a single query
struct DijkstraState<N> {
    unvisited: BTreeSet<N>,
    hops: Hops<N>,
}

impl<N: Ord + Clone + Debug> DijkstraState<N> {
    fn new(graph: &Graph<N>, start: &N) -> Self {
        let mut unvisited: BTreeSet<N> = graph.nodes().cloned().collect();
        unvisited.remove(start);

        let mut hops = Hops::new();
        hops.insert(
            start.clone(),
            Hop {
                previous: start.clone(),
                cost: Cost::ZERO,
            },
        );

        Self { unvisited, hops }
    }

    /// Record a cheaper hop for every unvisited neighbor reachable through `current`
    fn relax_neighbors(&mut self, graph: &Graph<N>, current: &N) {
        let Some(current_cost) = total_cost_of(current, &self.hops) else {
            return;
        };
        let Some(neighbors) = graph.neighbors(current) else {
            return;
        };

        for (neighbor, &edge_cost) in neighbors {
            if !self.unvisited.contains(neighbor) {
                continue;
            }
            let Some(candidate) = current_cost.checked_add(edge_cost) else {
                continue;
            };

            let improves = total_cost_of(neighbor, &self.hops).is_none_or(|known| candidate < known);
            if improves {
                tracing::trace!(?current, ?neighbor, cost = candidate.value(), "relax");
                self.hops.insert(
                    neighbor.clone(),
                    Hop {
                        previous: current.clone(),
                        cost: edge_cost,
                    },
                );
            }
        }
    }

    /// Cheapest reached unvisited node; ties go to the smallest identifier.
    fn next_node(&self) -> Option<N> {
        let mut best: Option<(Cost, &N)> = None;

        // BTreeSet iterates in identifier order, so strict `<` keeps the
        // first (smallest) identifier among equal costs.
        for node in &self.unvisited {
            if let Some(cost) = total_cost_of(node, &self.hops) {
                if best.is_none_or(|(best_cost, _)| cost < best_cost) {
                    best = Some((cost, node));
                }
            }
        }

        best.map(|(_, node)| node.clone())
    }
}

/// Find the cheapest path from `start` to `destination`.
///
/// Returns `None` when either endpoint is unknown to the graph or when the
/// destination cannot be reached. A query from a known node to itself is the
/// zero-cost single-node path.
///
/// Nodes are finalized in nondecreasing cost order with an explicit
/// unvisited set. The search stops as soon as the destination becomes the
/// current node. The graph is never modified.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count()))]
pub fn shortest_path<N: Ord + Clone + Debug>(
    graph: &Graph<N>,
    start: &N,
    destination: &N,
) -> Option<Path<N>> {
    if !graph.contains(start) || !graph.contains(destination) {
        tracing::debug!("unknown_endpoint");
        return None;
    }
    if start == destination {
        return Some(Path::single(start.clone()));
    }

    let mut state = DijkstraState::new(graph, start);
    let mut current = start.clone();

    while !state.unvisited.is_empty() {
        state.relax_neighbors(graph, &current);

        // Nothing reachable is left: jump to the destination to end the search.
        current = state.next_node().unwrap_or_else(|| destination.clone());

        if current == *destination {
            let path = full_path_of(destination, &state.hops);
            match &path {
                Some(p) => tracing::debug!(cost = p.cost.value(), hops = p.hop_count(), "path_found"),
                None => tracing::debug!("unreachable"),
            }
            return path;
        }

        state.unvisited.remove(&current);
    }

    tracing::debug!("unreachable");
    None
}
