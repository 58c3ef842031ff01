//! Hop-chain bookkeeping for cost and path reconstruction

use crate::graph::types::{Cost, Path};
use std::collections::BTreeMap;

/// Predecessor of a reached node and the cost of the edge used to reach it.
///
/// The start node's hop points at itself with zero cost and terminates every
/// chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop<N> {
    pub previous: N,
    pub cost: Cost,
}

pub type Hops<N> = BTreeMap<N, Hop<N>>;

/// Total cost from the start to `node`, walking the hop chain back.
///
/// `None` if `node` is unreached, if the chain does not end at a
/// self-referential hop, or if the sum would overflow.
pub fn total_cost_of<N: Ord>(node: &N, hops: &Hops<N>) -> Option<Cost> {
    let mut total = Cost::ZERO;
    let mut current = node;

    // A well-formed chain visits each recorded hop at most once.
    for _ in 0..=hops.len() {
        let hop = hops.get(current)?;
        if hop.previous == *current {
            return Some(total);
        }
        total = total.checked_add(hop.cost)?;
        current = &hop.previous;
    }

    None
}

/// Materialise the path from the start to `node` from the hop chain.
pub fn full_path_of<N: Ord + Clone>(node: &N, hops: &Hops<N>) -> Option<Path<N>> {
    let mut chain: Vec<(&N, Cost)> = Vec::new();
    let mut current = node;

    for _ in 0..=hops.len() {
        let hop = hops.get(current)?;
        if hop.previous == *current {
            let path = chain
                .iter()
                .rev()
                .fold(Path::single(current.clone()), |path, (next, cost)| {
                    path.then((*next).clone(), *cost)
                });
            return Some(path);
        }
        chain.push((current, hop.cost));
        current = &hop.previous;
    }

    None
}
