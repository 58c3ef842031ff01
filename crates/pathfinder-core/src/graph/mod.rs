//! Weighted graph storage and shortest-path queries
//!
//! - `store`: adjacency map with min-cost edge folding
//! - `types`: costs, edge requests and paths
//! - `algos`: Dijkstra point-to-point search

pub mod algos;
pub mod store;
pub mod types;

pub use algos::shortest_path;
pub use store::{Adjacency, Graph, Neighbors};
pub use types::{Cost, Edge, Path};
