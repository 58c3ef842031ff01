//! Pathfinder Core Library
//!
//! Weighted graph store and Dijkstra shortest-path queries over opaque,
//! ordered node identifiers, plus the loading surfaces around them.
//!
//! ```
//! use pathfinder_core::graph::{Cost, Edge, Graph};
//!
//! let graph = Graph::from_edges([
//!     Edge::bidirectional("A".to_string(), "B".to_string(), 2),
//!     Edge::bidirectional("B".to_string(), "C".to_string(), 3),
//! ]);
//! let path = graph.shortest_path(&"A".to_string(), &"C".to_string()).unwrap();
//! assert_eq!(path.nodes, ["A", "B", "C"]);
//! assert_eq!(path.cost, Cost::new(5));
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod format;
pub mod geometry;
pub mod graph;
pub mod logging;
