//! Graph algorithm implementations
//!
//! - `dijkstra`: weighted point-to-point shortest path

pub mod dijkstra;

pub use dijkstra::shortest_path;
