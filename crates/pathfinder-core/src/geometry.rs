//! Planar points and point-set graphs
//!
//! A point set becomes a graph whose node identifiers are the point indices
//! (`"0"`, `"1"`, ...) and whose edges connect every pair of points no
//! further apart than a maximum range. Edge cost is the Euclidean distance
//! rounded to the nearest integer.

use crate::graph::{Edge, Graph, Path};
use serde::{Deserialize, Serialize};

/// Default maximum distance for an edge between two points
pub const DEFAULT_MAX_EDGE_DISTANCE: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn distance_squared(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn distance(&self, other: &Point) -> f64 {
        self.distance_squared(other).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A straight line between two consecutive points of a path
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Bidirectional edges between every pair of points within `max_distance`.
///
/// Pairs further apart, or at a distance that is not a number, are dropped.
pub fn edges_within_range(points: &[Point], max_distance: f64) -> Vec<Edge> {
    let mut edges = Vec::new();

    for (i, a) in points.iter().enumerate() {
        for (j, b) in points.iter().enumerate().skip(i + 1) {
            let distance = a.distance(b);
            if distance.is_nan() || distance > max_distance {
                continue;
            }
            // f64 -> u32 casts saturate
            let cost = distance.round() as u32;
            edges.push(Edge::bidirectional(i.to_string(), j.to_string(), cost));
        }
    }

    edges
}

impl Graph {
    /// Graph over `points` keyed by point index.
    ///
    /// Every point is a known node, including points with no neighbor in
    /// range.
    #[tracing::instrument(skip(points), fields(points = points.len()))]
    pub fn from_points(points: &[Point], max_distance: f64) -> Self {
        let mut graph = Graph::new();
        graph.add_points(points, max_distance);
        graph
    }

    /// Register `points` as nodes and add the edges within range
    pub fn add_points(&mut self, points: &[Point], max_distance: f64) {
        for i in 0..points.len() {
            self.add_node(i.to_string());
        }
        let edges = edges_within_range(points, max_distance);
        tracing::debug!(edges = edges.len(), "point_edges");
        self.add_edges(edges);
    }
}

/// Line segments tracing `path` over `points`.
///
/// `None` if a node identifier is not an index into `points`.
pub fn path_segments(path: &Path, points: &[Point]) -> Option<Vec<Segment>> {
    let coords = path
        .nodes
        .iter()
        .map(|id| id.parse::<usize>().ok().and_then(|i| points.get(i).copied()))
        .collect::<Option<Vec<Point>>>()?;

    Some(
        coords
            .windows(2)
            .map(|pair| Segment {
                from: pair[0],
                to: pair[1],
            })
            .collect(),
    )
}
