//! Graph documents
//!
//! A graph file may describe a graph in up to three ways, all optional:
//!
//! ```json
//! {
//!   "nodes":  { "A": { "B": 2 }, "H": {} },
//!   "edges":  [ { "source": "B", "destination": "C", "cost": 4, "bidirectional": false } ],
//!   "points": [ { "x": 0.0, "y": 0.0 }, { "x": 60.0, "y": 80.0 } ]
//! }
//! ```
//!
//! `nodes` is an adjacency snapshot used as-is. `edges` are folded in with
//! min-cost resolution. `points` are connected by range and keyed by index.
//! JSON, YAML and TOML are accepted, chosen by file extension.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::PathfinderConfig;
use crate::error::{PathfinderError, Result};
use crate::geometry::Point;
use crate::graph::{Adjacency, Cost, Edge, Graph, Neighbors};

/// On-disk encoding of a graph document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
    Toml,
}

impl DocumentFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();

        match ext.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            "toml" => Ok(DocumentFormat::Toml),
            other => Err(PathfinderError::unsupported(
                "graph format",
                if other.is_empty() { "(none)" } else { other },
                "json, yaml, yml, toml",
            )),
        }
    }
}

/// Edge as written in a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub source: String,
    pub destination: String,
    pub cost: u32,
    /// Falls back to `default_bidirectional` from the configuration
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bidirectional: Option<bool>,
}

impl EdgeSpec {
    pub fn to_edge(&self, default_bidirectional: bool) -> Edge {
        Edge {
            source: self.source.clone(),
            destination: self.destination.clone(),
            cost: Cost::new(self.cost),
            is_bidirectional: self.bidirectional.unwrap_or(default_bidirectional),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GraphDocument {
    #[serde(default)]
    pub nodes: BTreeMap<String, BTreeMap<String, u32>>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
    #[serde(default)]
    pub points: Vec<Point>,
}

impl GraphDocument {
    /// Read and parse a document, choosing the format by extension
    #[tracing::instrument(skip(path), fields(path = %path.display()))]
    pub fn load(path: &Path) -> Result<Self> {
        let format = DocumentFormat::from_path(path)?;

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PathfinderError::GraphNotFound {
                path: path.to_path_buf(),
            },
            _ => PathfinderError::Io(e),
        })?;

        let doc = Self::parse(&content, format)
            .map_err(|reason| PathfinderError::invalid_graph(path, reason))?;

        tracing::debug!(
            nodes = doc.nodes.len(),
            edges = doc.edges.len(),
            points = doc.points.len(),
            "document_loaded"
        );
        Ok(doc)
    }

    /// Parse document text. The error is the parser's message, or names the
    /// first point with a non-finite coordinate.
    pub fn parse(content: &str, format: DocumentFormat) -> std::result::Result<Self, String> {
        let doc: Self = match format {
            DocumentFormat::Json => serde_json::from_str(content).map_err(|e| e.to_string())?,
            DocumentFormat::Yaml => serde_yaml::from_str(content).map_err(|e| e.to_string())?,
            DocumentFormat::Toml => toml::from_str(content).map_err(|e| e.to_string())?,
        };

        if let Some(index) = doc.points.iter().position(|p| !p.is_finite()) {
            return Err(format!("point {} has a non-finite coordinate", index));
        }
        Ok(doc)
    }

    /// Build the graph: adjacency snapshot, then edges, then points
    pub fn to_graph(&self, config: &PathfinderConfig) -> Graph {
        let adjacency: Adjacency<String> = self
            .nodes
            .iter()
            .map(|(node, neighbors)| {
                let neighbors: Neighbors<String> = neighbors
                    .iter()
                    .map(|(neighbor, &cost)| (neighbor.clone(), Cost::new(cost)))
                    .collect();
                (node.clone(), neighbors)
            })
            .collect();

        let mut graph = Graph::from_adjacency(adjacency);
        graph.add_edges(
            self.edges
                .iter()
                .map(|spec| spec.to_edge(config.default_bidirectional)),
        );
        if !self.points.is_empty() {
            graph.add_points(&self.points, config.max_edge_distance);
        }
        graph
    }
}
