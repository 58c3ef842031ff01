//! Path command

use serde::Serialize;

use crate::cli::OutputFormat;
use pathfinder_core::error::{PathfinderError, Result};
use pathfinder_core::geometry::{path_segments, Segment};
use pathfinder_core::graph::{Graph, Path};

use super::dispatch::{CommandContext, LoadedGraph};
use super::helpers::{quoted, records_header};

/// One traversed edge of a path
#[derive(Debug, Clone, Serialize)]
pub struct PathEdge {
    pub from: String,
    pub to: String,
    pub cost: u32,
}

/// Path query result
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub nodes: Vec<String>,
    pub edges: Vec<PathEdge>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost: Option<u32>,
    pub hops: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<Vec<Segment>>,
}

impl PathResult {
    fn new(
        from: &str,
        to: &str,
        path: Option<&Path>,
        graph: &Graph,
        segments: Option<Vec<Segment>>,
    ) -> Self {
        let (nodes, edges, cost, hops) = match path {
            Some(path) => {
                let edges = path
                    .nodes
                    .windows(2)
                    .map(|pair| PathEdge {
                        from: pair[0].clone(),
                        to: pair[1].clone(),
                        cost: graph
                            .cost(&pair[0], &pair[1])
                            .map(|c| c.value())
                            .unwrap_or_default(),
                    })
                    .collect();
                (
                    path.nodes.clone(),
                    edges,
                    Some(path.cost.value()),
                    path.hop_count(),
                )
            }
            None => (Vec::new(), Vec::new(), None, 0),
        };

        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            found: path.is_some(),
            nodes,
            edges,
            cost,
            hops,
            segments,
        }
    }
}

/// Execute the path command
pub fn execute(ctx: &CommandContext, loaded: &LoadedGraph, from: &str, to: &str) -> Result<()> {
    let graph = &loaded.graph;
    let from_id = from.to_string();
    let to_id = to.to_string();

    // The solver reports unknown endpoints and unreachable destinations the
    // same way; tell them apart here.
    for id in [&from_id, &to_id] {
        if !graph.contains(id) {
            return Err(PathfinderError::NodeNotFound { id: id.clone() });
        }
    }

    let path = graph.shortest_path(&from_id, &to_id);
    tracing::debug!(elapsed = ?ctx.start.elapsed(), found = path.is_some(), "shortest_path");

    let segments = match &path {
        Some(p) if !loaded.document.points.is_empty() => {
            path_segments(p, &loaded.document.points)
        }
        _ => None,
    };
    let result = PathResult::new(from, to, path.as_ref(), graph, segments);

    match ctx.cli.format {
        OutputFormat::Json => output_json(&result)?,
        OutputFormat::Human => output_human(ctx, &result),
        OutputFormat::Records => output_records(loaded, &result),
    }

    Ok(())
}

fn output_json(result: &PathResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn output_human(ctx: &CommandContext, result: &PathResult) {
    if !result.found {
        if !ctx.cli.quiet {
            println!("No path found from {} to {}", result.from, result.to);
        }
        return;
    }

    println!("{}", result.nodes.join(" -> "));
    let hop_word = if result.hops == 1 { "hop" } else { "hops" };
    println!(
        "Cost: {} ({} {})",
        result.cost.unwrap_or_default(),
        result.hops,
        hop_word
    );
}

fn output_records(loaded: &LoadedGraph, result: &PathResult) {
    let mut fields = vec![
        ("from", quoted(&result.from)),
        ("to", quoted(&result.to)),
        ("found", result.found.to_string()),
    ];
    if let Some(cost) = result.cost {
        fields.push(("cost", cost.to_string()));
        fields.push(("hops", result.hops.to_string()));
    }
    println!("{}", records_header(loaded, "path", &fields));

    for node in &result.nodes {
        println!("N {}", quoted(node));
    }
    for edge in &result.edges {
        println!("E {} {} cost={}", quoted(&edge.from), quoted(&edge.to), edge.cost);
    }
}
