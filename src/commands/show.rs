//! Show command

use std::collections::BTreeMap;

use crate::cli::OutputFormat;
use pathfinder_core::error::{PathfinderError, Result};
use pathfinder_core::graph::Neighbors;

use super::dispatch::{CommandContext, LoadedGraph};
use super::helpers::{quoted, records_header};

/// Execute the show command
pub fn execute(ctx: &CommandContext, loaded: &LoadedGraph, node: Option<&str>) -> Result<()> {
    let graph = &loaded.graph;

    let selected: BTreeMap<&String, &Neighbors<String>> = match node {
        Some(id) => {
            let id = id.to_string();
            match graph.adjacency().get_key_value(&id) {
                Some(entry) => BTreeMap::from([entry]),
                None => return Err(PathfinderError::NodeNotFound { id }),
            }
        }
        None => graph.adjacency().iter().collect(),
    };

    match ctx.cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&selected)?);
        }
        OutputFormat::Human => output_human(ctx, &selected),
        OutputFormat::Records => output_records(loaded, &selected),
    }

    Ok(())
}

fn output_human(ctx: &CommandContext, selected: &BTreeMap<&String, &Neighbors<String>>) {
    if selected.is_empty() {
        if !ctx.cli.quiet {
            println!("Graph is empty");
        }
        return;
    }

    for (node, neighbors) in selected {
        println!("{}", node);
        if neighbors.is_empty() {
            println!("  (no outgoing edges)");
        }
        for (neighbor, cost) in neighbors.iter() {
            println!("  -> {} ({})", neighbor, cost);
        }
    }
}

fn output_records(loaded: &LoadedGraph, selected: &BTreeMap<&String, &Neighbors<String>>) {
    let edge_count: usize = selected.values().map(|n| n.len()).sum();
    println!(
        "{}",
        records_header(
            loaded,
            "show",
            &[
                ("nodes", selected.len().to_string()),
                ("edges", edge_count.to_string()),
            ],
        )
    );

    for (node, neighbors) in selected {
        println!("N {} out={}", quoted(node), neighbors.len());
        for (neighbor, cost) in neighbors.iter() {
            println!("E {} {} cost={}", quoted(node), quoted(neighbor), cost);
        }
    }
}
