//! Nodes command

use crate::cli::OutputFormat;
use pathfinder_core::error::Result;

use super::dispatch::{CommandContext, LoadedGraph};
use super::helpers::{quoted, records_header};

/// Execute the nodes command
pub fn execute(ctx: &CommandContext, loaded: &LoadedGraph) -> Result<()> {
    let nodes: Vec<&String> = loaded.graph.nodes().collect();

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "count": nodes.len(),
                "nodes": nodes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if nodes.is_empty() && !ctx.cli.quiet {
                println!("No nodes found");
            }
            for node in &nodes {
                println!("{}", node);
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(loaded, "nodes", &[("count", nodes.len().to_string())])
            );
            for node in &nodes {
                println!("N {}", quoted(node));
            }
        }
    }

    Ok(())
}
