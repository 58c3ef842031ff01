//! CLI argument parsing for pathfinder
//!
//! Global flags: --graph, --config, --format, --quiet, --verbose, --log-level, --log-json

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use pathfinder_core::format::OutputFormat;

/// Pathfinder - shortest paths over weighted graph files
#[derive(Parser, Debug)]
#[command(name = "pathfinder")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph document (.json, .yaml, .yml or .toml)
    #[arg(long, short, global = true, env = "PATHFINDER_GRAPH")]
    pub graph: Option<PathBuf>,

    /// Configuration file (defaults to ./pathfinder.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. warn, debug, pathfinder_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the cheapest path between two nodes
    Path {
        /// Start node
        from: String,

        /// Destination node
        to: String,
    },

    /// Show outgoing edges of a node, or of every node
    Show {
        /// Node to show (all nodes when omitted)
        node: Option<String>,
    },

    /// List known nodes
    Nodes,
}
