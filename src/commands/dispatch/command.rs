//! Command trait and context for dispatching commands

use std::path::{Path, PathBuf};
use std::time::Instant;

use crate::cli::{Cli, Commands};
use crate::commands;
use pathfinder_core::bail_usage;
use pathfinder_core::config::PathfinderConfig;
use pathfinder_core::document::GraphDocument;
use pathfinder_core::error::Result;
use pathfinder_core::graph::Graph;
use pathfinder_core::trace_time;

/// A graph document together with the graph built from it
pub struct LoadedGraph {
    pub path: PathBuf,
    pub document: GraphDocument,
    pub graph: Graph,
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub root: &'a Path,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, root: &'a Path, start: Instant) -> Self {
        Self { cli, root, start }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }

    /// `--config` if given, otherwise `pathfinder.toml` in the working directory
    pub fn load_config(&self) -> Result<PathfinderConfig> {
        match &self.cli.config {
            Some(path) => PathfinderConfig::load(&self.resolve(path)),
            None => PathfinderConfig::discover(self.root),
        }
    }

    /// Load the `--graph` document and build its graph
    pub fn load_graph(&self) -> Result<LoadedGraph> {
        let Some(graph_path) = &self.cli.graph else {
            bail_usage!("no graph file given (use --graph <FILE> or PATHFINDER_GRAPH)");
        };

        let config = self.load_config()?;
        let path = self.resolve(graph_path);
        let document = GraphDocument::load(&path)?;
        let graph = document.to_graph(&config);

        trace_time!(
            self.start,
            "load_graph",
            nodes = graph.node_count(),
            edges = graph.edge_count()
        );

        Ok(LoadedGraph {
            path: graph_path.clone(),
            document,
            graph,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        let loaded = ctx.load_graph()?;

        let result = match self {
            Commands::Path { from, to } => commands::path::execute(ctx, &loaded, from, to),
            Commands::Show { node } => commands::show::execute(ctx, &loaded, node.as_deref()),
            Commands::Nodes => commands::nodes::execute(ctx, &loaded),
        };

        tracing::debug!(elapsed = ?ctx.start.elapsed(), "execute_command");
        result
    }
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("pathfinder {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Shortest paths over weighted graph files.");
        println!();
        println!("Run `pathfinder --help` for usage information.");
        Ok(())
    }
}
