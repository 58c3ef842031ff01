//! Command dispatch logic for pathfinder

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use crate::cli::Cli;
use pathfinder_core::error::Result;
use tracing::debug;

mod command;

pub use command::{CommandContext, LoadedGraph};
use command::{Command, NoCommand};

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let root = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    debug!(elapsed = ?start.elapsed(), "resolve_root");

    let ctx = CommandContext::new(cli, &root, start);

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
