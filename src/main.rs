//! Pathfinder - shortest paths over weighted graph files
//!
//! Loads a graph from a JSON, YAML or TOML document and answers
//! point-to-point shortest-path queries.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

use cli::{Cli, OutputFormat};
use pathfinder_core::error::{ExitCode as PathfinderExitCode, PathfinderError};
use pathfinder_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // clap fails before `Cli.format` exists; a JSON request in raw argv
        // still gets a JSON error envelope.
        Err(err) if argv_format_json => match usage_error(&err) {
            Some(error) => {
                eprintln!("{}", error.to_json());
                return ExitCode::from(error.exit_code() as u8);
            }
            None => err.exit(),
        },
        Err(err) => err.exit(),
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    let result = commands::dispatch::run(&cli, start);

    match result {
        Ok(()) => ExitCode::from(PathfinderExitCode::Success as u8),
        Err(e) => {
            let exit_code = e.exit_code();

            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else if !cli.quiet {
                eprintln!("error: {}", e);
            }

            ExitCode::from(exit_code as u8)
        }
    }
}

fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}

/// Map a clap failure to a pathfinder error; `None` for help and version output
fn usage_error(err: &clap::Error) -> Option<PathfinderError> {
    let error = match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => return None,
        ErrorKind::ArgumentConflict if names_format_flag(err) => PathfinderError::DuplicateFormat,
        ErrorKind::ValueValidation
        | ErrorKind::InvalidValue
        | ErrorKind::InvalidSubcommand
        | ErrorKind::UnknownArgument
        | ErrorKind::MissingRequiredArgument
        | ErrorKind::ArgumentConflict => PathfinderError::UsageError(err.to_string()),
        _ => PathfinderError::Other(err.to_string()),
    };
    Some(error)
}

/// Whether the argument clap rejected is `--format`
fn names_format_flag(err: &clap::Error) -> bool {
    matches!(
        err.get(ContextKind::InvalidArg),
        Some(ContextValue::String(arg)) if arg.starts_with("--format")
    )
}
