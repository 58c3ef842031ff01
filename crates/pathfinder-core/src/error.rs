//! Error types and exit codes for pathfinder
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, unsupported formats)
//! - 3: Data error (missing or invalid graph file, unknown node)
//!
//! The shortest-path query itself never fails: an unknown endpoint or an
//! unreachable destination is reported as `None`. These errors belong to
//! the loading and command-line surfaces around the solver.

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing graph, invalid graph, unknown node (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur around graph loading and querying
#[derive(Error, Debug)]
pub enum PathfinderError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human, json, or records)")]
    UnknownFormat(String),

    #[error("--format may only be specified once")]
    DuplicateFormat,

    #[error("{0}")]
    UsageError(String),

    // Data errors (exit code 3)
    #[error("graph file not found: {path:?}")]
    GraphNotFound { path: PathBuf },

    #[error("invalid graph in {path:?}: {reason}")]
    InvalidGraph { path: PathBuf, reason: String },

    #[error("node not found: {id}")]
    NodeNotFound { id: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("unsupported {context}: {value} (supported: {supported})")]
    Unsupported {
        context: String,
        value: String,
        supported: String,
    },

    #[error("{0}")]
    Other(String),
}

impl PathfinderError {
    /// Create an error for a graph file that failed to parse or validate
    pub fn invalid_graph(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        PathfinderError::InvalidGraph {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        PathfinderError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an unsupported value
    pub fn unsupported(
        context: &str,
        value: impl std::fmt::Display,
        supported: impl std::fmt::Display,
    ) -> Self {
        PathfinderError::Unsupported {
            context: context.to_string(),
            value: value.to_string(),
            supported: supported.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            PathfinderError::UnknownFormat(_)
            | PathfinderError::DuplicateFormat
            | PathfinderError::UsageError(_)
            | PathfinderError::InvalidValue { .. }
            | PathfinderError::Unsupported { .. } => ExitCode::Usage,

            PathfinderError::GraphNotFound { .. }
            | PathfinderError::InvalidGraph { .. }
            | PathfinderError::NodeNotFound { .. } => ExitCode::Data,

            PathfinderError::Io(_)
            | PathfinderError::Json(_)
            | PathfinderError::Toml(_)
            | PathfinderError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            PathfinderError::UnknownFormat(_) => "unknown_format",
            PathfinderError::DuplicateFormat => "duplicate_format",
            PathfinderError::UsageError(_) => "usage_error",
            PathfinderError::GraphNotFound { .. } => "graph_not_found",
            PathfinderError::InvalidGraph { .. } => "invalid_graph",
            PathfinderError::NodeNotFound { .. } => "node_not_found",
            PathfinderError::Io(_) => "io_error",
            PathfinderError::Json(_) => "json_error",
            PathfinderError::Toml(_) => "toml_error",
            PathfinderError::InvalidValue { .. } => "invalid_value",
            PathfinderError::Unsupported { .. } => "unsupported",
            PathfinderError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for pathfinder operations
pub type Result<T> = std::result::Result<T, PathfinderError>;
