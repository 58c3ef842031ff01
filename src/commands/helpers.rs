//! Helper functions shared across commands

use pathfinder_core::format::escape_quotes;

use super::dispatch::LoadedGraph;

/// Quote a node identifier for a records line
pub fn quoted(id: &str) -> String {
    format!("\"{}\"", escape_quotes(id))
}

/// Records header line shared by every command
pub fn records_header(loaded: &LoadedGraph, mode: &str, fields: &[(&str, String)]) -> String {
    let mut header = format!(
        "H pathfinder=1 records=1 graph={} mode={}",
        quoted(&loaded.path.display().to_string()),
        mode
    );
    for (key, value) in fields {
        header.push_str(&format!(" {}={}", key, value));
    }
    header
}
