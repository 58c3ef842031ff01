use crate::cli::support::{pathfinder, simple_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_log_level_debug_shows_debug_messages() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["--log-level", "debug", "path", "A", "G"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args"))
        .stderr(predicate::str::contains("path_found"));
}

#[test]
fn test_default_level_hides_debug_messages() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["path", "A", "G"])
        .assert()
        .success()
        .stderr(predicate::str::contains("parse_args").not());
}

#[test]
fn test_verbose_shows_debug_messages() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["--verbose", "nodes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("document_loaded"));
}

#[test]
fn test_log_json_emits_json_lines() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    let output = pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["--log-level", "debug", "--log-json", "nodes"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    let first = stderr.lines().next().unwrap();
    let parsed: serde_json::Value = serde_json::from_str(first).unwrap();
    assert!(parsed.get("level").is_some());
}
