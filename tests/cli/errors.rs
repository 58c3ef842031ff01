use crate::cli::support::{pathfinder, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_missing_graph_flag() {
    pathfinder()
        .arg("nodes")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no graph file given"));
}

#[test]
fn test_graph_file_not_found() {
    let dir = tempdir().unwrap();

    pathfinder()
        .arg("--graph")
        .arg(dir.path().join("missing.json"))
        .arg("nodes")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("graph file not found"));
}

#[test]
fn test_invalid_graph_json_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "bad.json",
        r#"{"edges": [{"source": "A", "destination": "B", "cost": -3}]}"#,
    );

    let output = pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "nodes"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "invalid_graph");
    assert_eq!(json["error"]["code"], 3);
}

#[test]
fn test_unsupported_extension() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "graph.csv", "A,B,1\n");

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .arg("nodes")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported graph format: csv"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    pathfinder()
        .args(["--quiet", "nodes"])
        .assert()
        .code(2)
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_unknown_format_json_envelope() {
    let output = pathfinder()
        .args(["--format", "json", "frobnicate"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_repeated_graph_flag_is_usage_error() {
    let output = pathfinder()
        .args(["--graph", "a.json", "--graph", "b.json", "--format", "json", "nodes"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
    assert!(json["error"]["message"]
        .as_str()
        .is_some_and(|m| m.contains("--graph")));
}

#[test]
fn test_repeated_format_flag_is_duplicate_format() {
    let output = pathfinder()
        .args(["--format", "json", "--format", "json", "nodes"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "duplicate_format");
}

#[test]
fn test_nan_point_is_invalid_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "points.toml",
        "[[points]]\nx = 0.0\ny = 0.0\n\n[[points]]\nx = nan\ny = 0.0\n\n[[points]]\nx = 5000.0\ny = 0.0\n",
    );

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["path", "0", "2"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("point 1 has a non-finite coordinate"));
}
