use crate::cli::support::{pathfinder, simple_graph, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_nodes_human_sorted() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .arg("nodes")
        .assert()
        .success()
        .stdout("A\nB\nC\nD\nE\nF\nG\nH\n");
}

#[test]
fn test_nodes_json() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    let output = pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["nodes", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["count"], 8);
    assert_eq!(json["nodes"][0], "A");
    assert_eq!(json["nodes"][7], "H");
}

#[test]
fn test_nodes_empty_graph() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "empty.json", "{}");

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .arg("nodes")
        .assert()
        .success()
        .stdout(predicate::str::contains("No nodes found"));
}

#[test]
fn test_nodes_records() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "records", "nodes"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H pathfinder=1 records=1"))
        .stdout(predicate::str::contains("count=8"))
        .stdout(predicate::str::contains("N \"H\""));
}
