use crate::cli::support::{pathfinder, simple_graph, write_graph};
use predicates::prelude::*;
use tempfile::tempdir;

#[test]
fn test_path_human() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["path", "A", "G"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> D -> E -> G"))
        .stdout(predicate::str::contains("Cost: 19 (4 hops)"));
}

#[test]
fn test_path_single_hop() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["path", "A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B"))
        .stdout(predicate::str::contains("Cost: 2 (1 hop)"));
}

#[test]
fn test_path_to_self() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["path", "H", "H"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost: 0 (0 hops)"));
}

#[test]
fn test_path_json() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    let output = pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "path", "A", "G"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(json["cost"], 19);
    assert_eq!(json["hops"], 4);
    assert_eq!(json["nodes"], serde_json::json!(["A", "B", "D", "E", "G"]));
    assert_eq!(json["edges"][0]["from"], "A");
    assert_eq!(json["edges"][0]["to"], "B");
    assert_eq!(json["edges"][0]["cost"], 2);
    assert!(json.get("segments").is_none());
}

#[test]
fn test_path_unreachable() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["path", "A", "H"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from A to H"));
}

#[test]
fn test_path_unreachable_json() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    let output = pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "path", "A", "H"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], false);
    assert!(json.get("cost").is_none());
    assert_eq!(json["nodes"], serde_json::json!([]));
}

#[test]
fn test_path_unknown_node() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["path", "0", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: 0"));
}

#[test]
fn test_path_records() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "records", "path", "A", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=path"))
        .stdout(predicate::str::contains("found=true cost=2 hops=1"))
        .stdout(predicate::str::contains("N \"A\""))
        .stdout(predicate::str::contains("E \"A\" \"B\" cost=2"));
}

#[test]
fn test_path_over_points_json_has_segments() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "points.yaml",
        "points:\n  - { x: 0.0, y: 0.0 }\n  - { x: 90.0, y: 0.0 }\n  - { x: 180.0, y: 0.0 }\n",
    );

    let output = pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["--format", "json", "path", "0", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["nodes"], serde_json::json!(["0", "1", "2"]));
    assert_eq!(json["cost"], 180);
    assert_eq!(json["segments"].as_array().map(Vec::len), Some(2));
    assert_eq!(json["segments"][1]["to"]["x"], 180.0);
}

#[test]
fn test_config_max_edge_distance() {
    let dir = tempdir().unwrap();
    let graph = write_graph(
        dir.path(),
        "points.toml",
        "[[points]]\nx = 0.0\ny = 0.0\n\n[[points]]\nx = 150.0\ny = 0.0\n",
    );

    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .args(["path", "0", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found"));

    let config = write_graph(dir.path(), "wide.toml", "max_edge_distance = 200.0\n");
    pathfinder()
        .arg("--graph")
        .arg(&graph)
        .arg("--config")
        .arg(&config)
        .args(["path", "0", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cost: 150 (1 hop)"));
}

#[test]
fn test_config_discovered_in_working_directory() {
    let dir = tempdir().unwrap();
    write_graph(
        dir.path(),
        "graph.json",
        r#"{"edges": [{"source": "A", "destination": "B", "cost": 4}]}"#,
    );
    write_graph(dir.path(), "pathfinder.toml", "default_bidirectional = false\n");

    pathfinder()
        .current_dir(dir.path())
        .args(["--graph", "graph.json", "path", "B", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from B to A"));
}

#[test]
fn test_graph_from_environment() {
    let dir = tempdir().unwrap();
    let graph = simple_graph(dir.path());

    pathfinder()
        .env("PATHFINDER_GRAPH", &graph)
        .args(["path", "G", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("G -> E -> D -> B -> A"));
}
