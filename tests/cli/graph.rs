use crate::support::{pathfind, write_file, SAMPLE_GRAPH};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Graph command tests
// ============================================================================

#[test]
fn test_graph_all_destinations() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", SAMPLE_GRAPH);

    pathfind()
        .arg("graph")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("To vertex 0: 0 Total cost is 0"))
        .stdout(predicate::str::contains("To vertex 3: 0 1 2 3 Total cost is 6"));
}

#[test]
fn test_graph_single_destination() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", SAMPLE_GRAPH);

    pathfind()
        .arg("graph")
        .arg(&graph)
        .args(["--to", "3"])
        .assert()
        .success()
        .stdout("0 1 2 3 \nTotal cost is 6\n");
}

#[test]
fn test_graph_other_source() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", SAMPLE_GRAPH);

    pathfind()
        .arg("graph")
        .arg(&graph)
        .args(["--source", "1", "--to", "3"])
        .assert()
        .success()
        .stdout("1 2 3 \nTotal cost is 5\n");
}

#[test]
fn test_graph_unreachable_destination() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "3\n0 1 2\n");

    pathfind()
        .arg("graph")
        .arg(&graph)
        .args(["--to", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path exists from 0 to 2"));

    pathfind()
        .arg("graph")
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("To vertex 2: No path exists"));
}

#[test]
fn test_graph_json() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "3\n0 1 2\n");

    let output = pathfind()
        .args(["--format", "json", "graph"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        json["shortest_paths"]["distances"],
        serde_json::json!([0, 2, null])
    );
    assert_eq!(
        json["shortest_paths"]["predecessors"],
        serde_json::json!([null, 0, null])
    );
    assert_eq!(json["paths"][1]["vertices"], serde_json::json!([0, 1]));
    assert_eq!(json["paths"][2]["found"], false);
}

#[test]
fn test_graph_json_single_destination() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", SAMPLE_GRAPH);

    let output = pathfind()
        .args(["--format", "json", "graph"])
        .arg(&graph)
        .args(["--to", "3"])
        .output()
        .unwrap();

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["vertices"], serde_json::json!([0, 1, 2, 3]));
    assert_eq!(json["total_cost"], 6);
}

#[test]
fn test_graph_records() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "3\n0 1 2\n");

    pathfind()
        .args(["--format", "records", "graph"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(
            "H pathfind=1 records=1 mode=graph source=0 vertices=3\n\
             V 0 dist=0 pred=-1\n\
             V 1 dist=2 pred=0\n\
             V 2 dist=inf pred=-1\n",
        );
}

#[test]
fn test_graph_source_out_of_range() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", SAMPLE_GRAPH);

    pathfind()
        .arg("graph")
        .arg(&graph)
        .args(["--source", "9"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_graph_destination_out_of_range_json() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", SAMPLE_GRAPH);

    pathfind()
        .args(["--format", "json", "graph"])
        .arg(&graph)
        .args(["--to", "4"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"vertex_out_of_range\""));
}

#[test]
fn test_graph_malformed_file() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "3\n0 1\n");

    pathfind()
        .arg("graph")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_graph_oversized_vertex_count() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "18446744073709551615
0 1 1
");

    pathfind()
        .arg("graph")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("exceeds the limit"));
}

#[test]
fn test_graph_negative_weight() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", "2\n0 1 -3\n");

    pathfind()
        .arg("graph")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("negative weight"));
}

#[test]
fn test_graph_missing_file() {
    let dir = tempdir().unwrap();

    pathfind()
        .arg("graph")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read graph file"));
}
