use crate::support::{pathfind, run_and_get_stdout};
use predicates::prelude::*;

// ============================================================================
// Distance command tests
// ============================================================================

#[test]
fn test_distance_human() {
    pathfind()
        .args(["distance", "kitten", "sitting"])
        .assert()
        .success()
        .stdout("Edit distance is 3\nAdjacent: no\n");
}

#[test]
fn test_distance_case_insensitive() {
    pathfind()
        .args(["distance", "BOOK", "book"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edit distance is 0"))
        .stdout(predicate::str::contains("Adjacent: yes"));
}

#[test]
fn test_distance_within() {
    pathfind()
        .args(["distance", "fish", "wish", "--within", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Within 1: yes"));

    pathfind()
        .args(["distance", "ship", "fish", "--within", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Within 1: no"));
}

#[test]
fn test_distance_json() {
    let stdout = run_and_get_stdout(&["--format", "json", "distance", "cold", "gold", "-w", "0"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["distance"], 1);
    assert_eq!(json["adjacent"], true);
    assert_eq!(json["max_distance"], 0);
    assert_eq!(json["within"], false);
}

#[test]
fn test_distance_json_omits_within_when_not_asked() {
    let stdout = run_and_get_stdout(&["--format", "json", "distance", "cold", "gold"]);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert!(json.get("within").is_none());
}

#[test]
fn test_distance_records() {
    pathfind()
        .args(["--format", "records", "distance", "star", "stars", "--within", "1"])
        .assert()
        .success()
        .stdout(
            "H pathfind=1 records=1 mode=distance a=star b=stars distance=1 adjacent=true max=1 within=true\n",
        );
}

#[test]
fn test_distance_empty_word() {
    pathfind()
        .args(["distance", "", "sun"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Edit distance is 3"));
}
