use crate::support::{pathfind, write_file};
use predicates::prelude::*;
use tempfile::tempdir;

// Solves cat -> dog and car -> cheat; the other built-in cases have no end word
const PARTIAL_WORDS: &str = "cat cot cog dog car char chat cheat";

// ============================================================================
// Verify command tests
// ============================================================================

#[test]
fn test_verify_reports_each_case() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", PARTIAL_WORDS);

    pathfind()
        .args(["verify", "--dict"])
        .arg(&dict)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("PASS cat -> dog: expected 4, got 4"))
        .stdout(predicate::str::contains("PASS car -> cheat: expected 4, got 4"))
        .stdout(predicate::str::contains("FAIL marty -> curls: expected 6, got 0"))
        .stdout(predicate::str::contains("2/6 cases passed"))
        .stderr(predicate::str::contains("4 of 6 verify cases failed"));
}

#[test]
fn test_verify_quiet_prints_summary_only() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", PARTIAL_WORDS);

    pathfind()
        .args(["--quiet", "verify", "--dict"])
        .arg(&dict)
        .assert()
        .code(1)
        .stdout("2/6 cases passed\n");
}

#[test]
fn test_verify_records() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", PARTIAL_WORDS);

    pathfind()
        .args(["--format", "records", "verify", "--dict"])
        .arg(&dict)
        .assert()
        .code(1)
        .stdout(predicate::str::starts_with(
            "H pathfind=1 records=1 mode=verify cases=6 passed=2\n",
        ))
        .stdout(predicate::str::contains(
            "C cat dog expected=4 actual=4 passed=true",
        ));
}

#[test]
fn test_verify_json() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", PARTIAL_WORDS);

    let output = pathfind()
        .args(["--format", "json", "verify", "--dict"])
        .arg(&dict)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let cases = json.as_array().unwrap();
    assert_eq!(cases.len(), 6);
    assert_eq!(cases[0]["start"], "cat");
    assert_eq!(cases[0]["passed"], true);
    assert_eq!(
        cases[0]["words"],
        serde_json::json!(["cat", "cot", "cog", "dog"])
    );
}
