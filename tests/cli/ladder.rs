use crate::support::{pathfind, write_file, SAMPLE_WORDS};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Ladder command tests
// ============================================================================

#[test]
fn test_ladder_found() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", SAMPLE_WORDS);

    pathfind()
        .args(["ladder", "cold", "wolf", "--dict"])
        .arg(&dict)
        .assert()
        .success()
        .stdout("Word ladder found: cold gold golf wolf \n");
}

#[test]
fn test_ladder_case_insensitive() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", SAMPLE_WORDS);

    pathfind()
        .args(["ladder", "COLD", "Wolf", "--dict"])
        .arg(&dict)
        .assert()
        .success()
        .stdout("Word ladder found: cold gold golf wolf \n");
}

#[test]
fn test_ladder_default_dictionary_in_working_dir() {
    let dir = tempdir().unwrap();
    write_file(dir.path(), "words.txt", SAMPLE_WORDS);

    pathfind()
        .current_dir(dir.path())
        .args(["ladder", "cold", "golf"])
        .assert()
        .success()
        .stdout("Word ladder found: cold gold golf \n");
}

#[test]
fn test_ladder_end_not_in_dictionary() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", SAMPLE_WORDS);

    pathfind()
        .args(["ladder", "cold", "bold", "--dict"])
        .arg(&dict)
        .assert()
        .success()
        .stdout(
            "Cannot create word ladder from 'cold' to 'bold': End word not in dictionary\n",
        );
}

#[test]
fn test_ladder_same_word() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", SAMPLE_WORDS);

    pathfind()
        .args(["ladder", "cold", "COLD", "--dict"])
        .arg(&dict)
        .assert()
        .success()
        .stdout(predicate::str::contains("Start and end words are the same"));
}

#[test]
fn test_ladder_none_exists() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", SAMPLE_WORDS);

    pathfind()
        .args(["ladder", "cold", "warm", "--dict"])
        .arg(&dict)
        .assert()
        .success()
        .stdout(
            "Cannot create word ladder from 'cold' to 'warm': No word ladder exists\n\
             No word ladder found.\n",
        );
}

#[test]
fn test_ladder_json() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", SAMPLE_WORDS);

    let output = pathfind()
        .args(["--format", "json", "ladder", "cold", "wolf", "--dict"])
        .arg(&dict)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], true);
    assert_eq!(
        json["words"],
        serde_json::json!(["cold", "gold", "golf", "wolf"])
    );
}

#[test]
fn test_ladder_json_rejection() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", SAMPLE_WORDS);

    let output = pathfind()
        .args(["--format", "json", "ladder", "cold", "bold", "--dict"])
        .arg(&dict)
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["found"], false);
    assert_eq!(json["rejection"]["reason"], "end_not_in_dictionary");
    assert_eq!(json["rejection"]["end"], "bold");
}

#[test]
fn test_ladder_records() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", SAMPLE_WORDS);

    pathfind()
        .args(["--format", "records", "ladder", "cold", "golf", "--dict"])
        .arg(&dict)
        .assert()
        .success()
        .stdout(
            "H pathfind=1 records=1 mode=ladder start=cold end=golf found=true length=3\n\
             W 0 cold\n\
             W 1 gold\n\
             W 2 golf\n",
        );
}

#[test]
fn test_ladder_records_rejection() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", SAMPLE_WORDS);

    pathfind()
        .args(["--format", "records", "ladder", "cold", "warm", "--dict"])
        .arg(&dict)
        .assert()
        .success()
        .stdout(predicate::str::contains("found=false length=0 reason=no_ladder"));
}

#[test]
fn test_ladder_missing_dictionary() {
    let dir = tempdir().unwrap();

    pathfind()
        .current_dir(dir.path())
        .args(["ladder", "cold", "wolf"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read dictionary"));
}

#[test]
fn test_ladder_empty_word_is_usage_error() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", SAMPLE_WORDS);

    pathfind()
        .args(["ladder", "", "wolf", "--dict"])
        .arg(&dict)
        .assert()
        .code(2);
}

#[test]
fn test_ladder_word_with_space_is_invalid() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "dict.txt", SAMPLE_WORDS);

    pathfind()
        .args(["ladder", "co ld", "wolf", "--dict"])
        .arg(&dict)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("contains whitespace"));
}
