use crate::support::{pathfind, write_file, SAMPLE_GRAPH, SAMPLE_WORDS};
use predicates::prelude::*;
use tempfile::tempdir;

// ============================================================================
// Config file tests
// ============================================================================

#[test]
fn test_config_flag_sets_defaults() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "my-words.txt", SAMPLE_WORDS);
    let graph = write_file(dir.path(), "graph.txt", SAMPLE_GRAPH);
    let config = write_file(
        dir.path(),
        "pathfind.toml",
        &format!(
            "[graph]\nsource = 1\n\n[ladder]\ndictionary = \"{}\"\n",
            dict.display()
        ),
    );

    pathfind()
        .arg("--config")
        .arg(&config)
        .args(["ladder", "cold", "wolf"])
        .assert()
        .success()
        .stdout("Word ladder found: cold gold golf wolf \n");

    pathfind()
        .arg("--config")
        .arg(&config)
        .arg("graph")
        .arg(&graph)
        .args(["--to", "3"])
        .assert()
        .success()
        .stdout("1 2 3 \nTotal cost is 5\n");
}

#[test]
fn test_flags_override_config() {
    let dir = tempdir().unwrap();
    let graph = write_file(dir.path(), "graph.txt", SAMPLE_GRAPH);
    let config = write_file(dir.path(), "pathfind.toml", "[graph]\nsource = 1\n");

    pathfind()
        .arg("--config")
        .arg(&config)
        .arg("graph")
        .arg(&graph)
        .args(["--source", "0", "--to", "3"])
        .assert()
        .success()
        .stdout("0 1 2 3 \nTotal cost is 6\n");
}

#[test]
fn test_config_dir_env_var() {
    let dir = tempdir().unwrap();
    let dict = write_file(dir.path(), "my-words.txt", SAMPLE_WORDS);
    write_file(
        dir.path(),
        "config.toml",
        &format!("[ladder]\ndictionary = \"{}\"\n", dict.display()),
    );

    pathfind()
        .env("PATHFIND_CONFIG_DIR", dir.path())
        .args(["ladder", "cold", "golf"])
        .assert()
        .success()
        .stdout("Word ladder found: cold gold golf \n");
}

#[test]
fn test_invalid_config_exit_code_3() {
    let dir = tempdir().unwrap();
    let config = write_file(dir.path(), "pathfind.toml", "[graph]\nsource = \"zero\"\n");

    pathfind()
        .arg("--config")
        .arg(&config)
        .args(["distance", "a", "b"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let dir = tempdir().unwrap();

    pathfind()
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .args(["distance", "a", "b"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read config"));
}
