use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Four vertices, shortest path 0 -> 1 -> 2 -> 3 with cost 6
pub const SAMPLE_GRAPH: &str = "4\n0 1 1\n0 2 4\n1 2 2\n1 3 6\n2 3 3\n";

pub const SAMPLE_WORDS: &str = "cold\ngold\ngolf\nwolf\ncord card\nwarm\n";

/// Get a Command for pathfind, isolated from any user config and log filters
pub fn pathfind() -> Command {
    let mut cmd = cargo_bin_cmd!("pathfind");
    cmd.env(
        "PATHFIND_CONFIG_DIR",
        std::env::temp_dir().join("pathfind-tests-no-config"),
    )
    .env_remove("RUST_LOG")
    .env_remove("PATHFIND_LOG");
    cmd
}

/// Write `content` to `dir/name` and return the path
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Run pathfind with `args` and return stdout as String
#[allow(dead_code)]
pub fn run_and_get_stdout(args: &[&str]) -> String {
    let output = pathfind().args(args).output().unwrap();
    String::from_utf8_lossy(&output.stdout).to_string()
}
