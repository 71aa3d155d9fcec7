//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default dictionary file, relative to the working directory
pub const DEFAULT_DICTIONARY: &str = "words.txt";

/// Top-level pathfind configuration (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathfindConfig {
    /// Weighted graph search settings
    #[serde(default)]
    pub graph: GraphConfig,

    /// Word ladder settings
    #[serde(default)]
    pub ladder: LadderConfig,
}

/// Settings for weighted graph search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Source vertex used when `--source` is not given
    #[serde(default)]
    pub source: usize,
}

/// Settings for word ladder search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LadderConfig {
    /// Dictionary file used when `--dict` is not given
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,
}

impl Default for LadderConfig {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
        }
    }
}

fn default_dictionary() -> PathBuf {
    PathBuf::from(DEFAULT_DICTIONARY)
}
