//! Configuration for pathfind
//!
//! Stored in `config.toml` under `$PATHFIND_CONFIG_DIR`, or under
//! `~/.config/pathfind/` when the variable is unset. A missing file means defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PathfindError, Result};

pub use types::{GraphConfig, LadderConfig, PathfindConfig, DEFAULT_DICTIONARY};

const CONFIG_DIR: &str = "pathfind";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PATHFIND_CONFIG_DIR";

impl PathfindConfig {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    PathfindError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the config from an explicit path, or from the default location.
    ///
    /// An explicit path must exist; the default location may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = match Self::default_path() {
                    Ok(path) => path,
                    Err(e) => {
                        tracing::debug!(error = %e, "no config directory, using defaults");
                        return Ok(Self::default());
                    }
                };
                if !path.exists() {
                    return Ok(Self::default());
                }
                Self::load_from(&path)
            }
        }
    }

    /// Load the config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathfindError::io_operation("read config", path.display(), e))?;

        let config = Self::parse(&content).map_err(|e| PathfindError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Parse config TOML text
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
