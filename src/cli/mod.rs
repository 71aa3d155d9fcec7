//! CLI argument parsing for pathfind
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use args::{DistanceArgs, GraphArgs, LadderArgs, VerifyArgs};
pub use pathfind_core::format::OutputFormat;
use parse::parse_format;

/// Pathfind - shortest paths in weighted graphs and word ladders
#[derive(Parser, Debug)]
#[command(name = "pathfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (defaults to $PATHFIND_CONFIG_DIR/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest paths from a source vertex of a graph file
    Graph(GraphArgs),

    /// Shortest word ladder between two words
    Ladder(LadderArgs),

    /// Edit distance between two words
    Distance(DistanceArgs),

    /// Run the built-in word ladder checks against a dictionary
    Verify(VerifyArgs),
}
