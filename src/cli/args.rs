//! Argument structures for pathfind subcommands

use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct GraphArgs {
    /// Graph file: vertex count, then one `src dst weight` line per edge
    pub file: PathBuf,

    /// Source vertex (defaults to `graph.source` from config, else 0)
    #[arg(long, short)]
    pub source: Option<usize>,

    /// Only report the path to this vertex
    #[arg(long, short)]
    pub to: Option<usize>,
}

#[derive(Args, Debug)]
pub struct LadderArgs {
    /// First word of the ladder
    pub start: String,

    /// Last word of the ladder (must be in the dictionary)
    pub end: String,

    /// Dictionary file (defaults to `ladder.dictionary` from config)
    #[arg(long, short)]
    pub dict: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct DistanceArgs {
    pub a: String,

    pub b: String,

    /// Also report whether the distance is at most this value
    #[arg(long, short)]
    pub within: Option<usize>,
}

#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Dictionary file (defaults to `ladder.dictionary` from config)
    #[arg(long, short)]
    pub dict: Option<PathBuf>,
}
