//! CLI commands for pathfind

pub mod dispatch;
pub mod distance;
pub mod format;
pub mod graph;
pub mod ladder;
pub mod verify;
