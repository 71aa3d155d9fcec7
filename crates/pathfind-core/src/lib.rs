//! Pathfind Core Library
//!
//! Shortest-path search over two kinds of graphs:
//! - an explicit directed weighted graph, searched with Dijkstra
//! - an implicit word graph (edit distance 1 adjacency), searched with BFS

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod ladder;
pub mod logging;
