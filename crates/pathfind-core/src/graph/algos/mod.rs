//! Graph algorithm implementations
//!
//! - `dijkstra`: Weighted single-source shortest paths

pub mod dijkstra;

pub use dijkstra::{dijkstra_shortest_paths, dijkstra_shortest_paths_with_interrupt};
