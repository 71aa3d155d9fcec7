//! Weighted graph search
//!
//! Provides the explicit directed weighted graph and its algorithms:
//! - Dijkstra single-source shortest paths with predecessor links
//! - Path reconstruction from predecessor links
//! - Loading graphs from the `n` / `src dst weight` text format

pub mod algos;
pub mod loader;
pub mod path;
pub mod traversal;
pub mod types;

pub use algos::{dijkstra_shortest_paths, dijkstra_shortest_paths_with_interrupt};
pub use loader::{load_graph, parse_graph};
pub use path::extract_shortest_path;
pub use traversal::GraphProvider;
pub use types::{Distance, Edge, Graph, PathResult, ShortestPaths, Weight, INF};
