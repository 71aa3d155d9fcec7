//! Path reconstruction from Dijkstra predecessor links

use crate::error::{PathfindError, Result};
use crate::graph::types::{Distance, PathResult, ShortestPaths, INF};

/// Walk predecessor links back from `destination` and return the
/// source -> destination vertex sequence.
///
/// Returns an empty path when `destination` is unreachable. A predecessor
/// cycle is reported as [`PathfindError::PredecessorCycle`] after at most
/// `predecessors.len()` steps.
pub fn extract_shortest_path(
    distances: &[Distance],
    predecessors: &[Option<usize>],
    destination: usize,
) -> Result<Vec<usize>> {
    if distances.len() != predecessors.len() {
        return Err(PathfindError::MalformedGraph {
            reason: format!(
                "{} distances but {} predecessors",
                distances.len(),
                predecessors.len()
            ),
        });
    }
    crate::ensure_vertex!("destination", destination, distances.len());

    if distances[destination] == INF {
        return Ok(Vec::new());
    }

    let mut path = vec![destination];
    let mut current = destination;

    while let Some(pred) = predecessors[current] {
        crate::ensure_vertex!("predecessor", pred, predecessors.len());
        if path.len() >= predecessors.len() {
            return Err(PathfindError::PredecessorCycle { destination });
        }
        path.push(pred);
        current = pred;
    }

    path.reverse();
    Ok(path)
}

impl ShortestPaths {
    /// Reconstruct the path to `destination` together with its total cost
    pub fn path_to(&self, destination: usize) -> Result<PathResult> {
        let vertices = extract_shortest_path(&self.distances, &self.predecessors, destination)?;
        let found = !vertices.is_empty();

        Ok(PathResult {
            source: self.source,
            destination,
            found,
            total_cost: found.then(|| self.distances[destination]),
            vertices,
        })
    }

    /// Paths to every vertex, in vertex order
    pub fn all_paths(&self) -> Result<Vec<PathResult>> {
        (0..self.num_vertices()).map(|v| self.path_to(v)).collect()
    }
}
