use serde::{Serialize, Serializer};
use std::fmt;

use crate::error::{PathfindError, Result};

/// Weight of a single directed edge. Unsigned, so weights are never negative.
pub type Weight = u32;

/// Accumulated path cost from the source vertex
pub type Distance = u64;

/// Sentinel distance for vertices the search never reached.
///
/// Edge weights are `u32` and a simple path has at most `V - 1` edges, so no
/// achievable sum comes close to this value.
pub const INF: Distance = Distance::MAX;

/// A directed weighted edge `src -> dst`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub src: usize,
    pub dst: usize,
    pub weight: Weight,
}

impl Edge {
    pub fn new(src: usize, dst: usize, weight: Weight) -> Self {
        Self { src, dst, weight }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{})", self.src, self.dst, self.weight)
    }
}

/// Directed weighted graph stored as one adjacency list per vertex.
///
/// Vertex ids are `0..num_vertices()`. Every edge in list `i` has `src == i`
/// and an in-range `dst`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `num_vertices` vertices and no edges
    pub fn new(num_vertices: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); num_vertices],
        }
    }

    /// Like [`Graph::new`], but reports an allocation failure as an error
    /// instead of aborting
    pub fn try_new(num_vertices: usize) -> Result<Self> {
        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(num_vertices)
            .map_err(|e| PathfindError::MalformedGraph {
                reason: format!("cannot allocate {} vertices: {}", num_vertices, e),
            })?;
        adjacency.resize_with(num_vertices, Vec::new);
        Ok(Self { adjacency })
    }

    /// Build a graph from prepared adjacency lists, validating dimensions
    pub fn from_adjacency(num_vertices: usize, adjacency: Vec<Vec<Edge>>) -> Result<Self> {
        if adjacency.len() != num_vertices {
            return Err(PathfindError::MalformedGraph {
                reason: format!(
                    "expected {} adjacency lists, found {}",
                    num_vertices,
                    adjacency.len()
                ),
            });
        }

        for (vertex, edges) in adjacency.iter().enumerate() {
            for edge in edges {
                if edge.src != vertex {
                    return Err(PathfindError::MalformedGraph {
                        reason: format!("edge {} stored in adjacency list {}", edge, vertex),
                    });
                }
                if edge.dst >= num_vertices {
                    return Err(PathfindError::MalformedGraph {
                        reason: format!(
                            "edge {} points outside {} vertices",
                            edge, num_vertices
                        ),
                    });
                }
            }
        }

        Ok(Self { adjacency })
    }

    /// Append an edge to the adjacency list of its source vertex
    pub fn add_edge(&mut self, edge: Edge) -> Result<()> {
        let n = self.num_vertices();
        crate::ensure_vertex!("edge source", edge.src, n);
        crate::ensure_vertex!("edge destination", edge.dst, n);
        self.adjacency[edge.src].push(edge);
        Ok(())
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Outgoing edges of `vertex`; empty for out-of-range ids
    pub fn neighbors(&self, vertex: usize) -> &[Edge] {
        self.adjacency.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Weight of the lightest edge `src -> dst`, if any
    pub fn edge_weight(&self, src: usize, dst: usize) -> Option<Weight> {
        self.neighbors(src)
            .iter()
            .filter(|e| e.dst == dst)
            .map(|e| e.weight)
            .min()
    }
}

fn serialize_distances<S: Serializer>(
    distances: &[Distance],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_seq(
        distances
            .iter()
            .map(|&d| if d == INF { None } else { Some(d) }),
    )
}

/// Output of a single-source Dijkstra run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortestPaths {
    pub source: usize,
    /// Per-vertex distance from `source`; `INF` when unreached (`null` in JSON)
    #[serde(serialize_with = "serialize_distances")]
    pub distances: Vec<Distance>,
    /// Per-vertex predecessor on the shortest-path tree; `None` for the
    /// source and for unreached vertices
    pub predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    pub fn num_vertices(&self) -> usize {
        self.distances.len()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distances.get(vertex).is_some_and(|&d| d != INF)
    }

    /// Finite distance to `vertex`, or `None` if unreachable or out of range
    pub fn distance(&self, vertex: usize) -> Option<Distance> {
        self.distances.get(vertex).copied().filter(|&d| d != INF)
    }
}

/// A reconstructed source -> destination path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub source: usize,
    pub destination: usize,
    pub found: bool,
    pub vertices: Vec<usize>,
    /// Sum of edge weights along `vertices`; `None` when not found
    pub total_cost: Option<Distance>,
}
