use crate::graph::types::{Edge, Graph};

/// Trait for providing graph adjacency to the search algorithms
pub trait GraphProvider {
    fn num_vertices(&self) -> usize;
    fn outbound_edges(&self, vertex: usize) -> &[Edge];
}

impl GraphProvider for Graph {
    fn num_vertices(&self) -> usize {
        Graph::num_vertices(self)
    }

    fn outbound_edges(&self, vertex: usize) -> &[Edge] {
        self.neighbors(vertex)
    }
}
