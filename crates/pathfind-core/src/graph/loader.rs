//! Graph text format
//!
//! ```text
//! 4          <- vertex count
//! 0 1 1      <- src dst weight, one directed edge per line
//! 0 2 4
//! ```
//!
//! Blank lines are ignored. Each edge is appended to the adjacency list of its
//! source vertex in file order. The vertex count may not exceed
//! [`MAX_VERTICES`].

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::error::{PathfindError, Result};
use crate::graph::types::{Edge, Graph, Weight};

/// Largest vertex count a graph file may declare
pub const MAX_VERTICES: usize = 1 << 24;

/// Read and parse a graph file
pub fn load_graph(path: &Path) -> Result<Graph> {
    let start = Instant::now();
    let content = fs::read_to_string(path)
        .map_err(|e| PathfindError::io_operation("read graph file", path.display(), e))?;

    let graph = parse_graph(&content)?;
    crate::trace_time!(
        start,
        "load_graph",
        vertices = graph.num_vertices(),
        edges = graph.num_edges()
    );
    Ok(graph)
}

/// Parse graph text into a [`Graph`]
pub fn parse_graph(content: &str) -> Result<Graph> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (header_line, header) = lines
        .next()
        .ok_or_else(|| PathfindError::invalid_graph(1, "missing vertex count"))?;
    let num_vertices: usize = header.parse().map_err(|_| {
        PathfindError::invalid_graph(header_line, format!("invalid vertex count '{}'", header))
    })?;

    if num_vertices > MAX_VERTICES {
        return Err(PathfindError::invalid_graph(
            header_line,
            format!(
                "vertex count {} exceeds the limit of {}",
                num_vertices, MAX_VERTICES
            ),
        ));
    }
    let mut graph = Graph::try_new(num_vertices)
        .map_err(|e| PathfindError::invalid_graph(header_line, e.to_string()))?;

    for (line_no, line) in lines {
        let edge = parse_edge(line_no, line)?;
        graph.add_edge(edge).map_err(|e| match e {
            out_of_range @ PathfindError::VertexOutOfRange { .. } => {
                PathfindError::invalid_graph(line_no, out_of_range.to_string())
            }
            other => other,
        })?;
    }

    Ok(graph)
}

fn parse_edge(line_no: usize, line: &str) -> Result<Edge> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [src, dst, weight] = fields.as_slice() else {
        return Err(PathfindError::invalid_graph(
            line_no,
            format!("expected 'src dst weight', found {} fields", fields.len()),
        ));
    };

    let vertex = |field: &str, name: &str| -> Result<usize> {
        field.parse().map_err(|_| {
            PathfindError::invalid_graph(line_no, format!("invalid {} vertex '{}'", name, field))
        })
    };

    let weight: Weight = match weight.parse::<i64>() {
        Ok(w) if w < 0 => {
            return Err(PathfindError::invalid_graph(
                line_no,
                format!("negative weight {}", w),
            ))
        }
        Ok(w) => Weight::try_from(w).map_err(|_| {
            PathfindError::invalid_graph(line_no, format!("weight {} too large", w))
        })?,
        Err(_) => {
            return Err(PathfindError::invalid_graph(
                line_no,
                format!("invalid weight '{}'", weight),
            ))
        }
    };

    Ok(Edge::new(
        vertex(*src, "source")?,
        vertex(*dst, "destination")?,
        weight,
    ))
}
