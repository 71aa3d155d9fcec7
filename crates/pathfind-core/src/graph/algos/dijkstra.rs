use crate::error::{PathfindError, Result};
use crate::graph::types::{Distance, ShortestPaths, INF};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering};

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub vertex: usize,
    pub distance: Distance,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// State tracked during a Dijkstra run
struct DijkstraState {
    distances: Vec<Distance>,
    predecessors: Vec<Option<usize>>,
    visited: Vec<bool>,
    heap: BinaryHeap<Reverse<HeapEntry>>,
    relaxed: usize,
    stale: usize,
}

impl DijkstraState {
    fn new(num_vertices: usize, source: usize) -> Self {
        let mut state = Self {
            distances: vec![INF; num_vertices],
            predecessors: vec![None; num_vertices],
            visited: vec![false; num_vertices],
            heap: BinaryHeap::new(),
            relaxed: 0,
            stale: 0,
        };
        state.distances[source] = 0;
        state.heap.push(Reverse(HeapEntry {
            vertex: source,
            distance: 0,
        }));
        state
    }

    /// Relax every outgoing edge of a freshly settled vertex
    fn relax_from(&mut self, provider: &dyn GraphProvider, u: usize) {
        let base = self.distances[u];
        for edge in provider.outbound_edges(u) {
            let v = edge.dst;
            if self.visited[v] {
                continue;
            }

            let candidate = base.saturating_add(Distance::from(edge.weight));
            if candidate < self.distances[v] {
                self.distances[v] = candidate;
                self.predecessors[v] = Some(u);
                self.relaxed += 1;
                self.heap.push(Reverse(HeapEntry {
                    vertex: v,
                    distance: candidate,
                }));
            }
        }
    }
}

/// Compute shortest distances and predecessor links from `source`.
///
/// Unreached vertices keep distance [`INF`] and predecessor `None`.
/// Fails if `source` is not a vertex of the graph.
pub fn dijkstra_shortest_paths(
    provider: &dyn GraphProvider,
    source: usize,
) -> Result<ShortestPaths> {
    run(provider, source, None)
}

/// Like [`dijkstra_shortest_paths`], but stops with
/// [`PathfindError::Interrupted`] once `interrupt` is set. The flag is checked
/// once per settled vertex.
pub fn dijkstra_shortest_paths_with_interrupt(
    provider: &dyn GraphProvider,
    source: usize,
    interrupt: &AtomicBool,
) -> Result<ShortestPaths> {
    run(provider, source, Some(interrupt))
}

#[tracing::instrument(skip(provider, interrupt), fields(source = source, vertices = provider.num_vertices()))]
fn run(
    provider: &dyn GraphProvider,
    source: usize,
    interrupt: Option<&AtomicBool>,
) -> Result<ShortestPaths> {
    let num_vertices = provider.num_vertices();
    crate::ensure_vertex!("source", source, num_vertices);

    let mut state = DijkstraState::new(num_vertices, source);
    let mut settled = 0usize;

    while let Some(Reverse(HeapEntry { vertex: u, .. })) = state.heap.pop() {
        if interrupt.is_some_and(|flag| flag.load(Ordering::SeqCst)) {
            tracing::info!(settled, "shortest path search interrupted");
            return Err(PathfindError::Interrupted);
        }

        // Lazy deletion: superseded entries are dropped here
        if state.visited[u] {
            state.stale += 1;
            continue;
        }
        state.visited[u] = true;
        settled += 1;

        state.relax_from(provider, u);
    }

    tracing::debug!(
        settled,
        relaxed = state.relaxed,
        stale = state.stale,
        "dijkstra complete"
    );

    Ok(ShortestPaths {
        source,
        distances: state.distances,
        predecessors: state.predecessors,
    })
}
