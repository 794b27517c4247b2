//! Many-to-many shortest-path engine.
//!
//! One Dijkstra search per distinct source over the routable CSR adjacency,
//! stopping early once every requested target is settled.  Edge costs are
//! finite non-negative `f64` by graph construction, so a `total_cmp` wrapper
//! gives the heap a total order without any NaN story.
//!
//! # Determinism
//!
//! The result is a pure function of the graph and the (source, target)
//! pairs: heap ties break on the lowest vertex id, and neither source nor
//! target enumeration order can change any value.  The `parallel` feature
//! only distributes rows across threads — each row is still computed by the
//! same sequential search, so the matrix is bit-identical either way.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use ca_core::VertexId;
use ca_graph::StreetGraph;

use crate::cancel::CancelToken;
use crate::matrix::DistanceMatrix;
use crate::{RouteError, RouteResult};

// ── Heap cost ordering ────────────────────────────────────────────────────────

/// Finite `f64` cost with a total order for the binary heap.
#[derive(Copy, Clone, PartialEq)]
struct HeapCost(f64);

impl Eq for HeapCost {}

impl PartialOrd for HeapCost {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapCost {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Shortest-path cost from every source to every target.
///
/// Rows follow `sources` order, columns follow `targets` order.  A pair
/// with no path yields the unreachable marker, never an error.  Sources
/// with many duplicate snap vertices should be deduplicated by the caller
/// (the pipeline does); duplicates are computed twice but stay correct.
///
/// # Errors
///
/// [`RouteError::UnknownVertex`] if any source or target id is out of
/// bounds; [`RouteError::Cancelled`] if `cancel` is raised before all
/// sources were dispatched.  Neither returns a partial matrix.
pub fn shortest_distances(
    graph: &StreetGraph,
    sources: &[VertexId],
    targets: &[VertexId],
    cancel: &CancelToken,
) -> RouteResult<DistanceMatrix> {
    let n = graph.vertex_count();
    for &v in sources.iter().chain(targets) {
        if v.index() >= n {
            return Err(RouteError::UnknownVertex(v));
        }
    }

    log::debug!(
        "computing {}×{} distance matrix over {} vertices",
        sources.len(),
        targets.len(),
        n,
    );

    let rows = compute_rows(graph, sources, targets, cancel)?;
    Ok(DistanceMatrix::from_rows(targets.len(), rows))
}

#[cfg(not(feature = "parallel"))]
fn compute_rows(
    graph: &StreetGraph,
    sources: &[VertexId],
    targets: &[VertexId],
    cancel: &CancelToken,
) -> RouteResult<Vec<Vec<f64>>> {
    sources
        .iter()
        .map(|&source| {
            if cancel.is_cancelled() {
                return Err(RouteError::Cancelled);
            }
            Ok(distances_from(graph, source, targets))
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn compute_rows(
    graph: &StreetGraph,
    sources: &[VertexId],
    targets: &[VertexId],
    cancel: &CancelToken,
) -> RouteResult<Vec<Vec<f64>>> {
    use rayon::prelude::*;

    // Each task reads the shared graph and produces its own row; rows are
    // merged by collect, so no locking is needed.
    sources
        .par_iter()
        .map(|&source| {
            if cancel.is_cancelled() {
                return Err(RouteError::Cancelled);
            }
            Ok(distances_from(graph, source, targets))
        })
        .collect()
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Single-source Dijkstra, returning the cost to each entry of `targets`
/// (in order).  Stops as soon as every distinct target vertex is settled.
fn distances_from(graph: &StreetGraph, source: VertexId, targets: &[VertexId]) -> Vec<f64> {
    let n = graph.vertex_count();
    let mut dist = vec![f64::INFINITY; n];

    // Several facilities can share a snap vertex; settle each vertex once.
    let mut unsettled_target = vec![false; n];
    let mut remaining = 0usize;
    for &t in targets {
        if !unsettled_target[t.index()] {
            unsettled_target[t.index()] = true;
            remaining += 1;
        }
    }

    dist[source.index()] = 0.0;

    // Min-heap: Reverse makes BinaryHeap (max) behave as a min-heap.  The
    // secondary VertexId key makes tie ordering deterministic.
    let mut heap: BinaryHeap<Reverse<(HeapCost, VertexId)>> = BinaryHeap::new();
    heap.push(Reverse((HeapCost(0.0), source)));

    while let Some(Reverse((HeapCost(cost), vertex))) = heap.pop() {
        // Skip stale heap entries.
        if cost > dist[vertex.index()] {
            continue;
        }

        if unsettled_target[vertex.index()] {
            unsettled_target[vertex.index()] = false;
            remaining -= 1;
            if remaining == 0 {
                break;
            }
        }

        for edge in graph.out_edges(vertex) {
            let neighbor = graph.edge_to[edge.index()];
            let new_cost = cost + graph.edge_cost[edge.index()];

            if new_cost < dist[neighbor.index()] {
                dist[neighbor.index()] = new_cost;
                heap.push(Reverse((HeapCost(new_cost), neighbor)));
            }
        }
    }

    targets.iter().map(|t| dist[t.index()]).collect()
}
