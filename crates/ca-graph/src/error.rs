//! Graph-subsystem error type.

use thiserror::Error;

use ca_core::VertexId;

/// Errors produced by `ca-graph`.
///
/// Both variants are structural: a graph that trips either is unusable for
/// routing and the whole run must stop.  Per-point snap failures are not
/// errors — they are represented as [`crate::Snap::Unsnapped`].
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no routable edges survive the travel-mode filter")]
    NoRoutableEdges,

    #[error("edge references vertex {0} which is not in the graph")]
    MissingVertex(VertexId),
}

pub type GraphResult<T> = Result<T, GraphError>;
