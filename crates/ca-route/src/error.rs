//! Routing-subsystem error type.

use thiserror::Error;

use ca_core::VertexId;

/// Errors produced by `ca-route`.
///
/// An unreachable source/target pair is NOT an error — it yields the
/// unreachable marker in the matrix.  Errors here abort the computation
/// with no partial output.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("vertex {0} is not in the graph")]
    UnknownVertex(VertexId),

    #[error("distance computation cancelled")]
    Cancelled,
}

pub type RouteResult<T> = Result<T, RouteError>;
