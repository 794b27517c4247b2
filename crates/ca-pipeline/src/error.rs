//! Pipeline error type — the union of everything that can stop a run.

use thiserror::Error;

use ca_catchment::CatchmentError;
use ca_core::Crs;
use ca_graph::GraphError;
use ca_route::RouteError;

/// Errors surfaced by [`crate::CatchmentPipeline::run`].
///
/// All of these are structural and fatal: the run produces no partial
/// output.  Per-point problems (unsnappable, unreachable) never appear
/// here — they flow through the pipeline as the disconnected category.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("coordinate system mismatch: {input} is tagged {found}, expected {expected}")]
    CrsMismatch {
        input: &'static str,
        found: Crs,
        expected: Crs,
    },

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Catchment(#[from] CatchmentError),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
