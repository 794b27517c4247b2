//! Catchment-subsystem error type.

use thiserror::Error;

/// Errors produced by `ca-catchment`.
#[derive(Debug, Error)]
pub enum CatchmentError {
    #[error("no distinct sites remain after deduplication")]
    NoSites,

    #[error("tessellation produced no cell containing site {0}")]
    CellMatch(usize),
}

pub type CatchmentResult<T> = Result<T, CatchmentError>;
