//! `ca-catchment` — the geometry branch: tessellating assigned demand
//! points into per-facility catchment polygons.
//!
//! # Crate layout
//!
//! | Module        | Contents                                          |
//! |---------------|---------------------------------------------------|
//! | [`voronoi`]   | half-plane-clipping Voronoi tessellation          |
//! | [`partition`] | `Catchment`, `partition`, `match_cells_to_sites`  |
//! | [`error`]     | `CatchmentError`, `CatchmentResult<T>`            |

pub mod error;
pub mod partition;
pub mod voronoi;

#[cfg(test)]
mod tests;

pub use error::{CatchmentError, CatchmentResult};
pub use partition::{Catchment, match_cells_to_sites, partition};
pub use voronoi::tessellate;
