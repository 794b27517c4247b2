//! `ca-io` — result writers.
//!
//! The core mandates no interchange format; these writers cover the two
//! obvious ones.  CSV for the caseload and diagnostics tables, GeoJSON for
//! the catchment polygons.
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`csv`]     | `write_caseload_csv`, `write_summary_csv`             |
//! | [`geojson`] | `catchments_to_feature_collection`, GeoJSON writer    |
//! | [`error`]   | `OutputError`, `OutputResult<T>`                      |

pub mod csv;
pub mod error;
pub mod geojson;


pub use crate::csv::{write_caseload_csv, write_summary_csv};
pub use crate::geojson::{catchments_to_feature_collection, write_catchments_geojson};
pub use error::{OutputError, OutputResult};
