//! `ca-core` — foundational types for the catchment analysis toolkit.
//!
//! This crate is a dependency of every other `ca-*` crate.  It intentionally
//! has no `ca-*` dependencies and minimal external ones (only `thiserror`
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                         |
//! |-------------|--------------------------------------------------|
//! | [`ids`]     | `VertexId`, `EdgeId`, `FacilityId`               |
//! | [`geo`]     | `GeoPoint`, haversine and planar distance        |
//! | [`crs`]     | `Crs` coordinate-system tag                      |
//! | [`profile`] | `ModeProfile` travel-mode cost tables            |
//! | [`place`]   | `Facility`, `DemandPoint`                        |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod crs;
pub mod geo;
pub mod ids;
pub mod place;
pub mod profile;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use crs::Crs;
pub use geo::GeoPoint;
pub use ids::{EdgeId, FacilityId, VertexId};
pub use place::{DemandPoint, Facility};
pub use profile::ModeProfile;
