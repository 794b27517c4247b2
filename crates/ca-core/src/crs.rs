//! Coordinate reference system tag.
//!
//! Every input bundle (street network, facilities, demand points, boundary)
//! carries a `Crs`.  The pipeline refuses to combine bundles with different
//! tags rather than silently computing distances in mixed frames.
//! Reprojection itself is an upstream concern.

use std::fmt;

/// An EPSG code identifying the coordinate reference system of an input.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Crs(pub u32);

impl Crs {
    /// WGS-84 geographic coordinates (EPSG:4326) — the expected default.
    pub const WGS84: Crs = Crs(4326);
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EPSG:{}", self.0)
    }
}
