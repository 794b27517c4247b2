//! Raw street segments as delivered by the upstream network provider.
//!
//! A segment is an ordered polyline with a single road classification.  The
//! builder decomposes it into atomic edges between consecutive coordinates;
//! nothing here is routable on its own.

use ca_core::GeoPoint;

/// One raw street segment: geometry plus road classification.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawSegment {
    /// Ordered vertex coordinates.  Segments with fewer than two points
    /// contribute no edges.
    pub points: Vec<GeoPoint>,
    /// Road classification string (e.g. `"residential"`, `"footway"`).
    pub class: String,
}

impl RawSegment {
    pub fn new(points: Vec<GeoPoint>, class: impl Into<String>) -> Self {
        Self { points, class: class.into() }
    }
}
