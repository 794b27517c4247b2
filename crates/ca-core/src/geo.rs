//! Geographic coordinate type and distance helpers.
//!
//! `GeoPoint` stores double-precision longitude/latitude.  Catchment
//! polygons are built from these coordinates directly, so the extra
//! precision over `f32` keeps tessellation bisectors stable for
//! near-coincident demand points.

/// A WGS-84 geographic coordinate.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lon: f64,
    pub lat: f64,
}

impl GeoPoint {
    #[inline]
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Used for edge lengths, snap-radius checks, and the straight-line
    /// pre-filter.  Accuracy is well under 0.1 % at regional scale.
    pub fn distance_m(self, other: GeoPoint) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Quantised coordinate key at 1e-7° (≈ 1 cm), for exact-coincidence
    /// deduplication of graph vertices and tessellation sites.
    #[inline]
    pub fn quantised(self) -> (i64, i64) {
        const QUANT: f64 = 1e7;
        ((self.lon * QUANT).round() as i64, (self.lat * QUANT).round() as i64)
    }

    /// Squared planar distance in degree space.
    ///
    /// Nearest-vertex snapping and Voronoi bisectors both work in the planar
    /// frame; only relative comparisons matter there, so the cheap form is
    /// the right one.
    #[inline]
    pub fn planar_dist2(self, other: GeoPoint) -> f64 {
        let dx = self.lon - other.lon;
        let dy = self.lat - other.lat;
        dx * dx + dy * dy
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lon, self.lat)
    }
}
