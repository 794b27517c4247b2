//! Input bundles.
//!
//! Each bundle pairs its payload with the CRS it was delivered in, so the
//! pipeline can refuse mixed coordinate systems up front instead of
//! producing silently wrong distances.  Reprojection is the supplier's job.

use geo::MultiPolygon;

use ca_core::{Crs, DemandPoint, Facility};
use ca_graph::RawSegment;

/// The raw street network.
#[derive(Clone, Debug)]
pub struct StreetData {
    pub crs: Crs,
    pub segments: Vec<RawSegment>,
}

/// The service centres competing for demand.
#[derive(Clone, Debug)]
pub struct FacilityData {
    pub crs: Crs,
    pub facilities: Vec<Facility>,
}

/// The sampled demand points.
#[derive(Clone, Debug)]
pub struct DemandData {
    pub crs: Crs,
    pub points: Vec<DemandPoint>,
}

/// The overall study boundary all catchments are clipped to.
#[derive(Clone, Debug)]
pub struct StudyBoundary {
    pub crs: Crs,
    pub geometry: MultiPolygon<f64>,
}
