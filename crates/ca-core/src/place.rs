//! Facilities and demand points — the two kinds of query location.
//!
//! Neither is ever part of the street graph; both relate to it only through
//! a snap lookup.

use crate::{FacilityId, GeoPoint};

/// A fixed service centre competing for nearest-assignment of demand.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Facility {
    pub id: FacilityId,
    pub name: String,
    pub pos: GeoPoint,
}

impl Facility {
    pub fn new(id: FacilityId, name: impl Into<String>, pos: GeoPoint) -> Self {
        Self { id, name: name.into(), pos }
    }
}

/// A sampled location representing one unit of potential service need.
///
/// `id` is the external identifier (an address key, a sample number); `area`
/// is the optional statistical grouping key used by the caseload aggregator.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DemandPoint {
    pub id: String,
    pub pos: GeoPoint,
    pub area: Option<String>,
}

impl DemandPoint {
    pub fn new(id: impl Into<String>, pos: GeoPoint, area: Option<&str>) -> Self {
        Self {
            id: id.into(),
            pos,
            area: area.map(str::to_string),
        }
    }
}
