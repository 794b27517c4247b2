//! CSV loaders for demand points, facilities, demographics, and rates.
//!
//! # CSV formats
//!
//! Demand points — one row per sampled location; `area` may be empty:
//!
//! ```csv
//! id,lon,lat,area
//! addr-001,13.401,52.520,1000
//! addr-002,13.422,52.512,1000
//! addr-003,13.376,52.531,
//! ```
//!
//! Facilities — `FacilityId` is the row index:
//!
//! ```csv
//! name,lon,lat
//! North Clinic,13.39,52.54
//! South Clinic,13.41,52.49
//! ```
//!
//! Demographics — one row per (area, bracket); repeated pairs accumulate:
//!
//! ```csv
//! area,bracket,population
//! 1000,65-74,100
//! 1000,75+,40
//! ```
//!
//! Incidence rates — per 100 000 persons, the unit epidemiological tables
//! are published in:
//!
//! ```csv
//! bracket,rate_per_100k
//! 65-74,747
//! ```
//!
//! Every loader has a `_reader` variant accepting any `Read` source, useful
//! for testing with a `std::io::Cursor` or loading from network streams.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ca_core::{DemandPoint, Facility, FacilityId, GeoPoint};

use crate::demographics::{AreaDemographics, IncidenceRates};
use crate::{DemandError, DemandResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DemandRecord {
    id: String,
    lon: f64,
    lat: f64,
    area: Option<String>,
}

#[derive(Deserialize)]
struct FacilityRecord {
    name: String,
    lon: f64,
    lat: f64,
}

#[derive(Deserialize)]
struct DemographicsRecord {
    area: String,
    bracket: String,
    population: f64,
}

#[derive(Deserialize)]
struct RateRecord {
    bracket: String,
    rate_per_100k: f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

pub fn load_demand_csv(path: &Path) -> DemandResult<Vec<DemandPoint>> {
    load_demand_reader(std::fs::File::open(path)?)
}

pub fn load_demand_reader<R: Read>(reader: R) -> DemandResult<Vec<DemandPoint>> {
    let mut out = Vec::new();
    for result in csv::Reader::from_reader(reader).deserialize::<DemandRecord>() {
        let row = result.map_err(|e| DemandError::Parse(e.to_string()))?;
        let area = row.area.filter(|a| !a.is_empty());
        out.push(DemandPoint {
            id: row.id,
            pos: GeoPoint::new(row.lon, row.lat),
            area,
        });
    }
    Ok(out)
}

pub fn load_facilities_csv(path: &Path) -> DemandResult<Vec<Facility>> {
    load_facilities_reader(std::fs::File::open(path)?)
}

pub fn load_facilities_reader<R: Read>(reader: R) -> DemandResult<Vec<Facility>> {
    let mut out = Vec::new();
    for result in csv::Reader::from_reader(reader).deserialize::<FacilityRecord>() {
        let row = result.map_err(|e| DemandError::Parse(e.to_string()))?;
        let id = FacilityId(out.len() as u32);
        out.push(Facility::new(id, row.name, GeoPoint::new(row.lon, row.lat)));
    }
    Ok(out)
}

pub fn load_demographics_csv(path: &Path) -> DemandResult<AreaDemographics> {
    load_demographics_reader(std::fs::File::open(path)?)
}

pub fn load_demographics_reader<R: Read>(reader: R) -> DemandResult<AreaDemographics> {
    let mut demo = AreaDemographics::new();
    for result in csv::Reader::from_reader(reader).deserialize::<DemographicsRecord>() {
        let row = result.map_err(|e| DemandError::Parse(e.to_string()))?;
        demo.insert(&row.area, &row.bracket, row.population);
    }
    Ok(demo)
}

pub fn load_rates_csv(path: &Path) -> DemandResult<IncidenceRates> {
    load_rates_reader(std::fs::File::open(path)?)
}

pub fn load_rates_reader<R: Read>(reader: R) -> DemandResult<IncidenceRates> {
    let mut rates = IncidenceRates::new();
    for result in csv::Reader::from_reader(reader).deserialize::<RateRecord>() {
        let row = result.map_err(|e| DemandError::Parse(e.to_string()))?;
        rates = rates.with_bracket(&row.bracket, row.rate_per_100k / 100_000.0);
    }
    Ok(rates)
}
