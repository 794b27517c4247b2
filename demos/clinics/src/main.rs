//! clinics — smallest end-to-end example of the catchment analysis toolkit.
//!
//! Three rehabilitation clinics compete for demand sampled across the
//! synthetic town of Greenfield.  The run assigns every demand point to its
//! nearest clinic by walking distance over the street grid, draws the
//! resulting catchment polygons, and estimates each clinic's yearly
//! caseload from area demographics.  Swap the embedded CSVs and the
//! synthetic grid for real exports to run at city scale.

mod network;

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use ca_core::{Crs, ModeProfile};
use ca_demand::{
    load_demand_reader, load_demographics_reader, load_facilities_reader, load_rates_reader,
};
use ca_io::{write_caseload_csv, write_catchments_geojson, write_summary_csv};
use ca_pipeline::{
    CatchmentPipeline, DemandData, FacilityData, PipelineConfig, StreetData, StudyBoundary,
};
use ca_route::CancelToken;

use network::{build_streets, study_boundary};

// ── Embedded inputs ───────────────────────────────────────────────────────────

const FACILITIES_CSV: &str = "\
name,lon,lat
Riverside Clinic,13.380,52.500
Central Clinic,13.400,52.510
Hilltop Clinic,13.420,52.520
";

// Sampled addresses; area codes 1000–3000 are the town's statistical
// districts.  addr-13 sits on the far bank with no bridge.
const DEMAND_CSV: &str = "\
id,lon,lat,area
addr-01,13.381,52.500,1000
addr-02,13.390,52.501,1000
addr-03,13.385,52.510,1000
addr-04,13.390,52.519,1000
addr-05,13.400,52.505,2000
addr-06,13.401,52.510,2000
addr-07,13.399,52.515,2000
addr-08,13.405,52.520,2000
addr-09,13.410,52.502,3000
addr-10,13.411,52.511,3000
addr-11,13.419,52.515,3000
addr-12,13.420,52.519,3000
addr-13,13.465,52.505,3000
";

const DEMOGRAPHICS_CSV: &str = "\
area,bracket,population
1000,65-74,320
1000,75+,180
2000,65-74,410
2000,75+,150
3000,65-74,150
3000,75+,90
";

const RATES_CSV: &str = "\
bracket,rate_per_100k
65-74,747
75+,1180
";

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== clinics — network-distance catchment demo ===");
    println!();

    // 1. Inputs: synthetic streets plus the embedded CSV tables.
    let streets = build_streets();
    let facilities = load_facilities_reader(Cursor::new(FACILITIES_CSV))?;
    let demand = load_demand_reader(Cursor::new(DEMAND_CSV))?;
    let demographics = load_demographics_reader(Cursor::new(DEMOGRAPHICS_CSV))?;
    let rates = load_rates_reader(Cursor::new(RATES_CSV))?;
    println!(
        "Inputs: {} street segments, {} clinics, {} demand points",
        streets.len(),
        facilities.len(),
        demand.len(),
    );

    // 2. Assemble and run the pipeline.
    let pipeline = CatchmentPipeline::new(
        StreetData { crs: Crs::WGS84, segments: streets },
        FacilityData { crs: Crs::WGS84, facilities: facilities.clone() },
        DemandData { crs: Crs::WGS84, points: demand },
        StudyBoundary { crs: Crs::WGS84, geometry: study_boundary() },
        demographics,
        rates,
        ModeProfile::walking(),
    )
    .with_config(PipelineConfig { max_snap_m: Some(2_000.0), prefilter_radius_m: None });

    let out = pipeline.run(&CancelToken::new())?;

    // 3. Report.
    println!();
    println!("{:<18} {:>8} {:>12} {:>8}", "clinic", "points", "est. cases", "share");
    for estimate in &out.caseload {
        let facility = &facilities[estimate.facility.index()];
        println!(
            "{:<18} {:>8} {:>12.3} {:>7.1}%",
            facility.name,
            out.summary.per_facility[estimate.facility.index()],
            estimate.cases,
            estimate.share_pct,
        );
    }
    println!();
    println!("Disconnected demand points: {}", out.summary.disconnected);

    // 4. Export.
    let out_dir = Path::new("out");
    std::fs::create_dir_all(out_dir)?;
    write_caseload_csv(&out_dir.join("caseload.csv"), &facilities, &out.caseload)?;
    write_summary_csv(&out_dir.join("summary.csv"), &facilities, &out.summary)?;
    write_catchments_geojson(&out_dir.join("catchments.geojson"), &out.catchments, &facilities)?;
    println!("Wrote caseload.csv, summary.csv, catchments.geojson to {}", out_dir.display());

    Ok(())
}
