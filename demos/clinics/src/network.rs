//! Synthetic street network for the Greenfield demo town.
//!
//! A small grid of residential streets with a trunk road cutting through
//! (excluded for pedestrians) and an isolated riverside path on the far
//! bank — deliberately unreachable, so the demo shows the disconnected
//! diagnostic.

use geo::{LineString, MultiPolygon, Polygon};

use ca_core::GeoPoint;
use ca_graph::RawSegment;

/// West/east extent of the street grid, degrees longitude.
const LON: [f64; 5] = [13.380, 13.390, 13.400, 13.410, 13.420];
/// South/north extent, degrees latitude.
const LAT: [f64; 3] = [52.500, 52.510, 52.520];

/// Build the demo street segments.
pub fn build_streets() -> Vec<RawSegment> {
    let mut segments = Vec::new();

    // East–west residential streets along each latitude row.
    for &lat in &LAT {
        segments.push(RawSegment::new(
            LON.iter().map(|&lon| GeoPoint::new(lon, lat)).collect(),
            "residential",
        ));
    }

    // North–south cross streets along each longitude column.
    for &lon in &LON {
        segments.push(RawSegment::new(
            LAT.iter().map(|&lat| GeoPoint::new(lon, lat)).collect(),
            "residential",
        ));
    }

    // A trunk road across the middle row: pedestrians can't use it, so the
    // mode filter drops it (and the run reports the dropped edge count).
    segments.push(RawSegment::new(
        vec![GeoPoint::new(13.380, 52.510), GeoPoint::new(13.420, 52.510)],
        "trunk",
    ));

    // The far-bank riverside path: no bridge, no connection to the grid.
    segments.push(RawSegment::new(
        vec![GeoPoint::new(13.460, 52.505), GeoPoint::new(13.470, 52.505)],
        "footway",
    ));

    segments
}

/// The study boundary: a rectangle around the grid (the far bank is
/// outside it).
pub fn study_boundary() -> MultiPolygon<f64> {
    MultiPolygon(vec![Polygon::new(
        LineString::from(vec![
            (13.375, 52.495),
            (13.425, 52.495),
            (13.425, 52.525),
            (13.375, 52.525),
            (13.375, 52.495),
        ]),
        vec![],
    )])
}
