//! Catchment partition — from assigned demand points to one polygon per
//! facility.

use geo::{BooleanOps, BoundingRect, Contains, Coord, MultiPolygon, Point, Polygon, Rect};
use rustc_hash::FxHashMap;

use ca_core::{FacilityId, GeoPoint};
use ca_demand::Assignment;

use crate::voronoi::tessellate;
use crate::{CatchmentError, CatchmentResult};

/// The region of the study boundary attributed to one facility.
#[derive(Clone, Debug)]
pub struct Catchment {
    pub facility: FacilityId,
    /// Possibly multi-part; area-disjoint from every other facility's
    /// geometry by construction.
    pub geometry: MultiPolygon<f64>,
}

/// Partition the study boundary into per-facility catchments.
///
/// `points` and `assignments` are parallel slices.  Coincident coordinates
/// are deduplicated into one tessellation site (a Voronoi diagram is
/// undefined on duplicate sites); every original point keeps its assignment
/// and its statistical weight — only the geometry collapses.  Disconnected
/// points are tessellated but their cells belong to no facility, so that
/// area is simply unattributed.
///
/// Returns one catchment per facility that owns at least one connected
/// site, ordered by facility id.
///
/// # Errors
///
/// [`CatchmentError::NoSites`] when no distinct site remains;
/// [`CatchmentError::CellMatch`] if a tessellation cell cannot be matched
/// back to its site (which would otherwise silently mis-attribute area).
pub fn partition(
    points: &[GeoPoint],
    assignments: &[Assignment],
    boundary: &MultiPolygon<f64>,
) -> CatchmentResult<Vec<Catchment>> {
    assert_eq!(points.len(), assignments.len(), "points/assignments length mismatch");

    // ── 1. Deduplicate coincident sites ───────────────────────────────────
    let mut site_index: FxHashMap<(i64, i64), usize> = FxHashMap::default();
    let mut sites: Vec<Coord<f64>> = Vec::new();
    // All original point indices sharing each site; the first one carries
    // the site's assignment (coincident points share a snap vertex, hence
    // an assignment).
    let mut site_points: Vec<Vec<usize>> = Vec::new();

    for (i, p) in points.iter().enumerate() {
        match site_index.entry(p.quantised()) {
            std::collections::hash_map::Entry::Occupied(e) => {
                site_points[*e.get()].push(i);
            }
            std::collections::hash_map::Entry::Vacant(e) => {
                e.insert(sites.len());
                sites.push(Coord { x: p.lon, y: p.lat });
                site_points.push(vec![i]);
            }
        }
    }

    if sites.is_empty() {
        return Err(CatchmentError::NoSites);
    }
    log::debug!("{} distinct sites from {} demand points", sites.len(), points.len());

    // ── 2. Tessellate within an expanded frame ────────────────────────────
    // The frame must strictly contain every site (or cells degenerate) and
    // the whole boundary (or clipping would trim real catchment area).
    let bounds = expanded_frame(boundary, &sites);
    let cells = tessellate(&sites, &bounds);

    // ── 3. Match cells back to sites by containment ───────────────────────
    // The tessellation does not preserve site order; matching by "which
    // cell contains the site" is what makes the later grouping correct.
    let cell_of_site = match_cells_to_sites(&sites, &cells)?;

    // ── 4. Group by facility, union, clip to the boundary ─────────────────
    let mut grouped: FxHashMap<FacilityId, Vec<usize>> = FxHashMap::default();
    for (site, point_indices) in site_points.iter().enumerate() {
        if let Assignment::Assigned(f) = assignments[point_indices[0]] {
            grouped.entry(f).or_default().push(site);
        }
    }

    let mut catchments: Vec<Catchment> = grouped
        .into_iter()
        .map(|(facility, group_sites)| {
            let mut geometry = MultiPolygon::<f64>(Vec::new());
            for site in group_sites {
                let cell = MultiPolygon(vec![cells[cell_of_site[site]].clone()]);
                geometry = if geometry.0.is_empty() { cell } else { geometry.union(&cell) };
            }
            Catchment { facility, geometry: geometry.intersection(boundary) }
        })
        .collect();

    catchments.sort_by_key(|c| c.facility);
    Ok(catchments)
}

/// For each site, the index of the unique cell containing it.
///
/// Exposed (and tested) on its own because skipping it and trusting cell
/// order is a known source of silent mis-assignment.
pub fn match_cells_to_sites(
    sites: &[Coord<f64>],
    cells: &[Polygon<f64>],
) -> CatchmentResult<Vec<usize>> {
    sites
        .iter()
        .enumerate()
        .map(|(i, &site)| {
            cells
                .iter()
                .position(|cell| cell.contains(&Point::from(site)))
                .ok_or(CatchmentError::CellMatch(i))
        })
        .collect()
}

/// Bounding rectangle of the boundary and all sites, expanded by 10 % of
/// its span so every site is strictly interior.
fn expanded_frame(boundary: &MultiPolygon<f64>, sites: &[Coord<f64>]) -> Rect<f64> {
    let mut min = Coord { x: f64::MAX, y: f64::MAX };
    let mut max = Coord { x: f64::MIN, y: f64::MIN };

    if let Some(rect) = boundary.bounding_rect() {
        min.x = min.x.min(rect.min().x);
        min.y = min.y.min(rect.min().y);
        max.x = max.x.max(rect.max().x);
        max.y = max.y.max(rect.max().y);
    }
    for site in sites {
        min.x = min.x.min(site.x);
        min.y = min.y.min(site.y);
        max.x = max.x.max(site.x);
        max.y = max.y.max(site.y);
    }

    let pad_x = ((max.x - min.x) * 0.1).max(0.01);
    let pad_y = ((max.y - min.y) * 0.1).max(0.01);
    Rect::new(
        Coord { x: min.x - pad_x, y: min.y - pad_y },
        Coord { x: max.x + pad_x, y: max.y + pad_y },
    )
}
