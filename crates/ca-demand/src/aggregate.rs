//! Caseload aggregation — the statistics branch of the pipeline.
//!
//! A deterministic weighted join: each area's expected event count is split
//! among facilities in proportion to where the area's sampled demand points
//! were assigned, then summed per facility.  Disconnected points are
//! excluded from both numerator and denominator; an area whose points are
//! all disconnected (or that has no points at all) simply contributes
//! nothing.

use std::collections::BTreeMap;

use ca_core::{DemandPoint, FacilityId};

use crate::assign::Assignment;
use crate::demographics::{AreaDemographics, IncidenceRates};

/// Estimated absolute and relative caseload for one facility.
#[derive(Clone, Debug, PartialEq)]
pub struct CaseloadEstimate {
    pub facility: FacilityId,
    /// Expected cases attributed to this facility across all areas.
    pub cases: f64,
    /// Percentage share of the total assigned caseload; 0 when the total
    /// caseload is zero.
    pub share_pct: f64,
}

/// Estimate the caseload per facility.
///
/// `points` and `assignments` are parallel slices.  Points without an area
/// key carry no demographic weight and are skipped.  Returns one estimate
/// per facility id in `0..n_facilities`, including zero rows for facilities
/// that won nothing.
pub fn aggregate(
    points: &[DemandPoint],
    assignments: &[Assignment],
    demographics: &AreaDemographics,
    rates: &IncidenceRates,
    n_facilities: usize,
) -> Vec<CaseloadEstimate> {
    assert_eq!(points.len(), assignments.len(), "points/assignments length mismatch");

    // Per-area tallies of assigned points.  BTreeMap gives a fixed area
    // iteration order, which keeps floating-point summation reproducible.
    let mut area_facility: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    let mut area_total: BTreeMap<&str, usize> = BTreeMap::new();

    for (point, assignment) in points.iter().zip(assignments) {
        let (Some(area), Assignment::Assigned(f)) = (point.area.as_deref(), assignment) else {
            continue;
        };
        area_facility.entry(area).or_insert_with(|| vec![0; n_facilities])[f.index()] += 1;
        *area_total.entry(area).or_insert(0) += 1;
    }

    // Split each area's expected events by its facility proportions.
    let mut cases = vec![0.0f64; n_facilities];
    for (&area, counts) in &area_facility {
        let total = area_total[area];
        if total == 0 {
            continue;
        }
        let expected = demographics.expected_cases(rates, area);
        for (i, &count) in counts.iter().enumerate() {
            if count > 0 {
                cases[i] += expected * (count as f64 / total as f64);
            }
        }
    }

    let grand_total: f64 = cases.iter().sum();
    log::debug!(
        "caseload aggregated: {:.3} expected cases over {} areas",
        grand_total,
        area_facility.len(),
    );

    cases
        .into_iter()
        .enumerate()
        .map(|(i, c)| CaseloadEstimate {
            facility: FacilityId(i as u32),
            cases: c,
            share_pct: if grand_total > 0.0 { 100.0 * c / grand_total } else { 0.0 },
        })
        .collect()
}
