//! Facility assignment — reducing the distance matrix to one label per
//! demand point.

use ca_core::FacilityId;
use ca_route::DistanceMatrix;

/// Where one demand point's need is attributed.
///
/// Disconnected is a first-class variant, not a sentinel facility id, so it
/// can never be mistaken for a real facility by the aggregation or geometry
/// stages.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Assignment {
    /// Nearest reachable facility by network distance.
    Assigned(FacilityId),
    /// No facility reachable (unsnappable, off-component, or all-unreachable
    /// matrix row).  Participates in nothing but the diagnostic count.
    Disconnected,
}

impl Assignment {
    pub fn facility(self) -> Option<FacilityId> {
        match self {
            Assignment::Assigned(f) => Some(f),
            Assignment::Disconnected => None,
        }
    }

    pub fn is_disconnected(self) -> bool {
        matches!(self, Assignment::Disconnected)
    }
}

/// Pick the nearest facility per matrix row.
///
/// Column `i` of the matrix is facility `FacilityId(i)`.  The minimal finite
/// entry wins; distance ties go to the lowest facility id; rows with no
/// finite entry are `Disconnected`.  Pure — re-running on the same matrix
/// always reproduces the same labels.
pub fn assign(matrix: &DistanceMatrix) -> Vec<Assignment> {
    (0..matrix.n_rows()).map(|r| assign_row(matrix.row(r))).collect()
}

fn assign_row(row: &[f64]) -> Assignment {
    let mut best: Option<(f64, usize)> = None;
    for (i, &d) in row.iter().enumerate() {
        if !d.is_finite() {
            continue;
        }
        // Strict `<` keeps the first (lowest-id) facility on ties.
        if best.is_none_or(|(bd, _)| d < bd) {
            best = Some((d, i));
        }
    }
    match best {
        Some((_, i)) => Assignment::Assigned(FacilityId(i as u32)),
        None => Assignment::Disconnected,
    }
}

// ── Diagnostics ───────────────────────────────────────────────────────────────

/// Per-run diagnostic counts for the reporting layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssignmentSummary {
    /// Demand points assigned to each facility, indexed by `FacilityId`.
    pub per_facility: Vec<usize>,
    /// Demand points in the disconnected category (each counted once).
    pub disconnected: usize,
    /// Of the disconnected, how many the straight-line pre-filter removed
    /// before any network computation.  Zero when the filter is off.
    pub prefiltered_out: usize,
}

/// Tally assignments into per-facility and disconnected counts.
pub fn summarize(assignments: &[Assignment], n_facilities: usize) -> AssignmentSummary {
    let mut per_facility = vec![0usize; n_facilities];
    let mut disconnected = 0usize;
    for a in assignments {
        match a {
            Assignment::Assigned(f) => per_facility[f.index()] += 1,
            Assignment::Disconnected => disconnected += 1,
        }
    }
    AssignmentSummary { per_facility, disconnected, prefiltered_out: 0 }
}
