//! CSV output backend.
//!
//! Two tables, consumable by any spreadsheet or reporting layer:
//! the caseload estimate per facility, and the diagnostic demand-point
//! counts.

use std::path::Path;

use csv::Writer;

use ca_core::Facility;
use ca_demand::{AssignmentSummary, CaseloadEstimate};

use crate::OutputResult;

/// Write the per-facility caseload table.
pub fn write_caseload_csv(
    path: &Path,
    facilities: &[Facility],
    estimates: &[CaseloadEstimate],
) -> OutputResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["facility_id", "facility_name", "estimated_cases", "share_pct"])?;
    for e in estimates {
        w.write_record(&[
            e.facility.0.to_string(),
            facilities[e.facility.index()].name.clone(),
            format!("{:.4}", e.cases),
            format!("{:.2}", e.share_pct),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Write the diagnostic counts: demand points per facility, the
/// disconnected total, and (when the pre-filter was active) how many of the
/// disconnected never reached network computation.
pub fn write_summary_csv(
    path: &Path,
    facilities: &[Facility],
    summary: &AssignmentSummary,
) -> OutputResult<()> {
    let mut w = Writer::from_path(path)?;
    w.write_record(["category", "demand_points"])?;
    for (i, &count) in summary.per_facility.iter().enumerate() {
        w.write_record(&[facilities[i].name.clone(), count.to_string()])?;
    }
    w.write_record(&["disconnected".to_string(), summary.disconnected.to_string()])?;
    if summary.prefiltered_out > 0 {
        w.write_record(&[
            "beyond_prefilter_radius".to_string(),
            summary.prefiltered_out.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}
