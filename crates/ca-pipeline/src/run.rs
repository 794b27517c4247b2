//! The pipeline context object and run loop.
//!
//! One `CatchmentPipeline` holds everything a run needs — there is no
//! module-level "current computation" state anywhere in the toolkit.  A run
//! is a one-shot batch: validate CRS tags, build the graph, snap, route,
//! assign, then fan out into the independent geometry and statistics
//! branches.  Nothing is retried internally; every stage is a pure function
//! of its inputs, so a retry could only reproduce the same outcome.

use rustc_hash::FxHashMap;

use ca_catchment::{Catchment, partition};
use ca_core::{GeoPoint, ModeProfile, VertexId};
use ca_demand::{
    AreaDemographics, Assignment, AssignmentSummary, CaseloadEstimate, IncidenceRates, aggregate,
    assign, summarize,
};
use ca_graph::{GraphError, Snap, StreetGraphBuilder, snap_points};
use ca_route::{CancelToken, DistanceMatrix, shortest_distances};

use crate::config::PipelineConfig;
use crate::input::{DemandData, FacilityData, StreetData, StudyBoundary};
use crate::{PipelineError, PipelineResult};

/// Everything produced by one run.
#[derive(Clone, Debug)]
pub struct RunOutput {
    /// Demand-point × facility network distances; disconnected rows are
    /// entirely unreachable.
    pub matrix: DistanceMatrix,
    /// Snap outcome per demand point (diagnostic).
    pub snaps: Vec<Snap>,
    /// Nearest-facility label per demand point.
    pub assignments: Vec<Assignment>,
    /// One catchment polygon per facility with connected demand.
    pub catchments: Vec<Catchment>,
    /// Estimated caseload per facility.
    pub caseload: Vec<CaseloadEstimate>,
    /// Diagnostic counts for the reporting layer.
    pub summary: AssignmentSummary,
}

/// The end-to-end catchment computation over one set of inputs.
pub struct CatchmentPipeline {
    streets: StreetData,
    facilities: FacilityData,
    demand: DemandData,
    boundary: StudyBoundary,
    demographics: AreaDemographics,
    rates: IncidenceRates,
    profile: ModeProfile,
    config: PipelineConfig,
}

impl CatchmentPipeline {
    pub fn new(
        streets: StreetData,
        facilities: FacilityData,
        demand: DemandData,
        boundary: StudyBoundary,
        demographics: AreaDemographics,
        rates: IncidenceRates,
        profile: ModeProfile,
    ) -> Self {
        Self {
            streets,
            facilities,
            demand,
            boundary,
            demographics,
            rates,
            profile,
            config: PipelineConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PipelineConfig) -> Self {
        self.config = config;
        self
    }

    /// Execute the full pipeline.
    ///
    /// Raising `cancel` stops the distance stage before its next source is
    /// dispatched; a cancelled run returns an error, never partial output.
    pub fn run(&self, cancel: &CancelToken) -> PipelineResult<RunOutput> {
        self.check_crs()?;

        // ── Graph build ───────────────────────────────────────────────────
        let mut builder = StreetGraphBuilder::new(self.streets.crs);
        for segment in &self.streets.segments {
            builder.add_segment(segment, &self.profile);
        }
        let graph = builder.build()?;
        log::info!(
            "graph: {} vertices, {} routable edges ({} non-routable dropped)",
            graph.vertex_count(),
            graph.edge_count(),
            graph.dropped_non_routable(),
        );

        // ── Facility snapping ─────────────────────────────────────────────
        // `build` refuses empty graphs, so nearest_vertex cannot miss; the
        // error mapping is belt and braces rather than a reachable path.
        let facility_vertices: Vec<VertexId> = self
            .facilities
            .facilities
            .iter()
            .map(|f| {
                graph
                    .nearest_vertex(f.pos)
                    .ok_or(GraphError::NoRoutableEdges)
            })
            .collect::<Result<_, _>>()?;
        let n_facilities = facility_vertices.len();

        // ── Demand snapping + straight-line pre-filter ────────────────────
        let positions: Vec<GeoPoint> = self.demand.points.iter().map(|p| p.pos).collect();
        let snaps = snap_points(
            &graph,
            positions.iter().copied(),
            &facility_vertices,
            self.config.max_snap_m,
        );

        let prefiltered: Vec<bool> = match self.config.prefilter_radius_m {
            Some(radius) => positions
                .iter()
                .map(|p| {
                    self.facilities
                        .facilities
                        .iter()
                        .all(|f| p.distance_m(f.pos) > radius)
                })
                .collect(),
            None => vec![false; positions.len()],
        };
        let prefiltered_out = prefiltered.iter().filter(|&&x| x).count();
        if prefiltered_out > 0 {
            log::info!("pre-filter removed {prefiltered_out} demand points before routing");
        }

        // ── Distance matrix ───────────────────────────────────────────────
        // Batch by shared snap vertex: one Dijkstra per distinct source.
        let mut row_of_vertex: FxHashMap<VertexId, usize> = FxHashMap::default();
        let mut sources: Vec<VertexId> = Vec::new();
        for (i, snap) in snaps.iter().enumerate() {
            if prefiltered[i] {
                continue;
            }
            if let Snap::Connected(v) = snap {
                row_of_vertex.entry(*v).or_insert_with(|| {
                    sources.push(*v);
                    sources.len() - 1
                });
            }
        }

        let vertex_matrix = shortest_distances(&graph, &sources, &facility_vertices, cancel)?;

        // Expand per-vertex rows back to per-point rows; disconnected and
        // pre-filtered points keep all-unreachable rows.
        let mut matrix =
            DistanceMatrix::filled_unreachable(self.demand.points.len(), n_facilities);
        for (i, snap) in snaps.iter().enumerate() {
            if prefiltered[i] {
                continue;
            }
            if let Snap::Connected(v) = snap {
                let row = vertex_matrix.row(row_of_vertex[v]);
                for (c, &value) in row.iter().enumerate() {
                    matrix.set(i, c, value);
                }
            }
        }

        // ── Assignment ────────────────────────────────────────────────────
        let assignments = assign(&matrix);

        // ── Geometry and statistics branches ──────────────────────────────
        let (catchments, (caseload, mut summary)) =
            self.run_branches(&positions, &assignments, n_facilities);
        let catchments = catchments?;
        summary.prefiltered_out = prefiltered_out;

        log::info!(
            "run complete: {} facilities, {} demand points ({} disconnected)",
            n_facilities,
            self.demand.points.len(),
            summary.disconnected,
        );

        Ok(RunOutput { matrix, snaps, assignments, catchments, caseload, summary })
    }

    /// The partition and aggregation stages are independent once the
    /// assignment exists; under the `parallel` feature they run
    /// concurrently.
    #[cfg(feature = "parallel")]
    fn run_branches(
        &self,
        positions: &[GeoPoint],
        assignments: &[Assignment],
        n_facilities: usize,
    ) -> (
        Result<Vec<Catchment>, ca_catchment::CatchmentError>,
        (Vec<CaseloadEstimate>, AssignmentSummary),
    ) {
        rayon::join(
            || partition(positions, assignments, &self.boundary.geometry),
            || {
                (
                    aggregate(
                        &self.demand.points,
                        assignments,
                        &self.demographics,
                        &self.rates,
                        n_facilities,
                    ),
                    summarize(assignments, n_facilities),
                )
            },
        )
    }

    #[cfg(not(feature = "parallel"))]
    fn run_branches(
        &self,
        positions: &[GeoPoint],
        assignments: &[Assignment],
        n_facilities: usize,
    ) -> (
        Result<Vec<Catchment>, ca_catchment::CatchmentError>,
        (Vec<CaseloadEstimate>, AssignmentSummary),
    ) {
        (
            partition(positions, assignments, &self.boundary.geometry),
            (
                aggregate(
                    &self.demand.points,
                    assignments,
                    &self.demographics,
                    &self.rates,
                    n_facilities,
                ),
                summarize(assignments, n_facilities),
            ),
        )
    }

    /// All bundles must agree on the coordinate system before any distance
    /// is computed.
    fn check_crs(&self) -> PipelineResult<()> {
        let expected = self.streets.crs;
        for (input, found) in [
            ("facility list", self.facilities.crs),
            ("demand points", self.demand.crs),
            ("study boundary", self.boundary.crs),
        ] {
            if found != expected {
                return Err(PipelineError::CrsMismatch { input, found, expected });
            }
        }
        Ok(())
    }
}
