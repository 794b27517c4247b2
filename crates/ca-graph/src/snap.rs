//! Node locator — snapping arbitrary coordinates onto the graph.
//!
//! A query point snaps to its nearest vertex by planar distance.  Whether
//! the snap is *usable* depends on connectivity: only vertices in a
//! weakly-connected component that contains at least one facility vertex can
//! ever reach a facility, so everything else is marked disconnected up
//! front.  Several query points snapping to the same vertex is normal
//! (expected for block-level address samples) and needs no special handling.

use rustc_hash::FxHashSet;

use ca_core::{GeoPoint, VertexId};

use crate::graph::StreetGraph;

/// Outcome of snapping one query point.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Snap {
    /// Nearest vertex shares a component with at least one facility.
    Connected(VertexId),
    /// Snapped, but no facility is reachable from this vertex.
    Disconnected(VertexId),
    /// No vertex within the configured maximum snap radius.  Recoverable;
    /// treated as disconnected downstream.
    Unsnapped,
}

impl Snap {
    /// The snapped vertex, if any.
    pub fn vertex(self) -> Option<VertexId> {
        match self {
            Snap::Connected(v) | Snap::Disconnected(v) => Some(v),
            Snap::Unsnapped => None,
        }
    }

    pub fn is_connected(self) -> bool {
        matches!(self, Snap::Connected(_))
    }
}

/// Snap each point to its nearest graph vertex and classify connectivity.
///
/// `facility_vertices` are the already-snapped facility locations; a point
/// is `Connected` only if its vertex lies in one of their components.
/// `max_snap_m`, when set, is the largest acceptable great-circle distance
/// between a point and its snapped vertex — anything farther is
/// [`Snap::Unsnapped`].
pub fn snap_points(
    graph: &StreetGraph,
    points: impl IntoIterator<Item = GeoPoint>,
    facility_vertices: &[VertexId],
    max_snap_m: Option<f64>,
) -> Vec<Snap> {
    let facility_components: FxHashSet<u32> = facility_vertices
        .iter()
        .map(|&v| graph.component(v))
        .collect();

    points
        .into_iter()
        .map(|pos| {
            let Some(vertex) = graph.nearest_vertex(pos) else {
                return Snap::Unsnapped;
            };
            if let Some(max_m) = max_snap_m {
                let d = pos.distance_m(graph.vertex_pos[vertex.index()]);
                if d > max_m {
                    log::debug!("point {pos} is {d:.0} m from the nearest vertex, beyond the {max_m:.0} m snap radius");
                    return Snap::Unsnapped;
                }
            }
            if facility_components.contains(&graph.component(vertex)) {
                Snap::Connected(vertex)
            } else {
                Snap::Disconnected(vertex)
            }
        })
        .collect()
}
