//! Unit tests for ca-route.

#[cfg(test)]
mod helpers {
    use ca_core::{Crs, GeoPoint, VertexId};
    use ca_graph::{StreetGraph, StreetGraphBuilder};

    /// A line of four vertices with unit-cost links:
    ///
    /// ```text
    /// A —1— B —1— C —1— D
    /// ```
    pub fn line_graph() -> (StreetGraph, [VertexId; 4]) {
        let mut b = StreetGraphBuilder::new(Crs::WGS84);
        let a = b.vertex_at(GeoPoint::new(0.0, 0.0));
        let bb = b.vertex_at(GeoPoint::new(1.0, 0.0));
        let c = b.vertex_at(GeoPoint::new(2.0, 0.0));
        let d = b.vertex_at(GeoPoint::new(3.0, 0.0));
        b.add_link(a, bb, 100.0, 1.0);
        b.add_link(bb, c, 100.0, 1.0);
        b.add_link(c, d, 100.0, 1.0);
        (b.build().unwrap(), [a, bb, c, d])
    }

    /// The line plus an unreachable island vertex pair.
    pub fn line_with_island() -> (StreetGraph, [VertexId; 4], VertexId) {
        let mut b = StreetGraphBuilder::new(Crs::WGS84);
        let a = b.vertex_at(GeoPoint::new(0.0, 0.0));
        let bb = b.vertex_at(GeoPoint::new(1.0, 0.0));
        let c = b.vertex_at(GeoPoint::new(2.0, 0.0));
        let d = b.vertex_at(GeoPoint::new(3.0, 0.0));
        b.add_link(a, bb, 100.0, 1.0);
        b.add_link(bb, c, 100.0, 1.0);
        b.add_link(c, d, 100.0, 1.0);
        let i0 = b.vertex_at(GeoPoint::new(50.0, 0.0));
        let i1 = b.vertex_at(GeoPoint::new(51.0, 0.0));
        b.add_link(i0, i1, 100.0, 1.0);
        (b.build().unwrap(), [a, bb, c, d], i0)
    }
}

#[cfg(test)]
mod engine {
    use ca_core::{Crs, GeoPoint, VertexId};
    use ca_graph::StreetGraphBuilder;

    use crate::{CancelToken, RouteError, shortest_distances};

    #[test]
    fn demand_between_two_facilities() {
        // Facilities at A and D, demand snapped to B: the costs the
        // assigner will compare are 1 (to A) and 2 (to D).
        let (graph, [a, b, _, d]) = super::helpers::line_graph();

        let m = shortest_distances(&graph, &[b], &[a, d], &CancelToken::new()).unwrap();
        assert_eq!(m.get(0, 0), Some(1.0));
        assert_eq!(m.get(0, 1), Some(2.0));
    }

    #[test]
    fn source_equals_target_is_zero() {
        let (graph, [a, ..]) = super::helpers::line_graph();
        let m = shortest_distances(&graph, &[a], &[a], &CancelToken::new()).unwrap();
        assert_eq!(m.get(0, 0), Some(0.0));
    }

    #[test]
    fn unreachable_pair_is_marked_not_failed() {
        let (graph, [a, ..], island) = super::helpers::line_with_island();
        let m = shortest_distances(&graph, &[a], &[island], &CancelToken::new()).unwrap();
        assert_eq!(m.get(0, 0), None);
        assert_eq!(m.row(0)[0], crate::DistanceMatrix::UNREACHABLE);
    }

    #[test]
    fn duplicate_targets_are_supported() {
        // Two facilities sharing one snap vertex get identical columns.
        let (graph, [a, b, ..]) = super::helpers::line_graph();
        let m = shortest_distances(&graph, &[a], &[b, b], &CancelToken::new()).unwrap();
        assert_eq!(m.get(0, 0), Some(1.0));
        assert_eq!(m.get(0, 1), Some(1.0));
    }

    #[test]
    fn enumeration_order_does_not_change_values() {
        let (graph, [a, b, c, d]) = super::helpers::line_graph();
        let cancel = CancelToken::new();

        let fwd = shortest_distances(&graph, &[a, b], &[c, d], &cancel).unwrap();
        let rev = shortest_distances(&graph, &[b, a], &[d, c], &cancel).unwrap();

        assert_eq!(fwd.get(0, 0), rev.get(1, 1)); // a→c
        assert_eq!(fwd.get(0, 1), rev.get(1, 0)); // a→d
        assert_eq!(fwd.get(1, 0), rev.get(0, 1)); // b→c
        assert_eq!(fwd.get(1, 1), rev.get(0, 0)); // b→d
    }

    #[test]
    fn early_exit_matches_full_search() {
        let (graph, [a, b, c, d]) = super::helpers::line_graph();
        let cancel = CancelToken::new();

        // All-targets run settles the whole graph; the single-target run
        // stops after one settle.  Values must agree.
        let full = shortest_distances(&graph, &[a], &[b, c, d], &cancel).unwrap();
        let single = shortest_distances(&graph, &[a], &[d], &cancel).unwrap();
        assert_eq!(full.get(0, 2), single.get(0, 0));
        assert_eq!(single.get(0, 0), Some(3.0));
    }

    #[test]
    fn triangle_inequality_over_finite_triples() {
        let (graph, vertices) = super::helpers::line_graph();
        let cancel = CancelToken::new();
        let m = shortest_distances(&graph, &vertices, &vertices, &cancel).unwrap();

        let n = vertices.len();
        for a in 0..n {
            for b in 0..n {
                for c in 0..n {
                    let (Some(ab), Some(ac), Some(cb)) =
                        (m.get(a, b), m.get(a, c), m.get(c, b))
                    else {
                        continue;
                    };
                    assert!(
                        ab <= ac + cb + 1e-9,
                        "triangle violated: d({a},{b})={ab} > d({a},{c})+d({c},{b})={}",
                        ac + cb,
                    );
                }
            }
        }
    }

    #[test]
    fn asymmetric_costs_are_respected() {
        // One-way edge: a→c exists, c→a does not.
        let mut b = StreetGraphBuilder::new(Crs::WGS84);
        let a = b.vertex_at(GeoPoint::new(0.0, 0.0));
        let c = b.vertex_at(GeoPoint::new(1.0, 0.0));
        b.add_edge(a, c, 100.0, 1.0);
        let graph = b.build().unwrap();

        let cancel = CancelToken::new();
        let m = shortest_distances(&graph, &[a, c], &[a, c], &cancel).unwrap();
        assert_eq!(m.get(0, 1), Some(1.0)); // a→c
        assert_eq!(m.get(1, 0), None); // c→a unreachable
    }

    #[test]
    fn unknown_vertex_is_an_error() {
        let (graph, [a, ..]) = super::helpers::line_graph();
        let bogus = VertexId(99);
        let result = shortest_distances(&graph, &[a], &[bogus], &CancelToken::new());
        assert!(matches!(result, Err(RouteError::UnknownVertex(v)) if v == bogus));
    }

    #[test]
    fn cancelled_before_dispatch_returns_no_matrix() {
        let (graph, [a, b, c, d]) = super::helpers::line_graph();
        let cancel = CancelToken::new();
        cancel.cancel();
        let result = shortest_distances(&graph, &[a, b], &[c, d], &cancel);
        assert!(matches!(result, Err(RouteError::Cancelled)));
    }
}

#[cfg(test)]
mod matrix {
    use crate::DistanceMatrix;

    #[test]
    fn filled_unreachable_is_all_none() {
        let m = DistanceMatrix::filled_unreachable(2, 3);
        for r in 0..2 {
            for c in 0..3 {
                assert_eq!(m.get(r, c), None);
            }
        }
    }

    #[test]
    fn set_and_get() {
        let mut m = DistanceMatrix::filled_unreachable(2, 2);
        m.set(1, 0, 7.5);
        assert_eq!(m.get(1, 0), Some(7.5));
        assert_eq!(m.get(0, 1), None);
        assert_eq!(m.row(1), &[7.5, DistanceMatrix::UNREACHABLE]);
    }

    #[test]
    #[should_panic(expected = "ragged")]
    fn ragged_rows_panic() {
        let _ = DistanceMatrix::from_rows(2, vec![vec![1.0, 2.0], vec![3.0]]);
    }
}
