//! Unit tests for ca-catchment.

#[cfg(test)]
mod helpers {
    use geo::{LineString, MultiPolygon, Polygon};

    use ca_core::GeoPoint;

    /// Axis-aligned square boundary.
    pub fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![Polygon::new(
            LineString::from(vec![(x0, y0), (x1, y0), (x1, y1), (x0, y1), (x0, y0)]),
            vec![],
        )])
    }

    pub fn pt(lon: f64, lat: f64) -> GeoPoint {
        GeoPoint::new(lon, lat)
    }
}

#[cfg(test)]
mod voronoi {
    use geo::{Area, Contains, Coord, Point, Rect};

    use crate::tessellate;

    #[test]
    fn cells_partition_the_frame() {
        let bounds = Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 10.0, y: 10.0 });
        let sites = vec![
            Coord { x: 2.0, y: 3.0 },
            Coord { x: 7.0, y: 2.0 },
            Coord { x: 5.0, y: 8.0 },
        ];
        let cells = tessellate(&sites, &bounds);
        assert_eq!(cells.len(), 3);

        let total: f64 = cells.iter().map(|c| c.unsigned_area()).sum();
        assert!((total - 100.0).abs() < 1e-9, "cells must tile the frame, got {total}");
    }

    #[test]
    fn every_site_lies_in_exactly_one_cell() {
        let bounds = Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 10.0, y: 10.0 });
        let sites = vec![
            Coord { x: 1.0, y: 1.0 },
            Coord { x: 9.0, y: 1.0 },
            Coord { x: 9.0, y: 9.0 },
            Coord { x: 1.0, y: 9.0 },
        ];
        let cells = tessellate(&sites, &bounds);

        for &site in &sites {
            let containing = cells
                .iter()
                .filter(|c| c.contains(&Point::from(site)))
                .count();
            assert_eq!(containing, 1);
        }
    }

    #[test]
    fn collinear_sites_produce_strips() {
        // A Delaunay-based tessellation degenerates here; half-plane
        // clipping must not.
        let bounds = Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 10.0, y: 10.0 });
        let sites = vec![
            Coord { x: 2.0, y: 5.0 },
            Coord { x: 5.0, y: 5.0 },
            Coord { x: 8.0, y: 5.0 },
        ];
        let cells = tessellate(&sites, &bounds);
        let total: f64 = cells.iter().map(|c| c.unsigned_area()).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }
}

#[cfg(test)]
mod matching {
    use geo::{Contains, Coord, Point, Rect};

    use crate::{CatchmentError, match_cells_to_sites, tessellate};

    #[test]
    fn matching_survives_arbitrary_cell_order() {
        let bounds = Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 10.0, y: 10.0 });
        let sites = vec![
            Coord { x: 1.0, y: 2.0 },
            Coord { x: 8.0, y: 1.0 },
            Coord { x: 4.0, y: 9.0 },
            Coord { x: 6.0, y: 5.0 },
        ];
        let mut cells = tessellate(&sites, &bounds);
        cells.reverse(); // any order must work

        let matched = match_cells_to_sites(&sites, &cells).unwrap();

        // Each site really is inside its matched cell, and no cell is
        // claimed twice.
        for (i, &site) in sites.iter().enumerate() {
            assert!(cells[matched[i]].contains(&Point::from(site)));
        }
        let mut seen = matched.clone();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), sites.len());
    }

    #[test]
    fn site_outside_all_cells_is_an_error() {
        let bounds = Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 10.0, y: 10.0 });
        let sites = vec![Coord { x: 1.0, y: 1.0 }, Coord { x: 9.0, y: 9.0 }];
        let cells = tessellate(&sites, &bounds);

        let stray = vec![Coord { x: 50.0, y: 50.0 }];
        assert!(matches!(
            match_cells_to_sites(&stray, &cells),
            Err(CatchmentError::CellMatch(0))
        ));
    }
}

#[cfg(test)]
mod partition {
    use geo::Area;

    use ca_core::FacilityId;
    use ca_demand::Assignment;

    use super::helpers::{pt, square};
    use crate::{CatchmentError, partition};

    const F0: Assignment = Assignment::Assigned(FacilityId(0));
    const F1: Assignment = Assignment::Assigned(FacilityId(1));
    const F2: Assignment = Assignment::Assigned(FacilityId(2));

    #[test]
    fn two_facilities_split_the_boundary() {
        let boundary = square(0.0, 0.0, 10.0, 10.0);
        let points = vec![pt(2.5, 5.0), pt(7.5, 5.0)];
        let catchments = partition(&points, &[F0, F1], &boundary).unwrap();

        assert_eq!(catchments.len(), 2);
        assert_eq!(catchments[0].facility, FacilityId(0));
        assert_eq!(catchments[1].facility, FacilityId(1));
        // The bisector x = 5 halves the square.
        assert!((catchments[0].geometry.unsigned_area() - 50.0).abs() < 1e-6);
        assert!((catchments[1].geometry.unsigned_area() - 50.0).abs() < 1e-6);
    }

    #[test]
    fn catchments_are_pairwise_disjoint_and_cover() {
        use geo::BooleanOps;

        let boundary = square(0.0, 0.0, 10.0, 10.0);
        let points = vec![pt(2.0, 2.0), pt(8.0, 2.0), pt(5.0, 8.0)];
        let catchments = partition(&points, &[F0, F1, F2], &boundary).unwrap();
        assert_eq!(catchments.len(), 3);

        for a in 0..catchments.len() {
            for b in a + 1..catchments.len() {
                let overlap = catchments[a]
                    .geometry
                    .intersection(&catchments[b].geometry)
                    .unsigned_area();
                assert!(overlap < 1e-9, "catchments {a} and {b} overlap by {overlap}");
            }
        }

        let covered: f64 = catchments.iter().map(|c| c.geometry.unsigned_area()).sum();
        assert!((covered - 100.0).abs() < 1e-6, "expected full coverage, got {covered}");
    }

    #[test]
    fn collinear_demand_points_are_fine() {
        let boundary = square(0.0, 0.0, 10.0, 10.0);
        let points = vec![pt(2.0, 5.0), pt(5.0, 5.0), pt(8.0, 5.0)];
        let catchments = partition(&points, &[F0, F1, F2], &boundary).unwrap();

        // Bisectors at x = 3.5 and x = 6.5 cut the square into strips.
        assert!((catchments[0].geometry.unsigned_area() - 35.0).abs() < 1e-6);
        assert!((catchments[1].geometry.unsigned_area() - 30.0).abs() < 1e-6);
        assert!((catchments[2].geometry.unsigned_area() - 35.0).abs() < 1e-6);
    }

    #[test]
    fn disconnected_area_stays_unattributed() {
        let boundary = square(0.0, 0.0, 10.0, 10.0);
        let points = vec![pt(2.5, 5.0), pt(7.5, 5.0)];
        let catchments =
            partition(&points, &[F0, Assignment::Disconnected], &boundary).unwrap();

        assert_eq!(catchments.len(), 1);
        assert_eq!(catchments[0].facility, FacilityId(0));
        assert!((catchments[0].geometry.unsigned_area() - 50.0).abs() < 1e-6);
    }

    #[test]
    fn coincident_points_change_nothing() {
        let boundary = square(0.0, 0.0, 10.0, 10.0);

        let deduped = partition(&[pt(2.5, 5.0), pt(7.5, 5.0)], &[F0, F1], &boundary).unwrap();
        let doubled = partition(
            &[pt(2.5, 5.0), pt(2.5, 5.0), pt(7.5, 5.0)],
            &[F0, F0, F1],
            &boundary,
        )
        .unwrap();

        assert_eq!(deduped.len(), doubled.len());
        for (a, b) in deduped.iter().zip(&doubled) {
            assert_eq!(a.facility, b.facility);
            assert!((a.geometry.unsigned_area() - b.geometry.unsigned_area()).abs() < 1e-9);
        }
    }

    #[test]
    fn no_sites_is_fatal() {
        let boundary = square(0.0, 0.0, 10.0, 10.0);
        assert!(matches!(
            partition(&[], &[], &boundary),
            Err(CatchmentError::NoSites)
        ));
    }

    #[test]
    fn catchment_is_clipped_to_the_boundary() {
        // Sites near the frame edge: without clipping, cells would spill
        // far outside the study region.
        let boundary = square(0.0, 0.0, 10.0, 10.0);
        let points = vec![pt(0.5, 0.5), pt(9.5, 9.5)];
        let catchments = partition(&points, &[F0, F1], &boundary).unwrap();

        let total: f64 = catchments.iter().map(|c| c.geometry.unsigned_area()).sum();
        assert!((total - 100.0).abs() < 1e-6);
    }
}
