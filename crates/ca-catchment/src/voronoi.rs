//! Planar Voronoi tessellation by half-plane clipping.
//!
//! Each cell starts as the bounding rectangle and is cut down by the
//! perpendicular-bisector half-plane against every other site, leaving
//! exactly the locus nearer to its own site.  O(n² · k) for n sites and
//! cells of k vertices — entirely adequate for sampled demand points, and
//! immune to the collinear-site degeneracies a Delaunay dual would have to
//! special-case.
//!
//! # Preconditions and ordering
//!
//! Sites must be pairwise distinct (the partitioner deduplicates first) and
//! strictly inside `bounds`.  The returned cells are **not** in site order —
//! callers must match cells back to sites by containment, which
//! [`crate::partition::match_cells_to_sites`] does.

use geo::{Coord, LineString, Polygon, Rect};

/// Voronoi cell per site, clipped to `bounds`.  Cell order is unspecified.
pub fn tessellate(sites: &[Coord<f64>], bounds: &Rect<f64>) -> Vec<Polygon<f64>> {
    let corners = [
        bounds.min(),
        Coord { x: bounds.max().x, y: bounds.min().y },
        bounds.max(),
        Coord { x: bounds.min().x, y: bounds.max().y },
    ];

    let mut cells: Vec<Polygon<f64>> = sites
        .iter()
        .map(|&site| {
            let mut cell: Vec<Coord<f64>> = corners.to_vec();
            for &other in sites {
                if other == site {
                    continue;
                }
                cell = clip_half_plane(&cell, site, other);
                if cell.is_empty() {
                    break;
                }
            }
            Polygon::new(LineString::from(cell), vec![])
        })
        .collect();

    // Emit in a spatial order unrelated to the input, as any external
    // polygon generator would.
    cells.sort_by(|a, b| {
        let ca = vertex_mean(a);
        let cb = vertex_mean(b);
        ca.y.total_cmp(&cb.y).then(ca.x.total_cmp(&cb.x))
    });
    cells
}

/// Sutherland–Hodgman clip of `poly` by the half-plane of points at least
/// as near to `site` as to `other`.
fn clip_half_plane(poly: &[Coord<f64>], site: Coord<f64>, other: Coord<f64>) -> Vec<Coord<f64>> {
    let mid = Coord { x: (site.x + other.x) * 0.5, y: (site.y + other.y) * 0.5 };
    let dir = Coord { x: other.x - site.x, y: other.y - site.y };
    // g(p) ≤ 0 on the site's side of the bisector.
    let g = |p: Coord<f64>| (p.x - mid.x) * dir.x + (p.y - mid.y) * dir.y;

    let mut out = Vec::with_capacity(poly.len() + 1);
    for i in 0..poly.len() {
        let cur = poly[i];
        let nxt = poly[(i + 1) % poly.len()];
        let gc = g(cur);
        let gn = g(nxt);

        if gc <= 0.0 {
            out.push(cur);
        }
        if (gc < 0.0 && gn > 0.0) || (gc > 0.0 && gn < 0.0) {
            let t = gc / (gc - gn);
            out.push(Coord {
                x: cur.x + t * (nxt.x - cur.x),
                y: cur.y + t * (nxt.y - cur.y),
            });
        }
    }
    out
}

fn vertex_mean(polygon: &Polygon<f64>) -> Coord<f64> {
    let pts = polygon.exterior();
    let n = pts.0.len().max(1) as f64;
    let sum = pts
        .0
        .iter()
        .fold(Coord { x: 0.0, y: 0.0 }, |acc, c| Coord { x: acc.x + c.x, y: acc.y + c.y });
    Coord { x: sum.x / n, y: sum.y / n }
}
