//! Street graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing edges.
//! Given a `VertexId v`, its outgoing edges occupy the slice:
//!
//! ```text
//! edge_from[ vertex_out_start[v] .. vertex_out_start[v+1] ]
//! ```
//!
//! All edge arrays (`edge_from`, `edge_to`, `edge_length_m`, `edge_cost`)
//! are sorted by source vertex and indexed by `EdgeId`, so iterating a
//! vertex's outgoing edges is a contiguous memory scan — what Dijkstra's
//! inner loop wants.
//!
//! Only **routable** edges are present: atomic edges whose travel-mode cost
//! came out non-routable are dropped by [`StreetGraphBuilder::build`] before
//! any of these arrays exist, so no cost arithmetic ever sees the sentinel.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) maps `(lon, lat)` to the nearest `VertexId`, used
//! to snap facilities and demand points onto the graph.

use rstar::{AABB, PointDistance, RTree, RTreeObject};
use rustc_hash::FxHashMap;

use ca_core::{Crs, EdgeId, GeoPoint, ModeProfile, VertexId};

use crate::segment::RawSegment;
use crate::{GraphError, GraphResult};

// ── R-tree vertex entry ───────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lon, lat]` point with
/// the associated `VertexId`.
#[derive(Clone)]
struct VertexEntry {
    point: [f64; 2], // [lon, lat]
    id: VertexId,
}

impl RTreeObject for VertexEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for VertexEntry {
    /// Squared Euclidean distance in lon/lat space.  Snapping only compares
    /// candidates against each other, so the planar form suffices.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dx = self.point[0] - point[0];
        let dy = self.point[1] - point[1];
        dx * dx + dy * dy
    }
}

// ── StreetGraph ───────────────────────────────────────────────────────────────

/// Directed weighted street graph in CSR format, with per-vertex component
/// labels and a spatial index for snapping.
///
/// Immutable once built.  All edge arrays are `pub` for direct indexed
/// access on hot paths; construct only via [`StreetGraphBuilder`].
pub struct StreetGraph {
    crs: Crs,

    // ── Vertex data ───────────────────────────────────────────────────────
    /// Geographic position of each vertex.  Indexed by `VertexId`.
    pub vertex_pos: Vec<GeoPoint>,

    // ── CSR edge adjacency ────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing edges of vertex `v` are at EdgeIds
    /// `vertex_out_start[v] .. vertex_out_start[v+1]`.
    /// Length = `vertex_count + 1`.
    pub vertex_out_start: Vec<u32>,

    // ── Edge data (indexed by EdgeId = position in sorted order) ──────────
    /// Source vertex of each edge.
    pub edge_from: Vec<VertexId>,

    /// Destination vertex of each edge.
    pub edge_to: Vec<VertexId>,

    /// Physical length of each edge in metres.
    pub edge_length_m: Vec<f64>,

    /// Mode-weighted traversal cost (length × multiplier).  Always finite.
    pub edge_cost: Vec<f64>,

    // ── Connectivity ──────────────────────────────────────────────────────
    /// Weakly-connected component label per vertex.
    component: Vec<u32>,

    /// Atomic edges dropped by the travel-mode filter.
    dropped_non_routable: usize,

    // ── Spatial index ─────────────────────────────────────────────────────
    spatial_idx: RTree<VertexEntry>,
}

impl StreetGraph {
    /// CRS tag the graph coordinates were supplied in.
    pub fn crs(&self) -> Crs {
        self.crs
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn vertex_count(&self) -> usize {
        self.vertex_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_pos.is_empty()
    }

    /// Atomic edges that were excluded as non-routable for the travel mode.
    pub fn dropped_non_routable(&self) -> usize {
        self.dropped_non_routable
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of all outgoing edges from `vertex`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_edges(&self, vertex: VertexId) -> impl Iterator<Item = EdgeId> + '_ {
        let start = self.vertex_out_start[vertex.index()] as usize;
        let end = self.vertex_out_start[vertex.index() + 1] as usize;
        (start..end).map(|i| EdgeId(i as u32))
    }

    /// Out-degree of `vertex`.
    #[inline]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        let start = self.vertex_out_start[vertex.index()] as usize;
        let end = self.vertex_out_start[vertex.index() + 1] as usize;
        end - start
    }

    // ── Connectivity ──────────────────────────────────────────────────────

    /// Weakly-connected component label of `vertex`.  Labels are arbitrary
    /// but stable for a given build.
    #[inline]
    pub fn component(&self, vertex: VertexId) -> u32 {
        self.component[vertex.index()]
    }

    /// `true` if both vertices lie in the same weakly-connected component.
    pub fn same_component(&self, a: VertexId, b: VertexId) -> bool {
        self.component(a) == self.component(b)
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// The nearest vertex to `pos` by planar distance.
    ///
    /// Distance ties are broken by the lowest `VertexId` so snapping is
    /// deterministic.  Returns `None` only for an empty graph (which
    /// [`StreetGraphBuilder::build`] already refuses to produce).
    pub fn nearest_vertex(&self, pos: GeoPoint) -> Option<VertexId> {
        let mut iter = self
            .spatial_idx
            .nearest_neighbor_iter_with_distance_2(&[pos.lon, pos.lat]);
        let (first, best_d2) = iter.next()?;
        let mut best = first.id;
        for (entry, d2) in iter {
            if d2 > best_d2 {
                break;
            }
            if entry.id < best {
                best = entry.id;
            }
        }
        Some(best)
    }
}

// ── StreetGraphBuilder ────────────────────────────────────────────────────────

/// Construct a [`StreetGraph`] from raw segments, then call
/// [`build`](Self::build).
///
/// Coordinates are quantised to 1e-7° (≈ 1 cm) and deduplicated, so
/// segments sharing an endpoint coordinate share a vertex — this is what
/// stitches individual segments into a connected network.  Vertex ids are
/// assigned sequentially in first-seen order, making construction
/// deterministic for identical input.
///
/// # Example
///
/// ```
/// use ca_core::{Crs, GeoPoint, ModeProfile};
/// use ca_graph::{RawSegment, StreetGraphBuilder};
///
/// let seg = RawSegment::new(
///     vec![GeoPoint::new(13.40, 52.52), GeoPoint::new(13.41, 52.52)],
///     "residential",
/// );
/// let mut b = StreetGraphBuilder::new(Crs::WGS84);
/// b.add_segment(&seg, &ModeProfile::walking());
/// let graph = b.build().unwrap();
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_count(), 2); // both directions
/// ```
pub struct StreetGraphBuilder {
    crs: Crs,
    vertices: Vec<GeoPoint>,
    /// Quantised coordinate → vertex, for endpoint deduplication.
    keys: FxHashMap<(i64, i64), VertexId>,
    raw_edges: Vec<RawEdge>,
}

struct RawEdge {
    from: VertexId,
    to: VertexId,
    length_m: f64,
    /// `f64::INFINITY` marks a non-routable edge; filtered in `build`.
    cost: f64,
}

impl StreetGraphBuilder {
    pub fn new(crs: Crs) -> Self {
        Self {
            crs,
            vertices: Vec::new(),
            keys: FxHashMap::default(),
            raw_edges: Vec::new(),
        }
    }

    /// The vertex at `pos`, creating it if this coordinate is new.
    pub fn vertex_at(&mut self, pos: GeoPoint) -> VertexId {
        let key = pos.quantised();
        if let Some(&id) = self.keys.get(&key) {
            return id;
        }
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(pos);
        self.keys.insert(key, id);
        id
    }

    /// Add a single **directed** edge with an explicit cost.
    ///
    /// `cost` may be `f64::INFINITY` to mark the edge non-routable; such
    /// edges are counted and dropped by [`build`](Self::build).
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, length_m: f64, cost: f64) {
        self.raw_edges.push(RawEdge { from, to, length_m, cost });
    }

    /// Add edges in **both directions** for an undirected street segment.
    /// Road direction is out of scope, so this is the common case.
    pub fn add_link(&mut self, a: VertexId, b: VertexId, length_m: f64, cost: f64) {
        self.add_edge(a, b, length_m, cost);
        self.add_edge(b, a, length_m, cost);
    }

    /// Decompose a raw segment into atomic edges between consecutive
    /// coordinates, weighting each by the mode profile.
    ///
    /// Classifications the profile excludes still produce (sentinel-cost)
    /// edges here; the filter in [`build`](Self::build) removes them.  A
    /// segment with fewer than two points contributes nothing.
    pub fn add_segment(&mut self, segment: &RawSegment, profile: &ModeProfile) {
        let multiplier = profile.multiplier(&segment.class);
        for window in segment.points.windows(2) {
            let a = self.vertex_at(window[0]);
            let b = self.vertex_at(window[1]);
            let length_m = window[0].distance_m(window[1]);
            let cost = match multiplier {
                Some(m) => length_m * m,
                None => f64::INFINITY,
            };
            self.add_link(a, b, length_m, cost);
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Look up the position of a vertex added earlier.
    pub fn vertex_pos(&self, id: VertexId) -> GeoPoint {
        self.vertices[id.index()]
    }

    /// Consume the builder and produce a [`StreetGraph`].
    ///
    /// Filters non-routable edges, sorts the survivors by source vertex,
    /// builds the CSR arrays, labels weakly-connected components, and
    /// bulk-loads the R-tree.
    ///
    /// # Errors
    ///
    /// [`GraphError::MissingVertex`] if an edge added via
    /// [`add_edge`](Self::add_edge) references an unknown vertex;
    /// [`GraphError::NoRoutableEdges`] if nothing survives the mode filter —
    /// no routing is possible and the run cannot continue.
    pub fn build(self) -> GraphResult<StreetGraph> {
        let vertex_count = self.vertices.len();

        for e in &self.raw_edges {
            for v in [e.from, e.to] {
                if v.index() >= vertex_count {
                    return Err(GraphError::MissingVertex(v));
                }
            }
        }

        // Drop sentinel-cost edges before anything does arithmetic on costs.
        let total = self.raw_edges.len();
        let mut routable: Vec<RawEdge> = self
            .raw_edges
            .into_iter()
            .filter(|e| e.cost.is_finite())
            .collect();
        let dropped_non_routable = total - routable.len();

        if routable.is_empty() {
            return Err(GraphError::NoRoutableEdges);
        }

        // Sort edges by source vertex for CSR construction.
        routable.sort_by_key(|e| (e.from.0, e.to.0));

        let edge_from: Vec<VertexId> = routable.iter().map(|e| e.from).collect();
        let edge_to: Vec<VertexId> = routable.iter().map(|e| e.to).collect();
        let edge_length_m: Vec<f64> = routable.iter().map(|e| e.length_m).collect();
        let edge_cost: Vec<f64> = routable.iter().map(|e| e.cost).collect();

        // Build CSR row pointer.
        let mut vertex_out_start = vec![0u32; vertex_count + 1];
        for e in &routable {
            vertex_out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=vertex_count {
            vertex_out_start[i] += vertex_out_start[i - 1];
        }
        debug_assert_eq!(vertex_out_start[vertex_count] as usize, routable.len());

        // Weakly-connected components over the routable edge set.
        let mut dsu = DisjointSets::new(vertex_count);
        for e in &routable {
            dsu.union(e.from.index(), e.to.index());
        }
        let component = dsu.labels();

        // Bulk-load R-tree for O(N log N) construction.
        let entries: Vec<VertexEntry> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, &pos)| VertexEntry {
                point: [pos.lon, pos.lat],
                id: VertexId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        log::debug!(
            "street graph built: {} vertices, {} routable edges, {} non-routable dropped",
            vertex_count,
            edge_to.len(),
            dropped_non_routable,
        );

        Ok(StreetGraph {
            crs: self.crs,
            vertex_pos: self.vertices,
            vertex_out_start,
            edge_from,
            edge_to,
            edge_length_m,
            edge_cost,
            component,
            dropped_non_routable,
            spatial_idx,
        })
    }
}

// ── Union-find ────────────────────────────────────────────────────────────────

/// Disjoint-set forest with path halving, used once at build time to label
/// weakly-connected components.
struct DisjointSets {
    parent: Vec<u32>,
}

impl DisjointSets {
    fn new(n: usize) -> Self {
        Self { parent: (0..n as u32).collect() }
    }

    fn find(&mut self, mut x: usize) -> u32 {
        while self.parent[x] as usize != x {
            self.parent[x] = self.parent[self.parent[x] as usize];
            x = self.parent[x] as usize;
        }
        x as u32
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            // Smaller root wins so labels are reproducible.
            let (lo, hi) = if ra < rb { (ra, rb) } else { (rb, ra) };
            self.parent[hi as usize] = lo;
        }
    }

    /// Final component label per element (the root index).
    fn labels(mut self) -> Vec<u32> {
        (0..self.parent.len()).map(|i| self.find(i)).collect()
    }
}
