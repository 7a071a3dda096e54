//! # Convex Hull
//!
//! Incremental 3D convex hull over an arena of oriented triangles.
//!
//! ## Algorithm Overview
//!
//! 1. Bootstrap a tetrahedron from extremal points (see [`bootstrap`])
//! 2. Fix `center` at the tetrahedron centroid; it stays strictly inside
//!    the solid for the hull's whole lifetime
//! 3. Insert the remaining points in input order:
//!    a. Grow the visible region from the most visible triangle across
//!       shared edges (see [`horizon`])
//!    b. Remove it; edges used once by the removed triangles form the horizon
//!    c. Stitch one new triangle from the point to each horizon edge,
//!       oriented against `center`
//!
//! A triangle is visible when `side(p)` exceeds the configured tolerance
//! scaled by the hull's coordinate extent (at least 1). Points that see no
//! triangle lie inside (or on) the hull and are absorbed.
//! Insertion cost is linear in the live triangle count; there is no spatial
//! acceleration, which suits the modest point counts of collision shapes.

mod bootstrap;
mod horizon;
mod validation;


use std::collections::{BTreeSet, HashMap};

use config::constants::MIN_HULL_POINTS;
use glam::DVec3;
use slotmap::{new_key_type, SlotMap};
use tracing::{debug, trace, warn};

use crate::config::HullConfig;
use crate::edge::Edge;
use crate::error::{HullError, HullResult};
use crate::mesh::Mesh;
use crate::triangle::{Face, Triangle, VertexId};

new_key_type! {
    /// Generational handle of a triangle in a hull's triangle arena.
    ///
    /// Keys of removed triangles are never resurrected, so a stale key simply
    /// misses on lookup.
    pub struct TriangleKey;
}

// =============================================================================
// CONVEX MESH
// =============================================================================

/// Convex triangulated polyhedron built by incremental insertion.
///
/// Owns its vertex store, its live triangles and the interior reference
/// point. Margin extrusion never mutates a hull; it builds a new one.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use hull_margin::ConvexMesh;
///
/// let corners: Vec<DVec3> = (0..8)
///     .map(|i| DVec3::new((i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64))
///     .collect();
/// let hull = ConvexMesh::from_points(&corners).unwrap();
///
/// assert_eq!(hull.vertex_count(), 8);
/// assert_eq!(hull.triangle_count(), 12);
/// assert_eq!(hull.edge_count(), 18);
/// hull.validate().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ConvexMesh {
    /// Positions of every point that ever became a hull vertex
    vertices: Vec<DVec3>,
    /// Live triangles
    triangles: SlotMap<TriangleKey, Triangle>,
    /// Point strictly inside the solid
    center: DVec3,
    /// Tolerances used for insertion and extrusion
    config: HullConfig,
    /// Largest absolute coordinate in the vertex store, at least 1
    scale: f64,
}

impl ConvexMesh {
    // =========================================================================
    // CONSTRUCTORS
    // =========================================================================

    /// Builds the hull of `points` with the default configuration.
    ///
    /// # Errors
    ///
    /// - [`HullError::InsufficientPoints`] for fewer than 4 points
    /// - [`HullError::DegenerateGeometry`] when no non-degenerate bootstrap
    ///   tetrahedron exists
    pub fn from_points(points: &[DVec3]) -> HullResult<Self> {
        Self::from_points_with_config(points, HullConfig::default())
    }

    /// Builds the hull of `points` using the given configuration.
    pub fn from_points_with_config(points: &[DVec3], config: HullConfig) -> HullResult<Self> {
        if points.len() < MIN_HULL_POINTS {
            return Err(HullError::InsufficientPoints {
                count: points.len(),
                required: MIN_HULL_POINTS,
            });
        }

        let seed = bootstrap::select_tetrahedron(points, config.tolerance)?;
        let mut hull = Self::from_tetrahedron(seed.map(|i| points[i]), config);
        debug!(?seed, center = ?hull.center, "bootstrapped hull tetrahedron");

        for (i, &point) in points.iter().enumerate() {
            if !seed.contains(&i) {
                hull.add_vertex(point);
            }
        }

        debug!(
            input = points.len(),
            vertices = hull.vertex_count(),
            triangles = hull.triangle_count(),
            "built convex hull"
        );
        Ok(hull)
    }

    /// Creates the four outward-oriented faces of a tetrahedron.
    fn from_tetrahedron(corners: [DVec3; 4], config: HullConfig) -> Self {
        let center = (corners[0] + corners[1] + corners[2] + corners[3]) / 4.0;
        let scale = corners
            .iter()
            .map(|p| p.abs().max_element())
            .fold(1.0_f64, f64::max);
        let mut hull = Self {
            vertices: corners.to_vec(),
            triangles: SlotMap::with_capacity_and_key(4),
            center,
            config,
            scale,
        };

        let ids = [0, 1, 2, 3].map(VertexId::new);
        for [a, b, c] in [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]] {
            let face = Triangle::oriented(
                [ids[a], ids[b], ids[c]],
                [corners[a], corners[b], corners[c]],
                center,
            );
            hull.triangles.insert(face);
        }
        hull
    }

    // =========================================================================
    // INCREMENTAL INSERTION
    // =========================================================================

    /// Inserts `point`, extending the hull if the point lies outside it.
    ///
    /// Returns the new vertex handle, or `None` when the point is inside or on
    /// the hull (within tolerance) and was absorbed. `None` is also returned
    /// once the vertex store has used up all 32-bit handles.
    pub fn add_vertex(&mut self, point: DVec3) -> Option<VertexId> {
        let Some(id) = VertexId::from_index(self.vertices.len()) else {
            warn!(?point, "vertex store is full; point dropped");
            return None;
        };

        let tolerance = self.config.tolerance * self.scale.max(point.abs().max_element());
        let Some(region) = self.visible_region(id, point, tolerance) else {
            trace!(?point, "point absorbed by hull");
            return None;
        };

        for key in &region.removed {
            self.triangles.remove(*key);
        }
        self.vertices.push(point);
        self.scale = self.scale.max(point.abs().max_element());
        for face in &region.cone {
            self.triangles.insert(*face);
        }

        trace!(
            ?point,
            removed = region.removed.len(),
            horizon = region.cone.len(),
            "inserted hull vertex"
        );
        Some(id)
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    /// Interior reference point.
    #[inline]
    pub fn center(&self) -> DVec3 {
        self.center
    }

    /// Configuration the hull was built with.
    #[inline]
    pub fn config(&self) -> &HullConfig {
        &self.config
    }

    /// Position of a vertex of this hull.
    ///
    /// # Panics
    ///
    /// If `id` was issued by a different hull with a larger vertex store.
    #[inline]
    pub fn position(&self, id: VertexId) -> DVec3 {
        self.vertices[id.index()]
    }

    /// The whole vertex store, indexed by [`VertexId::index`].
    ///
    /// Includes vertices that later insertions swallowed.
    #[inline]
    pub fn positions(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Vertices referenced by live triangles, in handle order.
    pub fn hull_vertices(&self) -> Vec<VertexId> {
        let ids: BTreeSet<VertexId> = self
            .triangles
            .values()
            .flat_map(|tri| tri.vertices())
            .collect();
        ids.into_iter().collect()
    }

    /// Number of vertices referenced by live triangles.
    pub fn vertex_count(&self) -> usize {
        self.hull_vertices().len()
    }

    /// Number of live triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of distinct edges of the live triangles.
    pub fn edge_count(&self) -> usize {
        self.edge_usage().len()
    }

    /// Live triangles with their arena keys.
    pub fn triangles(&self) -> impl Iterator<Item = (TriangleKey, &Triangle)> + '_ {
        self.triangles.iter()
    }

    /// Looks up a live triangle.
    pub fn triangle(&self, key: TriangleKey) -> Option<&Triangle> {
        self.triangles.get(key)
    }

    /// Live triangles as positions plus outward normal.
    pub fn faces(&self) -> impl Iterator<Item = Face> + '_ {
        self.triangles.values().map(|tri| {
            let [a, b, c] = tri.vertices();
            Face {
                positions: [self.position(a), self.position(b), self.position(c)],
                normal: tri.normal(),
            }
        })
    }

    /// Returns true if `point` is inside or on the hull, within tolerance.
    pub fn contains(&self, point: DVec3) -> bool {
        let tolerance = self.config.tolerance * self.scale.max(point.abs().max_element());
        self.triangles.values().all(|tri| tri.side(point) <= tolerance)
    }

    /// On-plane tolerance for vertices of this hull.
    ///
    /// The configured tolerance scaled by the largest absolute coordinate in
    /// the vertex store, so it grows with the hull instead of staying fixed.
    pub fn plane_tolerance(&self) -> f64 {
        self.config.tolerance * self.scale
    }

    /// Converts the hull to an indexed mesh.
    ///
    /// Mesh vertices follow handle order and only include live hull vertices.
    pub fn to_mesh(&self) -> Mesh {
        let ids = self.hull_vertices();
        let mut mesh = Mesh::with_capacity(ids.len(), self.triangles.len());

        let mut index_of: HashMap<VertexId, u32> = HashMap::with_capacity(ids.len());
        for id in ids {
            index_of.insert(id, mesh.add_vertex(self.position(id)));
        }

        for tri in self.triangles.values() {
            let [a, b, c] = tri.vertices();
            mesh.add_triangle([index_of[&a], index_of[&b], index_of[&c]], tri.normal());
        }
        mesh
    }

    /// Inflates the hull by `margin`; see [`crate::ops::margin::add_margin`].
    pub fn with_margin(&self, margin: f64) -> HullResult<Self> {
        crate::ops::margin::add_margin(self, margin)
    }

    /// Drops a live triangle, breaking the hull on purpose.
    #[cfg(test)]
    pub(crate) fn remove_triangle(&mut self, key: TriangleKey) -> Option<Triangle> {
        self.triangles.remove(key)
    }

    /// Counts how many live triangles use each edge.
    fn edge_usage(&self) -> HashMap<Edge, usize> {
        let mut usage: HashMap<Edge, usize> = HashMap::new();
        for tri in self.triangles.values() {
            for edge in tri.edges() {
                *usage.entry(edge).or_insert(0) += 1;
            }
        }
        usage
    }
}
