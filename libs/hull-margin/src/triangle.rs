//! # Triangle
//!
//! Oriented supporting plane of three hull vertices.
//!
//! A triangle stores vertex *identities*, never positions, so two vertices
//! with equal coordinates stay distinct for edge matching and horizon
//! detection. Positions live in the vertex store of the owning
//! [`ConvexMesh`](crate::ConvexMesh).
//!
//! ## Orientation
//!
//! Vertices are kept in counter-clockwise order when viewed from outside, so
//! `normal = normalize((v1 - v0) × (v2 - v0))` points outward and
//! `side(p) = normal · p + offset` is positive strictly outside the plane.

use glam::DVec3;

use crate::edge::Edge;

// =============================================================================
// VERTEX HANDLE
// =============================================================================

/// Stable handle of a vertex in a hull's vertex store.
///
/// Assigned when a point becomes a hull vertex and never reused. Handles are
/// 32-bit, so one hull stores at most `u32::MAX + 1` vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(u32);

impl VertexId {
    pub(crate) const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Handle for a store index, or `None` past the 32-bit limit.
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    /// Index into the owning hull's vertex store.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

// =============================================================================
// TRIANGLE
// =============================================================================

/// Hull face: three vertex handles plus its outward plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertex handles, counter-clockwise seen from outside
    vertices: [VertexId; 3],
    /// Outward unit normal
    normal: DVec3,
    /// Plane offset so that `normal · p + offset = 0` on the plane
    offset: f64,
}

impl Triangle {
    /// Creates the plane through three vertices, oriented by their winding.
    ///
    /// (Near-)collinear input yields a non-finite normal; callers must not
    /// pass degenerate corners.
    pub fn new(vertices: [VertexId; 3], positions: [DVec3; 3]) -> Self {
        let [p0, p1, p2] = positions;
        let normal = (p1 - p0).cross(p2 - p0).normalize();
        Self {
            vertices,
            normal,
            offset: -normal.dot(p0),
        }
    }

    /// Creates the plane through three vertices so that `reference` ends up on
    /// the negative (inner) side.
    ///
    /// When the winding would put `reference` outside, the plane is negated and
    /// the second and third vertices are swapped to keep the winding
    /// counter-clockwise from the new outside.
    ///
    /// Vertex handles are issued by the hull that stores the positions, so the
    /// example takes them from a live face.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use glam::DVec3;
    /// use hull_margin::{ConvexMesh, Triangle};
    ///
    /// let hull = ConvexMesh::from_points(&[DVec3::ZERO, DVec3::X, DVec3::Y, DVec3::Z]).unwrap();
    /// let (_, face) = hull.triangles().next().unwrap();
    /// let [a, b, c] = face.vertices();
    ///
    /// // Inward winding: the center starts on the outer side and gets flipped
    /// let positions = [hull.position(a), hull.position(c), hull.position(b)];
    /// let tri = Triangle::oriented([a, c, b], positions, hull.center());
    ///
    /// assert!(tri.side(hull.center()) < 0.0);
    /// assert_eq!(tri.vertices(), [a, b, c]);
    /// ```
    pub fn oriented(vertices: [VertexId; 3], positions: [DVec3; 3], reference: DVec3) -> Self {
        let mut triangle = Self::new(vertices, positions);
        if triangle.side(reference) > 0.0 {
            triangle.normal = -triangle.normal;
            triangle.offset = -triangle.offset;
            triangle.vertices.swap(1, 2);
        }
        triangle
    }

    /// Signed distance of `point` from the plane; positive is outside.
    #[inline]
    pub fn side(&self, point: DVec3) -> f64 {
        self.normal.dot(point) + self.offset
    }

    /// Returns true if `id` is one of the three corners.
    #[inline]
    pub fn has_vertex(&self, id: VertexId) -> bool {
        self.vertices.contains(&id)
    }

    /// Vertex handles in outward counter-clockwise order.
    #[inline]
    pub fn vertices(&self) -> [VertexId; 3] {
        self.vertices
    }

    /// Outward unit normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Plane offset.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// The three undirected edges.
    pub fn edges(&self) -> [Edge; 3] {
        let [a, b, c] = self.vertices;
        [Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)]
    }

    /// The three directed edges, following the winding.
    pub(crate) fn directed_edges(&self) -> [(VertexId, VertexId); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }

    /// Vertex following `id` in counter-clockwise order, if `id` is a corner.
    pub fn next_ccw(&self, id: VertexId) -> Option<VertexId> {
        let i = self.vertices.iter().position(|&v| v == id)?;
        Some(self.vertices[(i + 1) % 3])
    }

    /// Interior angle (radians) of the corner at `id`.
    ///
    /// `positions` is the owning hull's vertex store.
    ///
    /// # Panics
    ///
    /// If `positions` is not the store this triangle's handles index into and
    /// is too short for them.
    pub fn corner_angle(&self, id: VertexId, positions: &[DVec3]) -> Option<f64> {
        let i = self.vertices.iter().position(|&v| v == id)?;
        let apex = positions[id.index()];
        let next = positions[self.vertices[(i + 1) % 3].index()];
        let prev = positions[self.vertices[(i + 2) % 3].index()];
        Some((next - apex).angle_between(prev - apex))
    }
}

// =============================================================================
// FACE VIEW
// =============================================================================

/// Collaborator-facing view of a hull triangle.
///
/// Enough for a renderer to draw the hull and for a physics engine to
/// re-derive a convex shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Face {
    /// Corner positions, counter-clockwise seen from outside
    pub positions: [DVec3; 3],
    /// Outward unit normal
    pub normal: DVec3,
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    fn ids() -> [VertexId; 3] {
        [VertexId::new(0), VertexId::new(1), VertexId::new(2)]
    }

    fn positions() -> Vec<DVec3> {
        vec![DVec3::ZERO, DVec3::X, DVec3::Y]
    }

    #[test]
    fn test_normal_follows_winding() {
        let tri = Triangle::new(ids(), [DVec3::ZERO, DVec3::X, DVec3::Y]);
        assert_relative_eq!(tri.normal().z, 1.0);
        assert_relative_eq!(tri.offset(), 0.0);
        assert!(tri.side(DVec3::new(0.1, 0.1, 2.0)) > 0.0);
        assert!(tri.side(DVec3::new(0.1, 0.1, -2.0)) < 0.0);
        assert_eq!(tri.side(DVec3::new(5.0, -3.0, 0.0)), 0.0);
    }

    #[test]
    fn test_side_is_signed_distance() {
        let p = [
            DVec3::new(0.0, 0.0, 3.0),
            DVec3::new(1.0, 0.0, 3.0),
            DVec3::new(0.0, 1.0, 3.0),
        ];
        let tri = Triangle::new(ids(), p);
        assert_relative_eq!(tri.side(DVec3::new(7.0, 7.0, 5.5)), 2.5);
    }

    #[test]
    fn test_oriented_flips_and_swaps() {
        let above = DVec3::new(0.2, 0.2, 1.0);
        let tri = Triangle::oriented(ids(), [DVec3::ZERO, DVec3::X, DVec3::Y], above);

        assert!(tri.side(above) < 0.0);
        assert_relative_eq!(tri.normal().z, -1.0);
        let [a, b, c] = ids();
        assert_eq!(tri.vertices(), [a, c, b]);

        // Rebuilding from the swapped winding reproduces the same plane
        let rebuilt = Triangle::new(tri.vertices(), [DVec3::ZERO, DVec3::Y, DVec3::X]);
        assert_relative_eq!(rebuilt.normal().z, tri.normal().z);
    }

    #[test]
    fn test_oriented_keeps_correct_winding() {
        let below = DVec3::new(0.2, 0.2, -1.0);
        let tri = Triangle::oriented(ids(), [DVec3::ZERO, DVec3::X, DVec3::Y], below);
        assert_eq!(tri.vertices(), ids());
        assert!(tri.side(below) < 0.0);
    }

    #[test]
    fn test_identity_membership() {
        let tri = Triangle::new(ids(), [DVec3::ZERO, DVec3::X, DVec3::Y]);
        assert!(tri.has_vertex(VertexId::new(2)));
        // Same coordinates, different identity
        assert!(!tri.has_vertex(VertexId::new(3)));
    }

    #[test]
    fn test_next_ccw_cycles() {
        let [a, b, c] = ids();
        let tri = Triangle::new(ids(), [DVec3::ZERO, DVec3::X, DVec3::Y]);
        assert_eq!(tri.next_ccw(a), Some(b));
        assert_eq!(tri.next_ccw(b), Some(c));
        assert_eq!(tri.next_ccw(c), Some(a));
        assert_eq!(tri.next_ccw(VertexId::new(9)), None);
    }

    #[test]
    fn test_edges_are_undirected() {
        let [a, b, c] = ids();
        let tri = Triangle::new(ids(), [DVec3::ZERO, DVec3::X, DVec3::Y]);
        let edges = tri.edges();
        assert!(edges.contains(&Edge::new(b, a)));
        assert!(edges.contains(&Edge::new(a, c)));
        assert!(edges.contains(&Edge::new(c, b)));
    }

    #[test]
    fn test_corner_angle() {
        let [a, b, _] = ids();
        let tri = Triangle::new(ids(), [DVec3::ZERO, DVec3::X, DVec3::Y]);
        let store = positions();
        assert_relative_eq!(tri.corner_angle(a, &store).unwrap(), FRAC_PI_2);
        assert_relative_eq!(
            tri.corner_angle(b, &store).unwrap(),
            std::f64::consts::FRAC_PI_4,
            epsilon = 1e-12
        );
        assert!(tri.corner_angle(VertexId::new(7), &store).is_none());
    }

    #[test]
    #[should_panic]
    fn test_corner_angle_with_foreign_store_panics() {
        let tri = Triangle::new(ids(), [DVec3::ZERO, DVec3::X, DVec3::Y]);
        let short = vec![DVec3::ZERO];
        let _ = tri.corner_angle(VertexId::new(0), &short);
    }

    #[test]
    fn test_handle_limit() {
        assert_eq!(VertexId::from_index(7), Some(VertexId::new(7)));
        assert_eq!(
            VertexId::from_index(u32::MAX as usize),
            Some(VertexId::new(u32::MAX))
        );
        assert_eq!(VertexId::from_index(u32::MAX as usize + 1), None);
    }
}
