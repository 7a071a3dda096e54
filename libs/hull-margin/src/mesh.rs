//! # Mesh Data Structure
//!
//! Indexed triangle mesh handed to rendering and physics consumers once a hull
//! is finished.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices, indices, and one normal per triangle.
///
/// Triangles are wound counter-clockwise seen from outside and each normal
/// is the outward unit normal of the matching triangle.
///
/// # Example
///
/// ```rust
/// use hull_margin::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle([0, 1, 2], DVec3::Z);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Outward unit normal per triangle
    normals: Vec<DVec3>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: Vec::with_capacity(triangle_count),
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices together with its outward normal.
    pub fn add_triangle(&mut self, indices: [u32; 3], normal: DVec3) {
        self.triangles.push(indices);
        self.normals.push(normal);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the per-triangle normals.
    #[inline]
    pub fn normals(&self) -> &[DVec3] {
        &self.normals
    }

    /// Returns the corner positions of the triangle at `index`.
    pub fn triangle_positions(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        ]
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> Mesh {
        let mut mesh = Mesh::with_capacity(3, 1);
        let a = mesh.add_vertex(DVec3::new(-1.0, 0.0, 2.0));
        let b = mesh.add_vertex(DVec3::new(3.0, 1.0, 0.0));
        let c = mesh.add_vertex(DVec3::new(0.0, -4.0, 1.0));
        mesh.add_triangle([a, b, c], DVec3::Z);
        mesh
    }

    #[test]
    fn test_empty_mesh() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn test_counts_and_accessors() {
        let mesh = single_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.triangles()[0], [0, 1, 2]);
        assert_eq!(mesh.normals(), &[DVec3::Z]);
        assert_eq!(mesh.triangle_positions(0)[1], DVec3::new(3.0, 1.0, 0.0));
    }

    #[test]
    fn test_bounding_box() {
        let (min, max) = single_triangle().bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -4.0, 0.0));
        assert_eq!(max, DVec3::new(3.0, 1.0, 2.0));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mesh = single_triangle();
        let json = serde_json::to_string(&mesh).unwrap();
        assert!(json.contains("triangles"));
        let back: Mesh = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mesh);
    }
}
