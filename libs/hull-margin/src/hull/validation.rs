//! # Hull Validation
//!
//! Checks the invariants every hull maintains after each mutation:
//!
//! - **Manifold**: every edge borders exactly two live triangles
//! - **Orientation**: every directed edge appears once, and so does its reverse
//! - **Interior**: `side(center) < 0` for every live triangle
//! - **Convexity**: no hull vertex lies outside any triangle beyond tolerance
//! - **Euler**: `F = 2V - 4` and `E = 3V - 6`

use std::collections::HashSet;

use crate::error::{HullError, HullResult};
use crate::triangle::VertexId;

use super::ConvexMesh;

impl ConvexMesh {
    /// Verifies the structural and geometric invariants of the hull.
    ///
    /// Convexity is checked against [`ConvexMesh::plane_tolerance`], the same
    /// slack insertion uses.
    ///
    /// # Errors
    ///
    /// [`HullError::ValidationFailed`] naming the first violated invariant.
    pub fn validate(&self) -> HullResult<()> {
        self.check_manifold()?;
        self.check_orientation()?;
        self.check_interior()?;
        self.check_convexity()?;
        self.check_euler()
    }

    fn check_manifold(&self) -> HullResult<()> {
        for (edge, count) in self.edge_usage() {
            if count != 2 {
                let (a, b) = edge.vertices();
                return Err(HullError::validation_failed(format!(
                    "edge ({}, {}) borders {count} triangles",
                    a.index(),
                    b.index()
                )));
            }
        }
        Ok(())
    }

    fn check_orientation(&self) -> HullResult<()> {
        let mut directed: HashSet<(VertexId, VertexId)> = HashSet::new();
        for tri in self.triangles.values() {
            for (a, b) in tri.directed_edges() {
                if !directed.insert((a, b)) {
                    return Err(HullError::validation_failed(format!(
                        "directed edge ({}, {}) used twice; a face is flipped",
                        a.index(),
                        b.index()
                    )));
                }
            }
        }

        for &(a, b) in &directed {
            if !directed.contains(&(b, a)) {
                return Err(HullError::validation_failed(format!(
                    "directed edge ({}, {}) has no opposite",
                    a.index(),
                    b.index()
                )));
            }
        }
        Ok(())
    }

    fn check_interior(&self) -> HullResult<()> {
        for tri in self.triangles.values() {
            let side = tri.side(self.center);
            if side.is_nan() || side >= 0.0 {
                return Err(HullError::validation_failed(format!(
                    "center is not strictly inside triangle {:?} (side = {side})",
                    tri.vertices()
                )));
            }
        }
        Ok(())
    }

    fn check_convexity(&self) -> HullResult<()> {
        let ids = self.hull_vertices();
        let slack = self.plane_tolerance();

        for tri in self.triangles.values() {
            for &id in &ids {
                if tri.has_vertex(id) {
                    continue;
                }
                let side = tri.side(self.position(id));
                if side > slack {
                    return Err(HullError::validation_failed(format!(
                        "vertex {} lies {side} outside triangle {:?}",
                        id.index(),
                        tri.vertices()
                    )));
                }
            }
        }
        Ok(())
    }

    fn check_euler(&self) -> HullResult<()> {
        let v = self.vertex_count();
        let f = self.triangle_count();
        let e = self.edge_count();

        if v < 4 || f != 2 * v - 4 || e != 3 * v - 6 {
            return Err(HullError::validation_failed(format!(
                "Euler relation violated: V = {v}, F = {f}, E = {e}"
            )));
        }
        Ok(())
    }
}
