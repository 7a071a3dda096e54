//! # Hull Margin
//!
//! Inflates a convex hull outward by an approximate distance, following the
//! local surface orientation instead of offsetting each triangle separately.
//!
//! ## Algorithm Overview
//!
//! For every hull vertex `v`:
//! 1. Collect the triangles incident to `v`
//! 2. Sort them into a closed fan by walking shared edges around `v`
//! 3. Split the fan into runs of adjacent triangles whose normals differ by
//!    at most the smoothing angle; a run crossing the fan's start is merged
//!    back together
//! 4. Give each run the corner-angle-weighted average of its normals
//! 5. Emit `v + margin * direction` once per run
//!
//! All emitted points seed a brand-new hull. Near-coplanar triangles that
//! triangulate one flat polygon thus extrude as one facet, while sharp
//! features split into several points.
//!
//! Extrusion is not additive: inflating by `m1` and then `m2` recomputes
//! directions from the intermediate hull and generally differs from
//! inflating by `m1 + m2` at once.


use glam::DVec3;
use tracing::debug;

use crate::edge::Edge;
use crate::error::{HullError, HullResult};
use crate::hull::ConvexMesh;
use crate::triangle::{Triangle, VertexId};

/// Builds a new hull roughly `margin` outside `hull`.
///
/// The input hull is only read. The result uses the same configuration.
///
/// # Errors
///
/// - [`HullError::InvalidMargin`] for a negative or non-finite margin,
///   before any work is done
/// - [`HullError::InvalidTopology`] if a vertex fan does not close
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use hull_margin::{add_margin, ConvexMesh};
///
/// let corners: Vec<DVec3> = (0..8)
///     .map(|i| DVec3::new((i & 1) as f64, ((i >> 1) & 1) as f64, ((i >> 2) & 1) as f64))
///     .collect();
/// let cube = ConvexMesh::from_points(&corners).unwrap();
/// let padded = add_margin(&cube, 0.1).unwrap();
///
/// let (min, max) = padded.to_mesh().bounding_box();
/// assert!((min.x + 0.1).abs() < 1e-9);
/// assert!((max.z - 1.1).abs() < 1e-9);
/// ```
pub fn add_margin(hull: &ConvexMesh, margin: f64) -> HullResult<ConvexMesh> {
    let points = extrusion_points(hull, margin)?;
    let inflated = ConvexMesh::from_points_with_config(&points, *hull.config())?;

    debug!(
        margin,
        emitted = points.len(),
        vertices = inflated.vertex_count(),
        "inflated hull by margin"
    );
    Ok(inflated)
}

/// Computes the offset points `add_margin` rebuilds the hull from.
///
/// Points are grouped by original vertex in handle order.
pub fn extrusion_points(hull: &ConvexMesh, margin: f64) -> HullResult<Vec<DVec3>> {
    if !margin.is_finite() || margin < 0.0 {
        return Err(HullError::InvalidMargin(margin));
    }

    let cos_limit = hull.config().smoothing_cos();
    let mut points = Vec::new();

    for id in hull.hull_vertices() {
        let origin = hull.position(id);
        let fan = sorted_fan(hull, id)?;
        for run in partition_fan(&fan, cos_limit) {
            let direction = extrusion_direction(hull.positions(), id, &run);
            points.push(origin + margin * direction);
        }
    }

    debug!(margin, points = points.len(), "computed extrusion points");
    Ok(points)
}

// =============================================================================
// VERTEX FAN
// =============================================================================

/// Live triangles that use `id` as a corner.
fn incident_triangles(hull: &ConvexMesh, id: VertexId) -> Vec<Triangle> {
    hull.triangles()
        .map(|(_, tri)| *tri)
        .filter(|tri| tri.has_vertex(id))
        .collect()
}

/// Orders the triangles around `id` into a closed fan.
///
/// Each step moves to the single remaining triangle sharing the edge from
/// `id` to the current triangle's next counter-clockwise corner. The walk is
/// bounded by the fan size.
fn sorted_fan(hull: &ConvexMesh, id: VertexId) -> HullResult<Vec<Triangle>> {
    let mut remaining = incident_triangles(hull, id);
    let count = remaining.len();
    if count < 3 {
        return Err(HullError::invalid_topology(format!(
            "vertex {} has {count} incident triangles",
            id.index()
        )));
    }

    let first = remaining.swap_remove(0);
    let mut fan = Vec::with_capacity(count);
    fan.push(first);

    for _ in 1..count {
        let shared = fan_edge(fan[fan.len() - 1], id)?;
        let mut candidates = remaining
            .iter()
            .enumerate()
            .filter(|(_, tri)| tri.edges().contains(&shared))
            .map(|(i, _)| i);

        let next = match (candidates.next(), candidates.next()) {
            (Some(i), None) => i,
            (found, _) => {
                return Err(HullError::invalid_topology(format!(
                    "fan around vertex {} is not manifold ({} continuations)",
                    id.index(),
                    if found.is_some() { "several" } else { "no" }
                )))
            }
        };
        fan.push(remaining.swap_remove(next));
    }

    if !first.edges().contains(&fan_edge(fan[count - 1], id)?) {
        return Err(HullError::invalid_topology(format!(
            "fan around vertex {} does not close",
            id.index()
        )));
    }
    Ok(fan)
}

/// Edge from `id` to the corner following it in `tri`.
fn fan_edge(tri: Triangle, id: VertexId) -> HullResult<Edge> {
    tri.next_ccw(id)
        .map(|next| Edge::new(id, next))
        .ok_or_else(|| HullError::invalid_topology("fan triangle lost its apex"))
}

// =============================================================================
// PARTITIONING
// =============================================================================

/// Splits a closed fan into runs of smoothly connected triangles.
///
/// Neighbors stay in one run while the cosine between their normals is at
/// least `cos_limit`. When there are more than two runs and the fan's last
/// and first triangles are also smooth, the last run joins the first.
fn partition_fan(fan: &[Triangle], cos_limit: f64) -> Vec<Vec<Triangle>> {
    let smooth = |a: &Triangle, b: &Triangle| a.normal().dot(b.normal()) >= cos_limit;

    let mut runs: Vec<Vec<Triangle>> = Vec::new();
    let mut current: Vec<Triangle> = Vec::new();
    for tri in fan {
        if let Some(prev) = current.last() {
            if !smooth(prev, tri) {
                runs.push(std::mem::take(&mut current));
            }
        }
        current.push(*tri);
    }
    if !current.is_empty() {
        runs.push(current);
    }

    if let (Some(first), Some(last)) = (fan.first(), fan.last()) {
        if runs.len() > 2 && smooth(last, first) {
            if let Some(tail) = runs.pop() {
                runs[0].extend(tail);
            }
        }
    }
    runs
}

/// Unit direction of a run: normals weighted by the corner angle at `id`.
fn extrusion_direction(positions: &[DVec3], id: VertexId, run: &[Triangle]) -> DVec3 {
    run.iter()
        .map(|tri| tri.corner_angle(id, positions).unwrap_or(0.0) * tri.normal())
        .sum::<DVec3>()
        .normalize_or_zero()
}
