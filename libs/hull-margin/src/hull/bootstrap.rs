//! # Bootstrap Tetrahedron
//!
//! Picks four well-separated input points to seed the hull:
//!
//! 1. Minimum and maximum along X (first occurrence wins ties)
//! 2. The point farthest from the line through the first two
//! 3. The point farthest from the plane through the first three
//!
//! The farthest-point choices keep the seed away from collinear and coplanar
//! configurations whenever the input allows it.

use glam::DVec3;

use crate::error::{HullError, HullResult};

/// Returns the input indices of the bootstrap tetrahedron.
pub(super) fn select_tetrahedron(points: &[DVec3], tolerance: f64) -> HullResult<[usize; 4]> {
    let (lo, hi) = extremes_along_x(points);
    if lo == hi {
        return Err(HullError::degenerate("all points share the same X coordinate"));
    }

    let third = farthest_from_line(points, lo, hi, tolerance)?;
    let fourth = farthest_from_plane(points, [lo, hi, third], tolerance)?;
    Ok([lo, hi, third, fourth])
}

/// Indices of the minimum and maximum X coordinates.
fn extremes_along_x(points: &[DVec3]) -> (usize, usize) {
    let mut lo = 0;
    let mut hi = 0;

    for (i, p) in points.iter().enumerate() {
        if p.x < points[lo].x {
            lo = i;
        }
        if p.x > points[hi].x {
            hi = i;
        }
    }
    (lo, hi)
}

/// Finds the point with the largest squared distance from the line `a`-`b`.
fn farthest_from_line(points: &[DVec3], a: usize, b: usize, tolerance: f64) -> HullResult<usize> {
    let origin = points[a];
    let axis = points[b] - origin;
    let axis_len_sq = axis.length_squared();

    let mut max_dist = 0.0;
    let mut best = None;

    for (i, p) in points.iter().enumerate() {
        if i == a || i == b {
            continue;
        }
        let dist = axis.cross(*p - origin).length_squared() / axis_len_sq;
        if dist > max_dist {
            max_dist = dist;
            best = Some(i);
        }
    }

    best.filter(|_| max_dist > tolerance * tolerance)
        .ok_or_else(|| HullError::degenerate("all points are collinear"))
}

/// Finds the point with the largest absolute distance from the plane through
/// three points.
fn farthest_from_plane(points: &[DVec3], base: [usize; 3], tolerance: f64) -> HullResult<usize> {
    let [a, b, c] = base;
    let origin = points[a];
    let normal = (points[b] - origin).cross(points[c] - origin).normalize();

    let mut max_dist = 0.0;
    let mut best = None;

    for (i, p) in points.iter().enumerate() {
        if base.contains(&i) {
            continue;
        }
        let dist = normal.dot(*p - origin).abs();
        if dist > max_dist {
            max_dist = dist;
            best = Some(i);
        }
    }

    best.filter(|_| max_dist > tolerance)
        .ok_or_else(|| HullError::degenerate("all points are coplanar"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_extremes_prefer_first_occurrence() {
        let points = [
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(2.0, 1.0, 1.0),
        ];
        assert_eq!(extremes_along_x(&points), (0, 1));
    }

    #[test]
    fn test_selects_farthest_points() {
        let points = [
            DVec3::new(-1.0, 0.0, 0.0),
            DVec3::new(0.0, 0.1, 0.0),
            DVec3::new(0.0, 3.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.5),
            DVec3::new(0.0, 1.0, -2.0),
        ];
        assert_eq!(select_tetrahedron(&points, TOL).unwrap(), [0, 3, 2, 5]);
    }

    #[test]
    fn test_rejects_constant_x() {
        let points = [DVec3::ZERO, DVec3::Y, DVec3::Z, DVec3::new(0.0, 1.0, 1.0)];
        let err = select_tetrahedron(&points, TOL).unwrap_err();
        assert!(err.to_string().contains("X coordinate"));
    }

    #[test]
    fn test_rejects_collinear() {
        let points: Vec<DVec3> = (0..5).map(|i| DVec3::splat(i as f64)).collect();
        let err = select_tetrahedron(&points, TOL).unwrap_err();
        assert!(err.to_string().contains("collinear"));
    }

    #[test]
    fn test_rejects_coplanar() {
        let points = [
            DVec3::new(0.0, 0.0, 1.0),
            DVec3::new(1.0, 0.0, 1.0),
            DVec3::new(0.0, 1.0, 1.0),
            DVec3::new(1.0, 1.0, 1.0),
            DVec3::new(0.5, 0.5, 1.0),
        ];
        let err = select_tetrahedron(&points, TOL).unwrap_err();
        assert!(err.to_string().contains("coplanar"));
    }
}
