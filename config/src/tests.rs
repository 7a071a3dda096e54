//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants.

use crate::constants::*;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON_TOLERANCE > 0.0, "EPSILON_TOLERANCE must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(
        EPSILON_TOLERANCE < 1e-6,
        "EPSILON_TOLERANCE should be small for precision"
    );
}

// =============================================================================
// HULL TESTS
// =============================================================================

#[test]
fn test_min_hull_points_is_tetrahedron() {
    assert_eq!(MIN_HULL_POINTS, 4);
}

#[test]
fn test_smoothing_angle_is_seventh_of_pi() {
    let degrees = SMOOTHING_ANGLE.to_degrees();
    assert!((degrees - 25.714_285).abs() < 1e-4, "got {degrees}");
}

#[test]
fn test_smoothing_angle_separates_cube_faces() {
    // Orthogonal cube faces must never be grouped into one facet
    assert!(SMOOTHING_ANGLE < std::f64::consts::FRAC_PI_2);
}
