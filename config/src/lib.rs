//! # Config Crate
//!
//! Centralized configuration constants for convex hull construction and
//! margin extrusion. All tolerances and tunable angles are defined here so the
//! geometry crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON_TOLERANCE, MIN_HULL_POINTS, SMOOTHING_ANGLE};
//!
//! // A point this close to a plane counts as lying on it
//! let side: f64 = 1e-12;
//! assert!(side.abs() <= EPSILON_TOLERANCE);
//!
//! // A hull needs a tetrahedron to start from
//! assert_eq!(MIN_HULL_POINTS, 4);
//!
//! // Adjacent triangles closer than this angle extrude as one facet
//! assert!(SMOOTHING_ANGLE < std::f64::consts::FRAC_PI_4);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Validated Snapshots**: `GlobalConfig` rejects values that would break
//!   the hull invariants

pub mod constants;

#[cfg(test)]
mod tests;
