//! Centralized configuration values shared by the hull builder and the margin
//! extruder.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::f64::consts::PI;
use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Numerical tolerance for plane-side classification.
///
/// A point whose signed distance to a triangle plane lies within this value is
/// treated as lying on the plane, which never makes the triangle visible.
///
/// # Examples
/// ```
/// use config::constants::EPSILON_TOLERANCE;
/// assert!(EPSILON_TOLERANCE < 1.0e-6);
/// ```
pub const EPSILON_TOLERANCE: f64 = 1.0e-9;

// =============================================================================
// HULL CONSTANTS
// =============================================================================

/// Minimum number of input points needed to bootstrap a tetrahedron.
///
/// # Examples
/// ```
/// use config::constants::MIN_HULL_POINTS;
/// assert_eq!(MIN_HULL_POINTS, 4);
/// ```
pub const MIN_HULL_POINTS: usize = 4;

/// Angular threshold (radians) under which adjacent triangles around a vertex
/// are grouped into one logical facet during margin extrusion.
///
/// # Examples
/// ```
/// use config::constants::SMOOTHING_ANGLE;
/// assert!((SMOOTHING_ANGLE - std::f64::consts::PI / 7.0).abs() < 1e-15);
/// ```
pub const SMOOTHING_ANGLE: f64 = PI / 7.0;

// =============================================================================
// GLOBAL CONFIG
// =============================================================================

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlobalConfig {
    /// On-plane tolerance propagated into visibility and convexity tests.
    pub tolerance: f64,
    /// Facet grouping angle used by margin extrusion, in radians.
    pub smoothing_angle: f64,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// tolerance and smoothing angle.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(1.0e-6, 0.3).expect("valid config");
    /// assert_eq!(cfg.smoothing_angle, 0.3);
    /// ```
    pub fn new(tolerance: f64, smoothing_angle: f64) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        if !smoothing_angle.is_finite() || smoothing_angle <= 0.0 || smoothing_angle >= PI {
            return Err(ConfigError::InvalidSmoothingAngle(smoothing_angle));
        }
        Ok(Self {
            tolerance,
            smoothing_angle,
        })
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            smoothing_angle: SMOOTHING_ANGLE,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when the smoothing angle falls outside `(0, π)`.
    InvalidSmoothingAngle(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidSmoothingAngle(value) => {
                write!(f, "smoothing_angle must lie in (0, pi): {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;
