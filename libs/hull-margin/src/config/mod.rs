//! Hull-level configuration helpers building on the shared `config` crate.
//!
//! The module wraps the workspace configuration so the hull builder and the
//! margin extruder stay decoupled from literal constants.

use config::constants::{GlobalConfig, EPSILON_TOLERANCE, SMOOTHING_ANGLE};

use crate::error::HullResult;

/// Hull construction configuration.
///
/// # Examples
/// ```
/// use hull_margin::HullConfig;
/// let cfg = HullConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HullConfig {
    /// Plane-side tolerance; a triangle is visible from `p` only when
    /// `side(p)` exceeds it.
    pub tolerance: f64,
    /// Maximum angle between adjacent triangle normals that still extrude as
    /// one facet.
    pub smoothing_angle: f64,
}

impl HullConfig {
    /// Creates a new configuration from explicit values.
    ///
    /// # Examples
    /// ```
    /// use hull_margin::HullConfig;
    /// let cfg = HullConfig::new(1.0e-8, 0.5).unwrap();
    /// assert_eq!(cfg.smoothing_angle, 0.5);
    /// ```
    pub fn new(tolerance: f64, smoothing_angle: f64) -> HullResult<Self> {
        let cfg = GlobalConfig::new(tolerance, smoothing_angle)?;
        Ok(Self::from(cfg))
    }

    /// Cosine of the smoothing angle, the form the partitioning compares against.
    pub(crate) fn smoothing_cos(&self) -> f64 {
        self.smoothing_angle.cos()
    }
}

impl From<GlobalConfig> for HullConfig {
    fn from(cfg: GlobalConfig) -> Self {
        Self {
            tolerance: cfg.tolerance,
            smoothing_angle: cfg.smoothing_angle,
        }
    }
}

impl Default for HullConfig {
    fn default() -> Self {
        Self {
            tolerance: EPSILON_TOLERANCE,
            smoothing_angle: SMOOTHING_ANGLE,
        }
    }
}

#[cfg(test)]
mod tests;
