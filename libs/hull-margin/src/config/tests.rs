//! Tests covering hull configuration behavior.

use super::*;
use crate::error::HullError;
use config::constants::ConfigError;

#[test]
fn default_matches_constants() {
    let cfg = HullConfig::default();
    assert_eq!(cfg.tolerance, EPSILON_TOLERANCE);
    assert_eq!(cfg.smoothing_angle, SMOOTHING_ANGLE);
}

#[test]
fn builder_validates_input() {
    let err = HullConfig::new(0.0, 0.4).unwrap_err();
    assert!(matches!(
        err,
        HullError::Config(ConfigError::InvalidTolerance(t)) if t == 0.0
    ));

    let err = HullConfig::new(1.0e-9, 4.0).unwrap_err();
    assert!(matches!(
        err,
        HullError::Config(ConfigError::InvalidSmoothingAngle(_))
    ));
}

#[test]
fn converts_from_global_config() {
    let global = GlobalConfig::new(1.0e-6, 0.25).unwrap();
    let cfg = HullConfig::from(global);
    assert_eq!(cfg.tolerance, 1.0e-6);
    assert_eq!(cfg.smoothing_angle, 0.25);
}

#[test]
fn smoothing_cos_matches_angle() {
    let cfg = HullConfig::new(1.0e-9, std::f64::consts::FRAC_PI_3).unwrap();
    assert!((cfg.smoothing_cos() - 0.5).abs() < 1e-12);
}
