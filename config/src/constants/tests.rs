//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane and positive.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.tolerance > 0.0);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.tolerance > 0.0);
    assert!(cfg.smoothing_angle > 0.0 && cfg.smoothing_angle < PI);
    assert_eq!(GlobalConfig::new(cfg.tolerance, cfg.smoothing_angle), Ok(cfg));
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(0.0, 0.4).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(0.0, 0.4).unwrap_err(),
        ConfigError::InvalidTolerance(0.0)
    );
    assert_eq!(
        GlobalConfig::new(-1.0e-9, 0.4).unwrap_err(),
        ConfigError::InvalidTolerance(-1.0e-9)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, PI).unwrap_err(),
        ConfigError::InvalidSmoothingAngle(PI)
    );
    assert_eq!(
        GlobalConfig::new(1.0e-9, 0.0).unwrap_err(),
        ConfigError::InvalidSmoothingAngle(0.0)
    );
}

#[test]
fn nan_values_are_rejected() {
    assert!(matches!(
        GlobalConfig::new(f64::NAN, 0.4),
        Err(ConfigError::InvalidTolerance(_))
    ));
    assert!(matches!(
        GlobalConfig::new(1.0e-9, f64::NAN),
        Err(ConfigError::InvalidSmoothingAngle(_))
    ));
}

#[test]
fn error_messages_name_the_field() {
    assert!(ConfigError::InvalidTolerance(0.0)
        .to_string()
        .contains("tolerance"));
    assert!(ConfigError::InvalidSmoothingAngle(4.0)
        .to_string()
        .contains("smoothing_angle"));
}
