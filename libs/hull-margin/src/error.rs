//! # Error Types
//!
//! Error types for hull construction and margin extrusion. All errors are
//! explicit and carry enough context to debug the rejected input.
//!
//! ## Error Policy
//!
//! - NO fallback hull when construction fails
//! - Preconditions are checked before any work is done
//! - Nothing is retried internally

use config::constants::ConfigError;
use thiserror::Error;

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur while building or inflating a convex hull.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use hull_margin::{ConvexMesh, HullError};
///
/// let points = [DVec3::ZERO, DVec3::X, DVec3::Y];
/// match ConvexMesh::from_points(&points) {
///     Err(HullError::InsufficientPoints { count, required }) => {
///         assert_eq!((count, required), (3, 4));
///     }
///     other => panic!("unexpected result: {other:?}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum HullError {
    /// Fewer points than a tetrahedron needs.
    #[error("Convex hull requires at least {required} points, got {count}")]
    InsufficientPoints {
        /// Number of points supplied
        count: usize,
        /// Minimum number of points
        required: usize,
    },

    /// Negative or non-finite margin passed to extrusion.
    #[error("Margin must be finite and non-negative, got {0}")]
    InvalidMargin(f64),

    /// No non-degenerate bootstrap tetrahedron exists in the input.
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// What made the input degenerate
        message: String,
    },

    /// The hull lost its closed 2-manifold structure.
    #[error("Invalid topology: {message}")]
    InvalidTopology {
        /// Which adjacency walk failed
        message: String,
    },

    /// A hull invariant check failed.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// The violated invariant
        message: String,
    },

    /// Invalid tolerance or smoothing angle.
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

impl HullError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid topology error.
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        Self::InvalidTopology {
            message: message.into(),
        }
    }

    /// Creates a validation failed error.
    pub fn validation_failed(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}

// =============================================================================
// RESULT TYPE ALIAS
// =============================================================================

/// Result type alias for hull operations.
pub type HullResult<T> = Result<T, HullError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Test error display messages.
    #[test]
    fn test_error_display() {
        let err = HullError::InsufficientPoints {
            count: 2,
            required: 4,
        };
        assert!(err.to_string().contains("at least 4"));
        assert!(err.to_string().contains("got 2"));

        let err = HullError::InvalidMargin(-0.5);
        assert!(err.to_string().contains("-0.5"));

        let err = HullError::degenerate("all points are coplanar");
        assert!(err.to_string().contains("coplanar"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: HullError = ConfigError::InvalidTolerance(0.0).into();
        assert!(matches!(err, HullError::Config(_)));
        assert!(err.to_string().contains("tolerance"));
    }

    /// Test error types are Send + Sync.
    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HullError>();
    }
}
