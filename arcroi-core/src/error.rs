//! Error types for arcroi-core.

use thiserror::Error;

/// Result type alias for arcroi operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for arcroi operations.
///
/// Degenerate geometry (zero-length handles, zero outer radius, inverted
/// radii) is not an error; it resolves to an empty selection. These variants
/// cover caller contract violations only.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Radius that is negative or not finite.
    #[error("invalid radius: {0}")]
    InvalidRadius(f64),

    /// Mask or array shape with a zero dimension.
    #[error("invalid array shape: {width}x{height}")]
    InvalidShape { width: usize, height: usize },

    /// Sector center that is not finite.
    #[error("invalid center: ({x}, {y})")]
    InvalidCenter { x: f64, y: f64 },

    /// Data and mask dimensions disagree.
    #[error("shape mismatch: mask is {expected:?}, data is {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Rectangle is not square and cannot bound a circle.
    #[error("rectangle is not square: {width}x{height}")]
    NotSquare { width: f64, height: f64 },

    /// Configuration error.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl Error {
    /// Checks that `radius` is finite and non-negative.
    pub fn check_radius(radius: f64) -> Result<f64> {
        if radius.is_finite() && radius >= 0.0 {
            Ok(radius)
        } else {
            Err(Error::InvalidRadius(radius))
        }
    }
}
