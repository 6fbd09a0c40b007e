//! Conventions that select between legacy-compatible and corrected
//! geometry behaviour.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "serde")]
use crate::error::{Error, Result};

/// How the inner radius is normalized against the outer radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InnerRadiusScale {
    /// `|inner| / |outer| * 0.5`, the radius inside a unit-diameter frame.
    /// Matches legacy saved masks.
    Halved,
    /// `|inner| / |outer|`.
    #[default]
    Ratio,
}

impl InnerRadiusScale {
    /// Normalized inner radius; `0` when `outer` is not positive.
    #[inline]
    #[must_use]
    pub fn normalize(self, inner: f64, outer: f64) -> f64 {
        if outer > 0.0 {
            let ratio = inner / outer;
            match self {
                InnerRadiusScale::Halved => ratio * 0.5,
                InnerRadiusScale::Ratio => ratio,
            }
        } else {
            0.0
        }
    }
}

/// How sweep angles are derived and compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AngleConvention {
    /// Arc length from `atan2(x, y)` differences, unwrapped; membership by
    /// raw strict comparison against `start` and `start + arc`.
    /// Sectors crossing ±180° lose pixels.
    Parity,
    /// `atan2(y, x)` throughout, arc wrapped into `[-180, 180)`;
    /// membership by modular offset from `start`.
    #[default]
    Corrected,
}

/// Geometry and rasterization settings for one ROI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RoiConfig {
    /// Inner radius normalization.
    pub inner_radius: InnerRadiusScale,
    /// Angle derivation and membership.
    pub angles: AngleConvention,
    /// Rasterize rows in parallel.
    pub parallel: bool,
}

impl Default for RoiConfig {
    fn default() -> Self {
        Self::corrected()
    }
}

impl RoiConfig {
    /// Numerically identical to legacy ArcROI masks, quirks included.
    #[must_use]
    pub fn parity() -> Self {
        Self {
            inner_radius: InnerRadiusScale::Halved,
            angles: AngleConvention::Parity,
            parallel: true,
        }
    }

    /// Consistent angles, wrap-aware membership, plain inner ratio.
    #[must_use]
    pub fn corrected() -> Self {
        Self {
            inner_radius: InnerRadiusScale::Ratio,
            angles: AngleConvention::Corrected,
            parallel: true,
        }
    }

    /// Set inner radius normalization.
    #[must_use]
    pub fn with_inner_radius(mut self, scale: InnerRadiusScale) -> Self {
        self.inner_radius = scale;
        self
    }

    /// Set angle convention.
    #[must_use]
    pub fn with_angles(mut self, angles: AngleConvention) -> Self {
        self.angles = angles;
        self
    }

    /// Enable or disable parallel rasterization.
    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Load configuration from a JSON string. Missing fields take the
    /// corrected defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::ConfigError(e.to_string()))
    }

    /// Load configuration from a JSON file.
    #[cfg(feature = "serde")]
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }
}
