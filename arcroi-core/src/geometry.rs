//! Derived annular-sector parameters and the sector membership test.

use crate::angle::{polar_degrees, wrap_positive};
use crate::config::{AngleConvention, InnerRadiusScale};
use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Radii and sweep of a "wedge of a ring".
///
/// Radii are in the ROI's local units. Angles are in degrees; `arc_length`
/// is signed, its sign giving the sweep direction from `start_angle`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AnnularSectorGeometry {
    /// Length of the inner handle offset.
    pub inner_radius: f64,
    /// Length of the outer handle offset.
    pub outer_radius: f64,
    /// Inner radius relative to the outer one, see [`InnerRadiusScale`].
    pub inner_radius_normalized: f64,
    /// Polar angle of the left azimuth handle.
    pub start_angle: f64,
    /// Signed sweep from `start_angle`.
    pub arc_length: f64,
}

impl AnnularSectorGeometry {
    /// Creates a geometry from explicit parameters, normalizing the inner
    /// radius as a plain ratio.
    #[must_use]
    pub fn new(inner_radius: f64, outer_radius: f64, start_angle: f64, arc_length: f64) -> Self {
        Self {
            inner_radius,
            outer_radius,
            inner_radius_normalized: InnerRadiusScale::Ratio.normalize(inner_radius, outer_radius),
            start_angle,
            arc_length,
        }
    }

    /// Angle where the sweep ends, unwrapped.
    #[inline]
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.arc_length
    }

    /// Rejects negative or non-finite radii.
    pub fn validate(&self) -> Result<()> {
        Error::check_radius(self.inner_radius)?;
        Error::check_radius(self.outer_radius)?;
        Ok(())
    }

    /// Whether the sector can select nothing: zero outer radius, inner
    /// radius beyond the outer one, or an empty or undefined sweep.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.outer_radius > 0.0)
            || self.inner_radius > self.outer_radius
            || self.arc_length == 0.0
            || !self.arc_length.is_finite()
    }

    /// Strictly between the inner and outer radius.
    #[inline]
    #[must_use]
    pub fn contains_radius(&self, distance: f64) -> bool {
        self.inner_radius < distance && distance < self.outer_radius
    }

    /// Strictly inside the sweep. Boundary rays are excluded.
    #[inline]
    #[must_use]
    pub fn contains_angle(&self, angle: f64, convention: AngleConvention) -> bool {
        match convention {
            AngleConvention::Parity => angle > self.start_angle && angle < self.end_angle(),
            AngleConvention::Corrected => {
                if self.arc_length > 0.0 {
                    let offset = wrap_positive(angle - self.start_angle);
                    offset > 0.0 && offset < self.arc_length
                } else if self.arc_length < 0.0 {
                    let offset = wrap_positive(self.start_angle - angle);
                    offset > 0.0 && offset < -self.arc_length
                } else {
                    false
                }
            }
        }
    }

    /// Membership of an offset `(dx, dy)` from the sector's center.
    #[inline]
    #[must_use]
    pub fn contains_offset(&self, dx: f64, dy: f64, convention: AngleConvention) -> bool {
        self.contains_radius(dx.hypot(dy)) && self.contains_angle(polar_degrees(dx, dy), convention)
    }
}

/// Receives the freshly resolved geometry whenever a ROI changes.
pub trait GeometryListener {
    /// Called after a handle move or rescale.
    fn geometry_changed(&mut self, geometry: &AnnularSectorGeometry);
}

impl<F> GeometryListener for F
where
    F: FnMut(&AnnularSectorGeometry),
{
    fn geometry_changed(&mut self, geometry: &AnnularSectorGeometry) {
        self(geometry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate() {
        assert!(AnnularSectorGeometry::new(0.0, 0.0, 0.0, 90.0).is_degenerate());
        assert!(AnnularSectorGeometry::new(3.0, 2.0, 0.0, 90.0).is_degenerate());
        assert!(AnnularSectorGeometry::new(1.0, 2.0, 0.0, 0.0).is_degenerate());
        assert!(AnnularSectorGeometry::new(1.0, f64::NAN, 0.0, 10.0).is_degenerate());
        assert!(!AnnularSectorGeometry::new(1.0, 2.0, 0.0, -10.0).is_degenerate());
    }

    #[test]
    fn test_validate() {
        assert!(AnnularSectorGeometry::new(1.0, 2.0, 0.0, 90.0).validate().is_ok());
        assert_eq!(
            AnnularSectorGeometry::new(-1.0, 2.0, 0.0, 90.0).validate(),
            Err(Error::InvalidRadius(-1.0))
        );
        assert!(AnnularSectorGeometry::new(1.0, f64::INFINITY, 0.0, 90.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_radius_bounds_are_strict() {
        let geometry = AnnularSectorGeometry::new(1.0, 3.0, 0.0, 90.0);
        assert!(!geometry.contains_radius(1.0));
        assert!(geometry.contains_radius(2.0));
        assert!(!geometry.contains_radius(3.0));
    }

    #[test]
    fn test_angle_bounds_are_strict() {
        let geometry = AnnularSectorGeometry::new(1.0, 3.0, 0.0, 90.0);
        for convention in [AngleConvention::Parity, AngleConvention::Corrected] {
            assert!(!geometry.contains_angle(0.0, convention));
            assert!(geometry.contains_angle(45.0, convention));
            assert!(!geometry.contains_angle(90.0, convention));
            assert!(!geometry.contains_angle(-45.0, convention));
        }
    }

    #[test]
    fn test_wraparound_only_in_corrected() {
        let geometry = AnnularSectorGeometry::new(0.0, 10.0, 170.0, 20.0);
        assert!(geometry.contains_angle(-175.0, AngleConvention::Corrected));
        assert!(!geometry.contains_angle(-175.0, AngleConvention::Parity));
        assert!(geometry.contains_angle(175.0, AngleConvention::Parity));
    }

    #[test]
    fn test_negative_sweep() {
        let geometry = AnnularSectorGeometry::new(0.0, 10.0, 90.0, -90.0);
        assert!(geometry.contains_angle(45.0, AngleConvention::Corrected));
        assert!(!geometry.contains_angle(135.0, AngleConvention::Corrected));
        assert!(!geometry.contains_angle(45.0, AngleConvention::Parity));
    }

    #[test]
    fn test_closure_listener() {
        let mut seen = Vec::new();
        {
            let mut listener = |g: &AnnularSectorGeometry| seen.push(g.outer_radius);
            listener.geometry_changed(&AnnularSectorGeometry::new(1.0, 2.0, 0.0, 10.0));
        }
        assert_eq!(seen, vec![2.0]);
    }
}
