//! Bounding circle of an annular-sector ROI.

use crate::error::{Error, Result};
use crate::point::{Point, Rect};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Center and radius, exposed as a square bounding box.
///
/// The rectangle is derived from the center and radius on every call, so
/// `rect()` always equals `center ± radius` on both axes, whichever way the
/// circle was built or deserialized.
///
/// A negative radius is a caller contract violation. Mutators check it with
/// `debug_assert!` only; release builds store the value unchecked and the
/// resulting rectangle is inverted.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingCircle {
    center: Point,
    radius: f64,
    scale: f64,
}

impl BoundingCircle {
    /// Creates a circle around `center`.
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        debug_assert!(radius >= 0.0, "negative radius {radius}");
        Self {
            center,
            radius,
            scale: 1.0,
        }
    }

    /// Creates the circle inscribed in a square rectangle.
    pub fn from_rect(rect: Rect) -> Result<Self> {
        let (width, height) = (rect.width(), rect.height());
        if (width - height).abs() > f64::EPSILON * width.abs().max(height.abs()).max(1.0) {
            return Err(Error::NotSquare { width, height });
        }
        let radius = Error::check_radius(width * 0.5)?;
        Ok(Self::new(rect.center(), radius))
    }

    /// Center fixed at construction.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Half the width of the bounding square.
    #[inline]
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Product of every factor passed to [`scale`](Self::scale).
    #[inline]
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale
    }

    /// Bounding square `center ± radius`.
    #[inline]
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::around(self.center, self.radius)
    }

    /// Replaces the radius, moving all four edges.
    pub fn set_radius(&mut self, radius: f64) {
        debug_assert!(radius >= 0.0, "negative radius {radius}");
        self.radius = radius;
    }

    /// Multiplies the radius by `factor`, keeping the center.
    pub fn scale(&mut self, factor: f64) {
        debug_assert!(factor >= 0.0, "negative scale factor {factor}");
        self.scale *= factor;
        self.set_radius(self.radius * factor);
    }

    /// Whether `point` lies inside the circle (boundary included).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.distance(self.center) <= self.radius
    }
}

impl Default for BoundingCircle {
    fn default() -> Self {
        Self::new(Point::origin(), 1.0)
    }
}
