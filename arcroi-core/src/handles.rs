//! The four named control points that parametrize an annular sector.

use crate::point::{ControlPoint, DraggablePoint, Point};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Initial handle offsets as fractions of the construction radius.
const INNER_FRACTION: (f64, f64) = (0.0, 0.25);
const OUTER_FRACTION: (f64, f64) = (0.0, 0.5);
const AZIMUTH_FRACTION: (f64, f64) = (0.433, 0.25);

/// Names of the control points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HandleId {
    /// Sets the inner ring radius.
    Inner,
    /// Sets the outer ring radius.
    Outer,
    /// Sets the start of the sweep.
    AzimuthLeft,
    /// Sets the end of the sweep.
    AzimuthRight,
}

impl HandleId {
    /// All handles, in drawing order.
    pub const ALL: [HandleId; 4] = [
        HandleId::Inner,
        HandleId::Outer,
        HandleId::AzimuthLeft,
        HandleId::AzimuthRight,
    ];

    /// Lower-case label used in logs and CLI output.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            HandleId::Inner => "inner",
            HandleId::Outer => "outer",
            HandleId::AzimuthLeft => "azimuth-left",
            HandleId::AzimuthRight => "azimuth-right",
        }
    }
}

/// Control points, all measured from the ROI's local origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HandleSet {
    pub inner: ControlPoint,
    pub outer: ControlPoint,
    pub azimuth_left: ControlPoint,
    pub azimuth_right: ControlPoint,
}

impl HandleSet {
    /// Creates a handle set from explicit offsets.
    #[must_use]
    pub const fn new(
        inner: ControlPoint,
        outer: ControlPoint,
        azimuth_left: ControlPoint,
        azimuth_right: ControlPoint,
    ) -> Self {
        Self {
            inner,
            outer,
            azimuth_left,
            azimuth_right,
        }
    }

    /// Handles for a freshly created ROI of the given radius.
    ///
    /// Inner and outer sit on +y at a quarter and half of the radius, the
    /// azimuth handles at `(±0.433, 0.25)` of it: a 120° wedge centered on +y.
    #[must_use]
    pub fn initial(radius: f64) -> Self {
        let at = |(fx, fy): (f64, f64)| Point::new(fx * radius, fy * radius);
        Self {
            inner: at(INNER_FRACTION),
            outer: at(OUTER_FRACTION),
            azimuth_left: at(AZIMUTH_FRACTION),
            azimuth_right: at((-AZIMUTH_FRACTION.0, AZIMUTH_FRACTION.1)),
        }
    }

    /// Offset of one handle.
    #[must_use]
    pub fn get(&self, id: HandleId) -> ControlPoint {
        match id {
            HandleId::Inner => self.inner,
            HandleId::Outer => self.outer,
            HandleId::AzimuthLeft => self.azimuth_left,
            HandleId::AzimuthRight => self.azimuth_right,
        }
    }

    /// Mutable access for a host drag framework.
    pub fn handle_mut(&mut self, id: HandleId) -> &mut dyn DraggablePoint {
        match id {
            HandleId::Inner => &mut self.inner,
            HandleId::Outer => &mut self.outer,
            HandleId::AzimuthLeft => &mut self.azimuth_left,
            HandleId::AzimuthRight => &mut self.azimuth_right,
        }
    }

    /// Moves one handle.
    pub fn set(&mut self, id: HandleId, position: ControlPoint) {
        self.handle_mut(id).set_position(position);
    }

    /// Multiplies every offset by `factor`.
    pub fn scale(&mut self, factor: f64) {
        for id in HandleId::ALL {
            let scaled = self.get(id) * factor;
            self.set(id, scaled);
        }
    }

    /// Iterates `(id, offset)` pairs in [`HandleId::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (HandleId, ControlPoint)> + '_ {
        HandleId::ALL.into_iter().map(move |id| (id, self.get(id)))
    }

    /// Closest handle to `point` within `threshold`, if any.
    #[must_use]
    pub fn nearest(&self, point: Point, threshold: f64) -> Option<HandleId> {
        self.iter()
            .map(|(id, offset)| (id, offset.distance(point)))
            .filter(|&(_, distance)| distance <= threshold)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_initial_offsets() {
        let handles = HandleSet::initial(4.0);
        assert_eq!(handles.inner, Point::new(0.0, 1.0));
        assert_eq!(handles.outer, Point::new(0.0, 2.0));
        assert_relative_eq!(handles.azimuth_left.x, 1.732, epsilon = 1e-12);
        assert_relative_eq!(handles.azimuth_left.y, 1.0);
        assert_relative_eq!(handles.azimuth_right.x, -1.732, epsilon = 1e-12);
        assert_relative_eq!(handles.azimuth_right.y, 1.0);
    }

    #[test]
    fn test_set_through_draggable() {
        let mut handles = HandleSet::initial(2.0);
        handles.handle_mut(HandleId::Outer).set_position(Point::new(3.0, 0.0));
        assert_eq!(handles.get(HandleId::Outer), Point::new(3.0, 0.0));
        assert_eq!(handles.handle_mut(HandleId::Outer).position(), Point::new(3.0, 0.0));

        handles.set(HandleId::AzimuthRight, Point::new(-1.0, -1.0));
        assert_eq!(handles.azimuth_right, Point::new(-1.0, -1.0));
    }

    #[test]
    fn test_scale() {
        let mut handles = HandleSet::initial(4.0);
        handles.scale(0.5);
        assert_eq!(handles.outer, Point::new(0.0, 1.0));
        assert_eq!(handles.inner, Point::new(0.0, 0.5));
    }

    #[test]
    fn test_nearest() {
        let handles = HandleSet::initial(4.0);
        assert_eq!(handles.nearest(Point::new(0.1, 1.9), 0.5), Some(HandleId::Outer));
        assert_eq!(handles.nearest(Point::new(0.0, 1.4), 0.5), Some(HandleId::Inner));
        assert_eq!(handles.nearest(Point::new(5.0, 5.0), 0.5), None);
    }
}
