//! Annular-sector ROI model: handles, bounding circle, change notification
//! and a drag adapter for host pointer events.

use std::fmt;

use arcroi_core::{
    AnnularSectorGeometry, BoundingCircle, GeometryListener, HandleId, HandleSet, Point, Rect,
    Result, RoiConfig,
};
use log::debug;
use ndarray::{Array2, ArrayView2};

use crate::raster::{apply_mask, rasterize, MaskShape};
use crate::resolve::resolve_geometry;
use crate::stats::SectorStatistics;

#[derive(Debug, Clone, Copy, PartialEq)]
struct HandleDrag {
    handle: HandleId,
    last: Point,
}

/// A "wedge of a ring" selection placed on an image.
///
/// Handle offsets live in the local frame whose origin sits at `center`
/// in image coordinates. Geometry is resolved from the handles on every
/// query and never cached.
pub struct ArcRoi {
    center: Point,
    bounds: BoundingCircle,
    handles: HandleSet,
    config: RoiConfig,
    drag: Option<HandleDrag>,
    listeners: Vec<Box<dyn GeometryListener>>,
}

impl fmt::Debug for ArcRoi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArcRoi")
            .field("center", &self.center)
            .field("bounds", &self.bounds)
            .field("handles", &self.handles)
            .field("config", &self.config)
            .field("drag", &self.drag)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ArcRoi {
    /// Creates a ROI with the initial 120° wedge.
    #[must_use]
    pub fn new(center: Point, radius: f64, config: RoiConfig) -> Self {
        Self::with_handles(center, radius, HandleSet::initial(radius), config)
    }

    /// Creates a ROI from explicit handle offsets.
    #[must_use]
    pub fn with_handles(center: Point, radius: f64, handles: HandleSet, config: RoiConfig) -> Self {
        Self {
            center,
            bounds: BoundingCircle::new(center, radius),
            handles,
            config,
            drag: None,
            listeners: Vec::new(),
        }
    }

    /// Image coordinates of the local origin.
    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Bounding circle around `center`.
    #[must_use]
    pub fn bounds(&self) -> &BoundingCircle {
        &self.bounds
    }

    /// Handle offsets in the local frame.
    #[must_use]
    pub fn handles(&self) -> &HandleSet {
        &self.handles
    }

    /// Active conventions.
    #[must_use]
    pub fn config(&self) -> &RoiConfig {
        &self.config
    }

    /// Switches conventions and notifies listeners.
    pub fn set_config(&mut self, config: RoiConfig) {
        self.config = config;
        self.notify();
    }

    /// Registers a change listener.
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: GeometryListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Current geometry, resolved from the handles.
    #[must_use]
    pub fn geometry(&self) -> AnnularSectorGeometry {
        resolve_geometry(&self.handles, &self.config)
    }

    /// Square `±outer_radius` around the local origin.
    #[must_use]
    pub fn local_bounding_rect(&self) -> Rect {
        Rect::around(Point::origin(), self.handles.outer.length())
    }

    /// Image point to local offset.
    #[must_use]
    pub fn to_local(&self, point: Point) -> Point {
        point - self.center
    }

    /// Local offset to image point.
    #[must_use]
    pub fn to_image(&self, offset: Point) -> Point {
        offset + self.center
    }

    /// Moves a handle to a local offset.
    pub fn set_handle(&mut self, id: HandleId, offset: Point) {
        self.handles.set(id, offset);
        self.notify();
    }

    /// Scales the bounding circle and every handle offset by `factor`.
    ///
    /// Radii scale with the factor; angles are unchanged.
    pub fn scale(&mut self, factor: f64) {
        self.bounds.scale(factor);
        self.handles.scale(factor);
        self.notify();
    }

    /// Starts dragging the handle nearest to `point` (image coordinates)
    /// if one lies within `threshold`.
    pub fn begin_drag(&mut self, point: Point, threshold: f64) -> Option<HandleId> {
        let handle = self.handles.nearest(self.to_local(point), threshold)?;
        debug!("drag start on {} handle", handle.label());
        self.drag = Some(HandleDrag {
            handle,
            last: point,
        });
        Some(handle)
    }

    /// Moves the dragged handle by the pointer motion since the last update.
    pub fn update_drag(&mut self, point: Point) {
        let Some(drag) = &mut self.drag else {
            return;
        };
        let delta = point - drag.last;
        if delta == Point::origin() {
            return;
        }
        drag.last = point;
        let handle = drag.handle;
        let moved = self.handles.get(handle) + delta;
        self.set_handle(handle, moved);
    }

    /// Ends the drag.
    pub fn end_drag(&mut self) {
        self.drag = None;
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Handle being dragged, if any.
    #[must_use]
    pub fn dragged_handle(&self) -> Option<HandleId> {
        self.drag.map(|drag| drag.handle)
    }

    /// Rasterizes the current geometry at this ROI's center.
    ///
    /// # Errors
    ///
    /// See [`rasterize`].
    pub fn mask(&self, shape: MaskShape) -> Result<Array2<bool>> {
        rasterize(shape, self.center, &self.geometry(), &self.config)
    }

    /// `data` with every pixel outside the sector set to `T::default()`.
    ///
    /// # Errors
    ///
    /// See [`rasterize`].
    pub fn array_region<T>(&self, data: ArrayView2<'_, T>) -> Result<Array2<T>>
    where
        T: Clone + Default,
    {
        let mask = self.mask(MaskShape::of(&data))?;
        apply_mask(data, mask.view())
    }

    /// Statistics of the pixels inside the sector.
    ///
    /// # Errors
    ///
    /// See [`rasterize`].
    pub fn statistics<T>(&self, data: ArrayView2<'_, T>) -> Result<SectorStatistics>
    where
        T: Copy + Into<f64>,
    {
        let mask = self.mask(MaskShape::of(&data))?;
        SectorStatistics::from_masked(data, mask.view())
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let geometry = self.geometry();
        for listener in &mut self.listeners {
            listener.geometry_changed(&geometry);
        }
    }
}
