//! Boolean mask rasterization of an annular sector.
//!
//! Masks are `Array2<bool>` with dimension `(height, width)` and are indexed
//! `mask[[row, col]]` where `row` is the pixel's y and `col` its x. Data
//! arrays combined with a mask use the same order.
#![allow(clippy::cast_precision_loss)]

use arcroi_core::{AnnularSectorGeometry, Error, Point, Result, RoiConfig};
use log::{debug, trace};
use ndarray::{Array2, ArrayView2, Zip};
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Pixel dimensions of a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MaskShape {
    /// Number of columns (x extent).
    pub width: usize,
    /// Number of rows (y extent).
    pub height: usize,
}

impl MaskShape {
    /// Creates a shape of `width` columns and `height` rows.
    #[must_use]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Shape matching a `(rows, cols)` data array.
    #[must_use]
    pub fn of<T>(data: &ArrayView2<'_, T>) -> Self {
        let (height, width) = data.dim();
        Self { width, height }
    }

    /// `(height, width)`, the ndarray dimension of the mask.
    #[inline]
    #[must_use]
    pub const fn dim(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Rejects zero dimensions and pixel counts beyond `isize::MAX`,
    /// returning the pixel count.
    fn checked_len(&self) -> Result<usize> {
        match self.width.checked_mul(self.height) {
            Some(len) if len > 0 && isize::try_from(len).is_ok() => Ok(len),
            _ => Err(self.invalid()),
        }
    }

    fn invalid(&self) -> Error {
        Error::InvalidShape {
            width: self.width,
            height: self.height,
        }
    }

    /// Buffer of `len` copies of `value`; allocation failure is reported
    /// as an invalid shape instead of aborting.
    fn buffer<T: Clone>(&self, len: usize, value: T) -> Result<Vec<T>> {
        let mut buffer = Vec::new();
        buffer.try_reserve_exact(len).map_err(|_| self.invalid())?;
        buffer.resize(len, value);
        Ok(buffer)
    }
}

/// Rasterizes `geometry` placed at `center` (in pixel coordinates).
///
/// A pixel `(x, y)` is selected when its distance `d` from `center` and its
/// angle `a = atan2(y - cy, x - cx)` satisfy
/// `inner < d < outer` and `a` strictly inside the sweep under
/// [`RoiConfig::angles`]. Degenerate geometry yields an all-false mask.
///
/// # Errors
///
/// Returns an error for a zero-sized shape or one too large to allocate,
/// a negative or non-finite radius, or a non-finite center.
pub fn rasterize(
    shape: MaskShape,
    center: Point,
    geometry: &AnnularSectorGeometry,
    config: &RoiConfig,
) -> Result<Array2<bool>> {
    let len = shape.checked_len()?;
    geometry.validate()?;
    if !center.is_finite() {
        return Err(Error::InvalidCenter {
            x: center.x,
            y: center.y,
        });
    }

    if geometry.is_degenerate() {
        debug!(
            "degenerate sector (inner {}, outer {}, arc {}), empty {}x{} mask",
            geometry.inner_radius,
            geometry.outer_radius,
            geometry.arc_length,
            shape.width,
            shape.height
        );
        let cells = shape.buffer(len, false)?;
        return Array2::from_shape_vec(shape.dim(), cells).map_err(|_| shape.invalid());
    }

    trace!(
        "rasterizing {}x{} around ({}, {}) with {:?}",
        shape.width,
        shape.height,
        center.x,
        center.y,
        config
    );

    let mut offsets_x = shape.buffer(shape.width, 0.0)?;
    for (col, dx) in offsets_x.iter_mut().enumerate() {
        *dx = col as f64 - center.x;
    }
    let convention = config.angles;
    let fill_row = |(row, cells): (usize, &mut [bool])| {
        let dy = row as f64 - center.y;
        for (cell, &dx) in cells.iter_mut().zip(&offsets_x) {
            *cell = geometry.contains_offset(dx, dy, convention);
        }
    };

    let mut cells = shape.buffer(len, false)?;
    if config.parallel {
        cells.par_chunks_mut(shape.width).enumerate().for_each(&fill_row);
    } else {
        cells.chunks_mut(shape.width).enumerate().for_each(&fill_row);
    }

    Array2::from_shape_vec(shape.dim(), cells).map_err(|_| shape.invalid())
}

/// Copies `data` where `mask` is set and fills the rest with `T::default()`.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] when the dimensions differ.
pub fn apply_mask<T>(data: ArrayView2<'_, T>, mask: ArrayView2<'_, bool>) -> Result<Array2<T>>
where
    T: Clone + Default,
{
    if data.dim() != mask.dim() {
        return Err(Error::ShapeMismatch {
            expected: mask.dim(),
            actual: data.dim(),
        });
    }
    Ok(Zip::from(&data)
        .and(&mask)
        .map_collect(|value, &selected| if selected { value.clone() } else { T::default() }))
}

/// Number of selected pixels.
#[must_use]
pub fn count_selected(mask: ArrayView2<'_, bool>) -> usize {
    mask.iter().filter(|&&selected| selected).count()
}
