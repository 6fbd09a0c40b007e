//! Summary statistics over the pixels a sector selects.
#![allow(clippy::cast_precision_loss)]

use arcroi_core::{Error, Result};
use ndarray::{ArrayView2, Zip};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Statistics of the selected pixels. All zero when nothing is selected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SectorStatistics {
    /// Number of selected pixels.
    pub pixel_count: usize,
    /// Sum of selected values.
    pub sum: f64,
    /// Mean of selected values.
    pub mean: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Smallest selected value.
    pub min: f64,
    /// Largest selected value.
    pub max: f64,
}

impl SectorStatistics {
    /// Computes statistics of `data` where `mask` is set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShapeMismatch`] when the dimensions differ.
    pub fn from_masked<T>(data: ArrayView2<'_, T>, mask: ArrayView2<'_, bool>) -> Result<Self>
    where
        T: Copy + Into<f64>,
    {
        if data.dim() != mask.dim() {
            return Err(Error::ShapeMismatch {
                expected: mask.dim(),
                actual: data.dim(),
            });
        }

        let mut count = 0usize;
        let mut sum = 0.0;
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        Zip::from(&data).and(&mask).for_each(|&value, &selected| {
            if selected {
                let value: f64 = value.into();
                count += 1;
                sum += value;
                min = min.min(value);
                max = max.max(value);
            }
        });

        if count == 0 {
            return Ok(Self::default());
        }

        let mean = sum / count as f64;
        let mut squares = 0.0;
        Zip::from(&data).and(&mask).for_each(|&value, &selected| {
            if selected {
                let value: f64 = value.into();
                squares += (value - mean).powi(2);
            }
        });

        Ok(Self {
            pixel_count: count,
            sum,
            mean,
            std_dev: (squares / count as f64).sqrt(),
            min,
            max,
        })
    }
}
