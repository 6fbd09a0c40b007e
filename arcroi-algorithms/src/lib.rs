//! arcroi-algorithms: Geometry resolution and mask rasterization for
//! annular-sector ROIs.
//!
//! - **Resolver** - handle offsets to radii and sweep, O(1) per call
//! - **Rasterizer** - sector to boolean pixel mask, O(width x height), rows in parallel
//! - **ArcRoi** - ROI model tying handles, bounding circle, listeners and drags together
//!
#![warn(missing_docs)]

mod raster;
mod resolve;
mod roi;
mod stats;

pub use raster::{apply_mask, count_selected, rasterize, MaskShape};
pub use resolve::resolve_geometry;
pub use roi::ArcRoi;
pub use stats::SectorStatistics;

// Re-export core types
pub use arcroi_core::{
    AngleConvention, AnnularSectorGeometry, BoundingCircle, Error, GeometryListener, HandleId,
    HandleSet, InnerRadiusScale, Point, Rect, Result, RoiConfig,
};
