//! arcroi-core: Core types for annular-sector region-of-interest geometry.
//!
//! This crate provides the value types shared by the geometry resolver and
//! the mask rasterizer: control points and their named set, the bounding
//! circle, the derived sector geometry, and the conventions that select
//! between legacy-compatible and corrected behaviour.
//!

pub mod angle;
pub mod circle;
pub mod config;
pub mod error;
pub mod geometry;
pub mod handles;
pub mod point;

pub use circle::BoundingCircle;
pub use config::{AngleConvention, InnerRadiusScale, RoiConfig};
pub use error::{Error, Result};
pub use geometry::{AnnularSectorGeometry, GeometryListener};
pub use handles::{HandleId, HandleSet};
pub use point::{ControlPoint, DraggablePoint, Point, Rect};
