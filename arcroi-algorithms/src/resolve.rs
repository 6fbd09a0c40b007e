//! Geometry resolution from the handle set.
//!
//! Runs on every drag tick: constant time, no allocation, total over all
//! handle positions including the zero vector.

use arcroi_core::angle::{atan2_or_zero, polar_degrees, wrap_signed};
use arcroi_core::{AngleConvention, AnnularSectorGeometry, HandleSet, RoiConfig};

/// Derives radii and sweep from the current handle offsets.
///
/// * `outer_radius = |outer|`, `inner_radius = |inner|`
/// * `inner_radius_normalized` per [`RoiConfig::inner_radius`]
/// * `start_angle` is the polar angle of the left azimuth handle
/// * `arc_length` per [`RoiConfig::angles`]: the parity convention takes
///   `atan2(x, y)` of both azimuth handles and subtracts unwrapped; the
///   corrected convention takes the right handle's polar angle minus the
///   left one's, wrapped into `[-180, 180)`
#[must_use]
pub fn resolve_geometry(handles: &HandleSet, config: &RoiConfig) -> AnnularSectorGeometry {
    let outer_radius = handles.outer.length();
    let inner_radius = handles.inner.length();
    let left = handles.azimuth_left;
    let right = handles.azimuth_right;

    let start_angle = polar_degrees(left.x, left.y);
    let arc_length = match config.angles {
        // atan2(x, y) here, not atan2(y, x): legacy arc formula.
        AngleConvention::Parity => {
            (atan2_or_zero(left.x, left.y) - atan2_or_zero(right.x, right.y)).to_degrees()
        }
        AngleConvention::Corrected => wrap_signed(polar_degrees(right.x, right.y) - start_angle),
    };

    AnnularSectorGeometry {
        inner_radius,
        outer_radius,
        inner_radius_normalized: config.inner_radius.normalize(inner_radius, outer_radius),
        start_angle,
        arc_length,
    }
}
