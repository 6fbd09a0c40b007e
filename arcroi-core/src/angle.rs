//! Angle helpers shared by the resolver and the rasterizer.
//!
//! All angles are in degrees. `atan2(0, 0)` is pinned to `0` regardless of
//! the sign of the zeros so handle offsets at the origin resolve
//! deterministically.

/// Polar angle of `(x, y)` in radians, `0` for the zero vector.
#[inline]
#[must_use]
pub fn atan2_or_zero(y: f64, x: f64) -> f64 {
    if x == 0.0 && y == 0.0 {
        0.0
    } else {
        y.atan2(x)
    }
}

/// Polar angle of `(x, y)` in degrees, in `(-180, 180]`.
#[inline]
#[must_use]
pub fn polar_degrees(x: f64, y: f64) -> f64 {
    atan2_or_zero(y, x).to_degrees()
}

/// Wraps an angle difference into `[-180, 180)`.
#[inline]
#[must_use]
pub fn wrap_signed(degrees: f64) -> f64 {
    let wrapped = (degrees + 180.0).rem_euclid(360.0) - 180.0;
    // same rounding as wrap_positive: a hair below -180 lands on +180
    if wrapped >= 180.0 {
        -180.0
    } else {
        wrapped
    }
}

/// Wraps an angle into `[0, 360)`.
#[inline]
#[must_use]
pub fn wrap_positive(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
