//! Coordinate helpers shared by the samplers and shape generators.

use std::f64::consts::PI;

/// Rotate a point around the origin.
///
/// # Parameters
/// - `x`, `y`: Point coordinates
/// - `angle`: Rotation angle in radians
#[inline]
pub fn rotate(x: f64, y: f64, angle: f64) -> (f64, f64) {
    let (sin_a, cos_a) = angle.sin_cos();
    (x * cos_a - y * sin_a, x * sin_a + y * cos_a)
}

/// Convert polar coordinates to Cartesian, offset by a centre.
#[inline]
pub fn polar(cx: f64, cy: f64, r: f64, theta: f64) -> (f64, f64) {
    (cx + r * theta.cos(), cy + r * theta.sin())
}

/// Unit direction vector for an angle in degrees.
#[inline]
pub fn direction_deg(angle_deg: f64) -> (f64, f64) {
    let (s, c) = (angle_deg * PI / 180.0).sin_cos();
    (c, s)
}

/// Round to two decimal places. Negative zero is normalised to `0.0`
/// so serialised output never shows `-0.00`.
#[inline]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0 + 0.0
}
