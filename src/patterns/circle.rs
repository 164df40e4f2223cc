//! # Circle
//!
//! Classic amplitude-modulated dot screen: one dot per lattice point, radius
//! proportional to intensity.

use super::PatternConfig;
use crate::grid::Sample;
use crate::primitive::Primitive;

/// Dots at or below this radius are not drawn.
pub const MIN_RADIUS: f64 = 0.5;

pub fn shape(s: Sample, cfg: &PatternConfig, out: &mut Vec<Primitive>) {
    let r = cfg.dot_size / 2.0 * s.intensity as f64;
    if r > MIN_RADIUS {
        out.push(Primitive::circle(s.x, s.y, r, cfg.paint()));
    }
}
