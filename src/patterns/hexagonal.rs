//! # Hexagonal
//!
//! Regular hexagons with circumradius `dot_size · intensity`.

use std::f64::consts::PI;

use super::PatternConfig;
use crate::geometry::polar;
use crate::grid::Sample;
use crate::primitive::Primitive;

/// Intensities at or below this draw nothing.
pub const THRESHOLD: f32 = 0.05;

pub fn shape(s: Sample, cfg: &PatternConfig, out: &mut Vec<Primitive>) {
    if s.intensity <= THRESHOLD {
        return;
    }
    let r = cfg.dot_size * s.intensity as f64;
    let points = (0..6).map(|k| polar(s.x, s.y, r, k as f64 * PI / 3.0));
    out.push(Primitive::polygon(points, cfg.paint()));
}
