//! # Square
//!
//! Axis-aligned squares centred on each lattice point.

use super::PatternConfig;
use crate::grid::Sample;
use crate::primitive::Primitive;

/// Squares at or below this side length are not drawn.
pub const MIN_SIZE: f64 = 0.5;

pub fn shape(s: Sample, cfg: &PatternConfig, out: &mut Vec<Primitive>) {
    let size = cfg.dot_size * s.intensity as f64;
    if size > MIN_SIZE {
        let half = size / 2.0;
        out.push(Primitive::rect(s.x - half, s.y - half, size, size, cfg.paint()));
    }
}
