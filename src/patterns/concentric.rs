//! # Concentric
//!
//! Nested rings around each lattice point. Darker areas get a larger outer
//! ring and more rings inside it (`⌊4 · intensity⌋ + 1`, so 1 to 5).
//!
//! Rings are line art: in fill mode the ring width follows the ring spacing
//! (`outer / rings · 0.3`), in stroke mode it is the configured stroke width.

use super::PatternConfig;
use crate::grid::Sample;
use crate::primitive::{Paint, Primitive, RenderStyle};

/// Intensities at or below this draw nothing.
pub const THRESHOLD: f32 = 0.1;

/// Number of rings for an intensity.
pub fn ring_count(intensity: f32) -> usize {
    (4.0 * intensity).floor() as usize + 1
}

pub fn shape(s: Sample, cfg: &PatternConfig, out: &mut Vec<Primitive>) {
    if s.intensity <= THRESHOLD {
        return;
    }
    let outer = cfg.dot_size * s.intensity as f64;
    let rings = ring_count(s.intensity);
    let width = match cfg.style {
        RenderStyle::Fill => outer / rings as f64 * 0.3,
        RenderStyle::Stroke => cfg.stroke_width,
    };

    for k in 1..=rings {
        let r = outer * k as f64 / rings as f64;
        out.push(Primitive::circle(s.x, s.y, r, Paint::stroke(width)));
    }
}
