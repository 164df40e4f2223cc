//! # Spiral
//!
//! An Archimedean spiral per lattice point, drawn as one open path. Darker
//! points wind more (`3 · intensity + 1` turns, 20 segments per turn) and
//! reach further (`dot_size · intensity`).

use std::f64::consts::TAU;

use super::PatternConfig;
use crate::grid::Sample;
use crate::primitive::{Primitive, RenderStyle};

/// Intensities at or below this draw nothing.
pub const THRESHOLD: f32 = 0.1;

/// Path segments per full turn.
pub const SEGMENTS_PER_TURN: f64 = 20.0;

pub fn shape(s: Sample, cfg: &PatternConfig, out: &mut Vec<Primitive>) {
    if s.intensity <= THRESHOLD {
        return;
    }
    let i = s.intensity as f64;
    let turns = 3.0 * i + 1.0;
    let max_r = cfg.dot_size * i;
    let segments = (turns * SEGMENTS_PER_TURN).ceil() as usize;

    let points = (0..=segments).map(|n| {
        let t = n as f64 / segments as f64;
        let theta = t * turns * TAU;
        let r = t * max_r;
        (s.x + r * theta.cos(), s.y + r * theta.sin())
    });

    let width = match cfg.style {
        RenderStyle::Fill => (i * 2.0).max(0.5),
        RenderStyle::Stroke => cfg.stroke_width,
    };
    out.push(Primitive::path(points, width));
}
