//! # Crosshatch
//!
//! Engraving-style hatching. Each cell gets `⌊4 · intensity⌋ + 1` parallel
//! strokes at `line_angle + 45°`, spread evenly across the cell; past half
//! intensity a second set at `line_angle − 45°` crosses them.
//!
//! Hatching is always line art: 1px strokes in fill mode, the configured
//! stroke width in stroke mode.

use super::PatternConfig;
use crate::color::IntensityMap;
use crate::geometry::direction_deg;
use crate::grid::lattice;
use crate::primitive::{Primitive, RenderStyle};

/// Intensities at or below this draw nothing.
pub const THRESHOLD: f32 = 0.1;

/// Above this intensity the crossing diagonal is added.
pub const CROSS_THRESHOLD: f32 = 0.5;

/// Strokes per direction for an intensity.
pub fn line_count(intensity: f32) -> usize {
    (4.0 * intensity).floor() as usize + 1
}

pub fn generate(map: &IntensityMap, cfg: &PatternConfig) -> Vec<Primitive> {
    let width = match cfg.style {
        RenderStyle::Fill => 1.0,
        RenderStyle::Stroke => cfg.stroke_width,
    };
    let half_len = cfg.spacing / 2.0;
    let mut out = Vec::new();

    for (x, y) in lattice(map.width(), map.height(), cfg.angle, cfg.spacing, 0.5) {
        let Some(intensity) = map.sample(x, y) else {
            continue;
        };
        if intensity <= THRESHOLD {
            continue;
        }
        let n = line_count(intensity);
        let gap = cfg.spacing / (n + 1) as f64;

        let mut directions = vec![cfg.line_angle + 45.0];
        if intensity > CROSS_THRESHOLD {
            directions.push(cfg.line_angle - 45.0);
        }

        for angle in directions {
            let (dx, dy) = direction_deg(angle);
            for k in 0..n {
                let offset = (k as f64 - (n - 1) as f64 / 2.0) * gap;
                let (cx, cy) = (x - dy * offset, y + dx * offset);
                out.push(Primitive::line(
                    cx - dx * half_len,
                    cy - dy * half_len,
                    cx + dx * half_len,
                    cy + dy * half_len,
                    width,
                ));
            }
        }
    }
    out
}
