//! # Line
//!
//! Line screen: one short segment per cell, all running along the line angle.
//! Segment length is fixed at `spacing · 0.8`; intensity sets the line width
//! (`dot_size · intensity`), so dark areas read as heavy rules.
//!
//! The lattice is cell centred and turned by the screen angle. In stroke mode
//! the outline of each thick segment is traced instead.

use super::PatternConfig;
use crate::color::IntensityMap;
use crate::geometry::direction_deg;
use crate::grid::lattice;
use crate::primitive::{Paint, Primitive, RenderStyle};

/// Lines at or below this width are not drawn.
pub const MIN_WIDTH: f64 = 0.2;

/// Segment length as a fraction of the spacing.
pub const LENGTH_FACTOR: f64 = 0.8;

pub fn generate(map: &IntensityMap, cfg: &PatternConfig) -> Vec<Primitive> {
    let (dx, dy) = direction_deg(cfg.line_angle);
    let half_len = cfg.spacing * LENGTH_FACTOR / 2.0;
    let mut out = Vec::new();

    for (x, y) in lattice(map.width(), map.height(), cfg.angle, cfg.spacing, 0.5) {
        let Some(intensity) = map.sample(x, y) else {
            continue;
        };
        let width = cfg.dot_size * intensity as f64;
        if width <= MIN_WIDTH {
            continue;
        }

        let (x1, y1) = (x - dx * half_len, y - dy * half_len);
        let (x2, y2) = (x + dx * half_len, y + dy * half_len);
        match cfg.style {
            RenderStyle::Fill => out.push(Primitive::line(x1, y1, x2, y2, width)),
            RenderStyle::Stroke => {
                let (nx, ny) = (-dy * width / 2.0, dx * width / 2.0);
                let outline = [
                    (x1 + nx, y1 + ny),
                    (x2 + nx, y2 + ny),
                    (x2 - nx, y2 - ny),
                    (x1 - nx, y1 - ny),
                ];
                out.push(Primitive::polygon(outline, Paint::stroke(cfg.stroke_width)));
            }
        }
    }
    out
}
