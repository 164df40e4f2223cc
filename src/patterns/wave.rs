//! # Wave
//!
//! One dot per lattice point, pushed back and forth along the line angle by a
//! sine of its position across that direction. Rows of dots read as ripples
//! whose amplitude grows with intensity.
//!
//! ```text
//!   d         = (cos lineAngle, sin lineAngle)
//!   phase     = (−x·d.y + y·d.x) · 2π / (spacing · 4)
//!   position  = (x, y) + d · sin(phase) · dot_size · i
//!   radius    = max(1, dot_size · i · 0.3)
//! ```

use std::f64::consts::TAU;

use super::PatternConfig;
use crate::geometry::direction_deg;
use crate::grid::Sample;
use crate::primitive::Primitive;

/// Intensities at or below this draw nothing.
pub const THRESHOLD: f32 = 0.1;

pub fn shape(s: Sample, cfg: &PatternConfig, out: &mut Vec<Primitive>) {
    if s.intensity <= THRESHOLD {
        return;
    }
    let i = s.intensity as f64;
    let wavelength = cfg.spacing * 4.0;
    let amplitude = cfg.dot_size * i;
    let (dx, dy) = direction_deg(cfg.line_angle);

    let across = -s.x * dy + s.y * dx;
    let offset = (across * TAU / wavelength).sin() * amplitude;
    let r = (cfg.dot_size * i * 0.3).max(1.0);

    out.push(Primitive::circle(s.x + dx * offset, s.y + dy * offset, r, cfg.paint()));
}
