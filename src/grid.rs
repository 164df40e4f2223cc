//! # Rotated Grid Sampling
//!
//! Halftone screens are square lattices turned by a screen angle. To cover the
//! whole canvas at any angle, the lattice spans the canvas diagonal in both
//! axes before rotation:
//!
//! ```text
//!   diagonal = sqrt(w² + h²)
//!   lattice  = { -diagonal/2 + k·spacing }  for both axes, < diagonal/2
//!
//!   x = xg·cosθ − yg·sinθ + w/2
//!   y = xg·sinθ + yg·cosθ + h/2
//! ```
//!
//! Points that land outside `[0, w) × [0, h)` are dropped. [`sample`] is the
//! one routine used by every grid-based pattern so screen angles behave the
//! same across all of them; bespoke patterns that need a cell-centred lattice
//! call [`lattice`] directly with an offset.

use crate::color::IntensityMap;
use crate::geometry::rotate;
use crate::primitive::Primitive;

/// One retained lattice point with the intensity under it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
    pub intensity: f32,
}

/// Rotated lattice points that land on the canvas, row by row.
///
/// `offset` shifts the lattice by a fraction of a cell before rotation
/// (0.0 = corner aligned, 0.5 = cell centred). A non-positive spacing yields
/// no points.
pub fn lattice(
    width: usize,
    height: usize,
    angle: f64,
    spacing: f64,
    offset: f64,
) -> impl Iterator<Item = (f64, f64)> {
    let w = width as f64;
    let h = height as f64;
    let diagonal = (w * w + h * h).sqrt();
    let half = diagonal / 2.0;
    let theta = angle.to_radians();

    let steps = if spacing > 0.0 && spacing.is_finite() {
        (diagonal / spacing).ceil() as usize + 1
    } else {
        0
    };
    let axis = move || {
        (0..steps)
            .map(move |i| -half + (i as f64 + offset) * spacing)
            .take_while(move |&v| v < half)
    };

    axis()
        .flat_map(move |yg| axis().map(move |xg| (xg, yg)))
        .map(move |(xg, yg)| {
            let (x, y) = rotate(xg, yg, theta);
            (x + w / 2.0, y + h / 2.0)
        })
        .filter(move |&(x, y)| x >= 0.0 && x < w && y >= 0.0 && y < h)
}

/// Walk the rotated lattice over `map`, handing each on-canvas point to `draw`.
///
/// `draw` may push any number of primitives; they are returned in lattice
/// order.
pub fn sample<F>(map: &IntensityMap, angle: f64, spacing: f64, mut draw: F) -> Vec<Primitive>
where
    F: FnMut(Sample, &mut Vec<Primitive>),
{
    let mut out = Vec::new();
    for (x, y) in lattice(map.width(), map.height(), angle, spacing, 0.0) {
        if let Some(intensity) = map.sample(x, y) {
            draw(Sample { x, y, intensity }, &mut out);
        }
    }
    out
}
