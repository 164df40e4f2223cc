//! # HPGL Export
//!
//! Simplified HP-GL for pen plotters. Plotters only trace outlines, so fill
//! and stroke primitives encode the same way:
//!
//! | Primitive | Commands |
//! |-----------|----------|
//! | circle | `PU x,y;CI r;` |
//! | line | `PU x1,y1;PD x2,y2;` |
//! | rect / polygon | `PU p0;PD p1,…,pn,p0;` |
//! | path | `PU p0;PD p1,…,pn;` |
//!
//! Coordinates are scaled by [`UNITS_PER_PIXEL`] and Y is flipped, since the
//! plotter origin is bottom-left.

use std::fmt;

use crate::primitive::{Primitive, Shape};

/// Plotter units per source pixel.
pub const UNITS_PER_PIXEL: f64 = 40.0;

/// HPGL program for one channel.
pub struct Hpgl<'a> {
    pub primitives: &'a [Primitive],
    /// Canvas height in pixels, for the Y flip.
    pub height: usize,
}

impl Hpgl<'_> {
    fn point(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (x * UNITS_PER_PIXEL).round() as i64,
            ((self.height as f64 - y) * UNITS_PER_PIXEL).round() as i64,
        )
    }

    fn write_run(&self, f: &mut fmt::Formatter<'_>, points: &[(f64, f64)], closed: bool) -> fmt::Result {
        let Some((&(x0, y0), rest)) = points.split_first() else {
            return Ok(());
        };
        let (px, py) = self.point(x0, y0);
        write!(f, "PU{},{};", px, py)?;
        if rest.is_empty() {
            return Ok(());
        }
        f.write_str("PD")?;
        let tail = closed.then_some((x0, y0));
        for (i, &(x, y)) in rest.iter().chain(tail.iter()).enumerate() {
            let (px, py) = self.point(x, y);
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{},{}", px, py)?;
        }
        f.write_str(";")
    }
}

impl fmt::Display for Hpgl<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IN;SP1;")?;
        for primitive in self.primitives {
            match &primitive.shape {
                Shape::Circle { cx, cy, r } => {
                    let (px, py) = self.point(*cx, *cy);
                    let pr = (r * UNITS_PER_PIXEL).round() as i64;
                    write!(f, "PU{},{};CI{};", px, py, pr)?;
                }
                Shape::Line { x1, y1, x2, y2 } => {
                    self.write_run(f, &[(*x1, *y1), (*x2, *y2)], false)?;
                }
                Shape::Rect {
                    x,
                    y,
                    width,
                    height,
                } => {
                    let corners = [(*x, *y), (x + width, *y), (x + width, y + height), (*x, y + height)];
                    self.write_run(f, &corners, true)?;
                }
                Shape::Polygon { points } => self.write_run(f, points, true)?,
                Shape::Path { points, closed } => self.write_run(f, points, *closed)?,
            }
            writeln!(f)?;
        }
        writeln!(f, "PU;SP0;")
    }
}

/// Encode primitives as an HPGL program.
pub fn encode(primitives: &[Primitive], height: usize) -> String {
    Hpgl { primitives, height }.to_string()
}
