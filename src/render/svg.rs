//! # SVG Serialisation
//!
//! Vector twin of [`super::raster`]. A channel document is always:
//!
//! ```text
//! <svg xmlns=... width=W height=H viewBox="0 0 W H">
//!   <rect width=W height=H fill="#ffffff"/>      background
//!   <g fill="#rrggbb">                           channel colour
//!     <circle/> <rect/> <line/> <polygon/> <path/> ...
//!   </g>
//! </svg>
//! ```
//!
//! Numbers are printed with two decimals; primitives are already rounded to
//! that precision, so the markup and the raster agree exactly.

use std::fmt;

use crate::color::Rgb;
use crate::primitive::{Paint, Primitive, Shape};

/// One primitive as an SVG element.
pub struct Element<'a> {
    pub primitive: &'a Primitive,
    pub color: Rgb,
}

fn write_points(f: &mut fmt::Formatter<'_>, points: &[(f64, f64)]) -> fmt::Result {
    for (i, (x, y)) in points.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{:.2},{:.2}", x, y)?;
    }
    Ok(())
}

impl fmt::Display for Element<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.primitive.shape {
            Shape::Circle { cx, cy, r } => {
                write!(f, r#"<circle cx="{:.2}" cy="{:.2}" r="{:.2}""#, cx, cy, r)?
            }
            Shape::Rect {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}""#,
                x, y, width, height
            )?,
            Shape::Line { x1, y1, x2, y2 } => write!(
                f,
                r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}""#,
                x1, y1, x2, y2
            )?,
            Shape::Polygon { points } => {
                f.write_str(r#"<polygon points=""#)?;
                write_points(f, points)?;
                f.write_str("\"")?;
            }
            Shape::Path { points, closed } => {
                f.write_str(r#"<path d=""#)?;
                for (i, (x, y)) in points.iter().enumerate() {
                    let cmd = if i == 0 { "M" } else { " L" };
                    write!(f, "{} {:.2} {:.2}", cmd, x, y)?;
                }
                if *closed {
                    f.write_str(" Z")?;
                }
                f.write_str("\"")?;
            }
        }

        if let Paint::Stroke(width) = self.primitive.paint {
            write!(
                f,
                r#" fill="none" stroke="{}" stroke-width="{:.2}""#,
                self.color, width
            )?;
        }
        f.write_str("/>")
    }
}

/// A complete single-channel SVG document.
pub struct Document<'a> {
    pub width: usize,
    pub height: usize,
    pub primitives: &'a [Primitive],
    pub color: Rgb,
}

impl fmt::Display for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (self.width, self.height);
        writeln!(
            f,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
        )?;
        writeln!(f, r#"<rect width="{w}" height="{h}" fill="{}"/>"#, Rgb::WHITE)?;
        writeln!(f, r#"<g fill="{}">"#, self.color)?;
        for primitive in self.primitives {
            writeln!(
                f,
                "{}",
                Element {
                    primitive,
                    color: self.color
                }
            )?;
        }
        writeln!(f, "</g>")?;
        writeln!(f, "</svg>")
    }
}

/// Serialise a channel's primitives to an SVG string.
pub fn document(width: usize, height: usize, primitives: &[Primitive], color: Rgb) -> String {
    Document {
        width,
        height,
        primitives,
        color,
    }
    .to_string()
}
