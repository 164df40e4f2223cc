//! # Primitives
//!
//! Shape generators never draw. They return [`Primitive`] descriptors, and two
//! independent consumers read them: the raster surface
//! ([`crate::render::raster`]) and the SVG serialiser ([`crate::render::svg`]).
//!
//! All coordinates are rounded to two decimals when a primitive is built, so
//! the pixels and the markup are produced from identical numbers.

use serde::{Deserialize, Serialize};

use crate::geometry::round2;

/// Fill vs outline rendering for shapes that support both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    #[default]
    Fill,
    Stroke,
}

impl RenderStyle {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "fill" => Some(Self::Fill),
            "stroke" | "outline" => Some(Self::Stroke),
            _ => None,
        }
    }
}

/// How a primitive's geometry is inked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    /// Solid interior.
    Fill,
    /// Outline only, at the given width in pixels.
    Stroke(f64),
}

impl Paint {
    /// Paint for closed shapes under a render style.
    pub fn for_style(style: RenderStyle, stroke_width: f64) -> Self {
        match style {
            RenderStyle::Fill => Paint::Fill,
            RenderStyle::Stroke => Paint::stroke(stroke_width),
        }
    }

    pub fn stroke(width: f64) -> Self {
        Paint::Stroke(round2(width))
    }
}

/// Geometry of one drawn mark.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    Polygon {
        points: Vec<(f64, f64)>,
    },
    Path {
        points: Vec<(f64, f64)>,
        closed: bool,
    },
}

/// A shape plus the way it is inked.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    pub shape: Shape,
    pub paint: Paint,
}

fn round_points(points: impl IntoIterator<Item = (f64, f64)>) -> Vec<(f64, f64)> {
    points.into_iter().map(|(x, y)| (round2(x), round2(y))).collect()
}

impl Primitive {
    pub fn circle(cx: f64, cy: f64, r: f64, paint: Paint) -> Self {
        Self {
            shape: Shape::Circle {
                cx: round2(cx),
                cy: round2(cy),
                r: round2(r),
            },
            paint,
        }
    }

    pub fn rect(x: f64, y: f64, width: f64, height: f64, paint: Paint) -> Self {
        Self {
            shape: Shape::Rect {
                x: round2(x),
                y: round2(y),
                width: round2(width),
                height: round2(height),
            },
            paint,
        }
    }

    /// Straight segment. Lines are always stroked.
    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64, width: f64) -> Self {
        Self {
            shape: Shape::Line {
                x1: round2(x1),
                y1: round2(y1),
                x2: round2(x2),
                y2: round2(y2),
            },
            paint: Paint::stroke(width),
        }
    }

    pub fn polygon(points: impl IntoIterator<Item = (f64, f64)>, paint: Paint) -> Self {
        Self {
            shape: Shape::Polygon {
                points: round_points(points),
            },
            paint,
        }
    }

    /// Open polyline, always stroked.
    pub fn path(points: impl IntoIterator<Item = (f64, f64)>, width: f64) -> Self {
        Self {
            shape: Shape::Path {
                points: round_points(points),
                closed: false,
            },
            paint: Paint::stroke(width),
        }
    }

    /// SVG element name for this primitive.
    pub fn tag(&self) -> &'static str {
        match self.shape {
            Shape::Circle { .. } => "circle",
            Shape::Rect { .. } => "rect",
            Shape::Line { .. } => "line",
            Shape::Polygon { .. } => "polygon",
            Shape::Path { .. } => "path",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_round() {
        let p = Primitive::circle(1.23456, 2.0, 3.999, Paint::Fill);
        assert_eq!(
            p.shape,
            Shape::Circle {
                cx: 1.23,
                cy: 2.0,
                r: 4.0
            }
        );
        let l = Primitive::line(0.0, 0.0, 1.0, 1.0, 0.333);
        assert_eq!(l.paint, Paint::Stroke(0.33));
        assert_eq!(l.tag(), "line");
    }

    #[test]
    fn test_paint_for_style() {
        assert_eq!(Paint::for_style(RenderStyle::Fill, 2.0), Paint::Fill);
        assert_eq!(Paint::for_style(RenderStyle::Stroke, 1.5), Paint::Stroke(1.5));
    }

    #[test]
    fn test_render_style_names() {
        assert_eq!(RenderStyle::from_name("STROKE"), Some(RenderStyle::Stroke));
        assert_eq!(RenderStyle::from_name("fill"), Some(RenderStyle::Fill));
        assert_eq!(RenderStyle::from_name("hatch"), None);
    }
}
