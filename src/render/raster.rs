//! # Raster Surface
//!
//! Draws [`Primitive`]s onto an RGBA pixmap with `tiny-skia`. The surface
//! starts white and every primitive is inked in the channel colour, fully
//! opaque, so the pixel buffer never carries partial alpha and can be handed
//! to `image` as straight RGBA.

use image::RgbaImage;
use tiny_skia::{FillRule, LineCap, PathBuilder, Pixmap, Rect, Stroke, Transform};

use crate::color::Rgb;
use crate::error::{HalftoneError, Result};
use crate::primitive::{Paint, Primitive, Shape};

/// One channel's raster preview.
#[derive(Debug, Clone)]
pub struct Surface {
    pixmap: Pixmap,
    color: Rgb,
    draw_calls: usize,
}

impl Surface {
    /// Allocate a white surface. Fails with `ResourceExhausted` when the
    /// pixmap cannot be allocated (zero-sized or too large).
    pub fn new(width: usize, height: usize, color: Rgb) -> Result<Self> {
        let exhausted =
            || HalftoneError::ResourceExhausted(format!("cannot allocate {}x{} raster surface", width, height));
        let w = u32::try_from(width).map_err(|_| exhausted())?;
        let h = u32::try_from(height).map_err(|_| exhausted())?;
        let mut pixmap = Pixmap::new(w, h).ok_or_else(exhausted)?;
        pixmap.fill(tiny_skia::Color::WHITE);
        Ok(Self {
            pixmap,
            color,
            draw_calls: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Number of primitives drawn so far.
    pub fn draw_calls(&self) -> usize {
        self.draw_calls
    }

    /// Draw one primitive. Degenerate geometry (zero radius, empty polygon)
    /// counts as a draw call but leaves no pixels.
    pub fn draw(&mut self, primitive: &Primitive) {
        self.draw_calls += 1;
        let Some(path) = build_path(&primitive.shape) else {
            return;
        };

        let mut paint = tiny_skia::Paint::default();
        paint.set_color_rgba8(self.color.r, self.color.g, self.color.b, 255);
        paint.anti_alias = true;

        match primitive.paint {
            Paint::Fill => {
                self.pixmap
                    .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
            }
            Paint::Stroke(width) => {
                let stroke = Stroke {
                    width: width as f32,
                    line_cap: LineCap::Butt,
                    ..Stroke::default()
                };
                self.pixmap
                    .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
            }
        }
    }

    /// RGBA bytes of one pixel, or `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixmap
            .pixel(x, y)
            .map(|c| [c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Copy into an `image` buffer.
    pub fn to_image(&self) -> Result<RgbaImage> {
        RgbaImage::from_raw(self.width(), self.height(), self.pixmap.data().to_vec())
            .ok_or_else(|| HalftoneError::Image("raster buffer size mismatch".into()))
    }
}

fn polyline(points: &[(f64, f64)], closed: bool) -> Option<tiny_skia::Path> {
    let (&(x0, y0), rest) = points.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(x0 as f32, y0 as f32);
    for &(x, y) in rest {
        pb.line_to(x as f32, y as f32);
    }
    if closed {
        pb.close();
    }
    pb.finish()
}

fn build_path(shape: &Shape) -> Option<tiny_skia::Path> {
    match *shape {
        Shape::Circle { cx, cy, r } => PathBuilder::from_circle(cx as f32, cy as f32, r as f32),
        Shape::Rect {
            x,
            y,
            width,
            height,
        } => Rect::from_xywh(x as f32, y as f32, width as f32, height as f32).map(PathBuilder::from_rect),
        Shape::Line { x1, y1, x2, y2 } => polyline(&[(x1, y1), (x2, y2)], false),
        Shape::Polygon { ref points } => polyline(points, true),
        Shape::Path { ref points, closed } => polyline(points, closed),
    }
}
