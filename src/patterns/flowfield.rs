//! # Flow Field
//!
//! Short strokes that follow the local image gradient, so marks trace the
//! edges and ramps of the picture. Each stroke starts at its lattice point
//! with a small dot and runs `dot_size · intensity · 2` along the gradient.
//!
//! Flat regions have a zero gradient; their strokes fall back to the line
//! angle. Border pixels have no gradient at all and are skipped.

use super::PatternConfig;
use crate::geometry::direction_deg;
use crate::gradient::GradientField;
use crate::grid::Sample;
use crate::primitive::{Paint, Primitive, RenderStyle};

/// Intensities at or below this draw nothing.
pub const THRESHOLD: f32 = 0.1;

pub fn shape(s: Sample, field: &GradientField, cfg: &PatternConfig, out: &mut Vec<Primitive>) {
    if s.intensity <= THRESHOLD {
        return;
    }
    let Some((gx, gy)) = field.at(s.x.floor() as usize, s.y.floor() as usize) else {
        return;
    };
    let (dx, dy) = if gx == 0.0 && gy == 0.0 {
        direction_deg(cfg.line_angle)
    } else {
        (gx as f64, gy as f64)
    };

    let i = s.intensity as f64;
    let length = cfg.dot_size * i * 2.0;
    let width = match cfg.style {
        RenderStyle::Fill => (i * cfg.dot_size * 0.3).max(0.5),
        RenderStyle::Stroke => cfg.stroke_width,
    };

    out.push(Primitive::line(s.x, s.y, s.x + dx * length, s.y + dy * length, width));
    let dot = match cfg.style {
        RenderStyle::Fill => Paint::Fill,
        RenderStyle::Stroke => Paint::stroke(cfg.stroke_width),
    };
    out.push(Primitive::circle(s.x, s.y, width / 2.0, dot));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::IntensityMap;
    use crate::patterns::PatternType;
    use crate::patterns::test_support::config;
    use crate::primitive::Shape;

    fn sample(x: f64, y: f64, intensity: f32) -> Sample {
        Sample { x, y, intensity }
    }

    #[test]
    fn test_stroke_follows_gradient() {
        let map = IntensityMap::from_fn(20, 20, |x, _| x as f32 / 19.0);
        let field = GradientField::compute(&map);
        let mut out = Vec::new();
        shape(sample(10.0, 10.0, 0.5), &field, &config(PatternType::FlowField), &mut out);
        assert_eq!(out.len(), 2);
        // length 8 along -x; width max(0.5, 0.5 * 8 * 0.3) = 1.2
        assert_eq!(out[0].shape, Shape::Line { x1: 10.0, y1: 10.0, x2: 2.0, y2: 10.0 });
        assert_eq!(out[0].paint, Paint::Stroke(1.2));
        assert_eq!(out[1].shape, Shape::Circle { cx: 10.0, cy: 10.0, r: 0.6 });
    }

    #[test]
    fn test_border_skipped() {
        let map = IntensityMap::uniform(10, 10, 1.0);
        let field = GradientField::compute(&map);
        let mut out = Vec::new();
        shape(sample(0.5, 5.0, 1.0), &field, &config(PatternType::FlowField), &mut out);
        shape(sample(5.0, 9.2, 1.0), &field, &config(PatternType::FlowField), &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_flat_region_uses_line_angle() {
        let map = IntensityMap::uniform(10, 10, 1.0);
        let field = GradientField::compute(&map);
        let cfg = PatternConfig {
            line_angle: 90.0,
            ..config(PatternType::FlowField)
        };
        let mut out = Vec::new();
        shape(sample(5.0, 5.0, 0.5), &field, &cfg, &mut out);
        assert_eq!(out[0].shape, Shape::Line { x1: 5.0, y1: 5.0, x2: 5.0, y2: 13.0 });
    }

    #[test]
    fn test_flat_maps_follow_line_angle() {
        let cfg = PatternConfig {
            line_angle: 0.0,
            ..config(PatternType::FlowField)
        };
        for v in [0.2, 0.4, 0.7, 0.9] {
            let map = IntensityMap::uniform(24, 24, v);
            let prims = crate::patterns::generate(&map, &cfg, &mut crate::random::SeededRandom::default());
            assert!(!prims.is_empty());
            for p in &prims {
                if let Shape::Line { y1, y2, x1, x2 } = p.shape {
                    assert_eq!(y1, y2, "v = {} drew a non-horizontal stroke", v);
                    assert!(x2 > x1);
                }
            }
        }
    }

    #[test]
    fn test_threshold() {
        let map = IntensityMap::uniform(10, 10, 1.0);
        let field = GradientField::compute(&map);
        let mut out = Vec::new();
        shape(sample(5.0, 5.0, 0.1), &field, &config(PatternType::FlowField), &mut out);
        assert!(out.is_empty());
    }
}
