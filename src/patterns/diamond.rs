//! # Diamond
//!
//! A square of side `dot_size · intensity` turned 45° about its own centre,
//! emitted as a four-point polygon.

use std::f64::consts::SQRT_2;

use super::PatternConfig;
use crate::grid::Sample;
use crate::primitive::Primitive;

/// Diamonds at or below this side length are not drawn.
pub const MIN_SIZE: f64 = 0.5;

pub fn shape(s: Sample, cfg: &PatternConfig, out: &mut Vec<Primitive>) {
    let size = cfg.dot_size * s.intensity as f64;
    if size > MIN_SIZE {
        // Half the diagonal of the rotated square
        let d = size / SQRT_2;
        let points = [(s.x, s.y - d), (s.x + d, s.y), (s.x, s.y + d), (s.x - d, s.y)];
        out.push(Primitive::polygon(points, cfg.paint()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternType;
    use crate::patterns::test_support::{at, config};
    use crate::primitive::Shape;

    #[test]
    fn test_vertices() {
        let mut out = Vec::new();
        shape(at(1.0), &config(PatternType::Diamond), &mut out);
        let Shape::Polygon { points } = &out[0].shape else {
            panic!("expected polygon");
        };
        assert_eq!(points.len(), 4);
        // d = 8 / sqrt(2) = 5.656... -> 5.66
        assert_eq!(points[0], (50.0, 44.34));
        assert_eq!(points[1], (55.66, 50.0));
    }

    #[test]
    fn test_threshold() {
        let cfg = config(PatternType::Diamond);
        let mut out = Vec::new();
        shape(at(0.05), &cfg, &mut out);
        assert!(out.is_empty());
        shape(at(0.1), &cfg, &mut out);
        assert_eq!(out.len(), 1);
    }
}
