//! # Voronoi (jittered cells)
//!
//! Organic cell texture. Despite the name this is not a Voronoi tessellation:
//! no cell boundaries are computed. Each point of the rotated lattice is
//! jittered by up to `spacing · randomness / 100`, and an irregular hexagon
//! is drawn around it. Vertex `k` sits at `k · 60° + angle` with a radius of
//! `dot_size · intensity` scaled independently by 0.7–1.3.

use super::PatternConfig;
use crate::color::IntensityMap;
use crate::geometry::polar;
use crate::grid::lattice;
use crate::primitive::Primitive;
use crate::random::RandomSource;

/// Intensities at or below this draw nothing.
pub const THRESHOLD: f32 = 0.05;

pub fn generate(map: &IntensityMap, cfg: &PatternConfig, rng: &mut dyn RandomSource) -> Vec<Primitive> {
    let jitter = cfg.spacing * cfg.randomness / 100.0;
    let paint = cfg.paint();
    let mut out = Vec::new();

    for (x, y) in lattice(map.width(), map.height(), cfg.angle, cfg.spacing, 0.0) {
        let Some(intensity) = map.sample(x, y) else {
            continue;
        };
        if intensity <= THRESHOLD {
            continue;
        }
        let cx = x + (rng.next() - 0.5) * jitter;
        let cy = y + (rng.next() - 0.5) * jitter;
        let base = cfg.dot_size * intensity as f64;

        let points: Vec<_> = (0..6)
            .map(|k| {
                let theta = (k as f64 * 60.0 + cfg.angle).to_radians();
                let r = base * (0.7 + rng.next() * 0.6);
                polar(cx, cy, r, theta)
            })
            .collect();
        out.push(Primitive::polygon(points, paint));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::PatternType;
    use crate::patterns::test_support::config;
    use crate::primitive::Shape;
    use crate::random::SeededRandom;

    #[test]
    fn test_one_cell_per_lattice_point() {
        let map = IntensityMap::uniform(24, 24, 1.0);
        let prims = generate(&map, &config(PatternType::Voronoi), &mut SeededRandom::default());
        assert_eq!(prims.len(), 4);
    }

    #[test]
    fn test_vertex_radius_range() {
        let map = IntensityMap::uniform(24, 24, 1.0);
        let cfg = PatternConfig {
            randomness: 0.0,
            ..config(PatternType::Voronoi)
        };
        let half = (24.0f64 * 24.0 * 2.0).sqrt() / 2.0;
        let c = -half + 24.0;
        let prims = generate(&map, &cfg, &mut SeededRandom::default());
        let Shape::Polygon { points } = &prims[0].shape else {
            panic!("expected polygon");
        };
        assert_eq!(points.len(), 6);
        for &(x, y) in points {
            let d = ((x - c).powi(2) + (y - c).powi(2)).sqrt();
            assert!(d >= 8.0 * 0.7 - 0.02 && d <= 8.0 * 1.3 + 0.02, "d = {}", d);
        }
    }

    #[test]
    fn test_threshold() {
        let map = IntensityMap::uniform(24, 24, 0.05);
        let prims = generate(&map, &config(PatternType::Voronoi), &mut SeededRandom::default());
        assert!(prims.is_empty());
    }
}
