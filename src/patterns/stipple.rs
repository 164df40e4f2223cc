//! # Stipple
//!
//! Pen-and-ink stippling. A dense lattice (a third of the spacing) is walked;
//! each point fires with probability equal to its intensity and drops a dot
//! of radius `dot_size/6 .. dot_size/3`, jittered within its cell. Points
//! darker than 0.3 also get a small satellite dot (`dot_size / 12`) at a
//! random bearing, which thickens the darker tones.
//!
//! Stipple uses whatever [`RandomSource`] it is handed; the job decides
//! whether that is the shared seed or fresh entropy.

use std::f64::consts::TAU;

use super::PatternConfig;
use super::stochastic::axis;
use crate::color::IntensityMap;
use crate::geometry::polar;
use crate::primitive::Primitive;
use crate::random::RandomSource;

/// Above this intensity a satellite dot is added.
pub const SATELLITE_THRESHOLD: f32 = 0.3;

/// Smallest lattice step in pixels.
const MIN_STEP: f64 = 1.0;

pub fn generate(map: &IntensityMap, cfg: &PatternConfig, rng: &mut dyn RandomSource) -> Vec<Primitive> {
    let step = (cfg.spacing / 3.0).max(MIN_STEP);
    let paint = cfg.paint();
    let mut out = Vec::new();

    for y in axis(map.height(), step) {
        for x in axis(map.width(), step) {
            let Some(intensity) = map.sample(x, y) else {
                continue;
            };
            if rng.next() >= intensity as f64 {
                continue;
            }
            let px = x + (rng.next() - 0.5) * step;
            let py = y + (rng.next() - 0.5) * step;
            let r = cfg.dot_size / 6.0 + rng.next() * cfg.dot_size / 6.0;
            out.push(Primitive::circle(px, py, r, paint));

            if intensity > SATELLITE_THRESHOLD {
                let (sx, sy) = polar(px, py, cfg.dot_size / 4.0, rng.next() * TAU);
                out.push(Primitive::circle(sx, sy, cfg.dot_size / 12.0, paint));
            }
        }
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

    fn radii(prims: &[Primitive]) -> Vec<f64> {
        prims
            .iter()
            .map(|p| match p.shape {
                Shape::Circle { r, .. } => r,
                _ => panic!("expected circle"),
            })
            .collect()
    }

    #[test]
    fn test_satellites_on_dark_tones() {
        let map = IntensityMap::uniform(12, 12, 1.0);
        let prims = generate(&map, &config(PatternType::Stipple), &mut SeededRandom::default());
        // step 4 -> 3x3 points, each with a satellite
        assert_eq!(prims.len(), 18);
        let r = radii(&prims);
        for pair in r.chunks(2) {
            assert!((1.33..=2.67).contains(&pair[0]), "primary r = {}", pair[0]);
            assert_eq!(pair[1], 0.67);
        }
    }

    #[test]
    fn test_no_satellites_on_light_tones() {
        let map = IntensityMap::uniform(60, 60, 0.3);
        let prims = generate(&map, &config(PatternType::Stipple), &mut SeededRandom::default());
        assert!(!prims.is_empty());
        for r in radii(&prims) {
            assert!(r >= 1.33);
        }
    }

    #[test]
    fn test_seeded_is_reproducible() {
        let map = IntensityMap::from_fn(30, 30, |x, _| x as f32 / 30.0);
        let cfg = config(PatternType::Stipple);
        let a = generate(&map, &cfg, &mut SeededRandom::new(5));
        let b = generate(&map, &cfg, &mut SeededRandom::new(5));
        assert_eq!(a, b);
    }
}
