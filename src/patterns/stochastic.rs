//! # Stochastic
//!
//! Frequency-modulated screen. A fine axis-aligned lattice (half the spacing)
//! is walked and each point fires with probability equal to its intensity.
//! Fired dots are jittered by up to `spacing · randomness / 100` and get a
//! radius between `dot_size / 4` and `dot_size / 2`.
//!
//! Draw order from the random source per point: fire test, x jitter, y jitter,
//! radius.

use super::PatternConfig;
use crate::color::IntensityMap;
use crate::primitive::Primitive;
use crate::random::RandomSource;

/// Lattice positions along one axis, `step` apart from zero.
pub(crate) fn axis(extent: usize, step: f64) -> impl Iterator<Item = f64> {
    let limit = extent as f64;
    let count = if step > 0.0 && step.is_finite() {
        (limit / step).ceil() as usize
    } else {
        0
    };
    (0..count).map(move |k| k as f64 * step).take_while(move |&v| v < limit)
}

pub fn generate(map: &IntensityMap, cfg: &PatternConfig, rng: &mut dyn RandomSource) -> Vec<Primitive> {
    let step = cfg.spacing / 2.0;
    let jitter = cfg.spacing * cfg.randomness / 100.0;
    let mut out = Vec::new();

    for y in axis(map.height(), step) {
        for x in axis(map.width(), step) {
            let Some(intensity) = map.sample(x, y) else {
                continue;
            };
            if rng.next() >= intensity as f64 {
                continue;
            }
            let jx = (rng.next() - 0.5) * jitter;
            let jy = (rng.next() - 0.5) * jitter;
            let r = cfg.dot_size / 4.0 + rng.next() * cfg.dot_size / 4.0;
            out.push(Primitive::circle(x + jx, y + jy, r, cfg.paint()));
        }
    }
    out
}
