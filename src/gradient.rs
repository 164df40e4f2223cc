//! # Gradient Field
//!
//! Per-pixel unit gradient of an intensity map, used to orient flow-field
//! strokes. Computed with 3x3 Sobel kernels:
//!
//! ```text
//!        | 1  0 -1 |          |  1  2  1 |
//!   Gx = | 2  0 -2 |     Gy = |  0  0  0 |
//!        | 1  0 -1 |          | -1 -2 -1 |
//! ```
//!
//! With this sign convention a map that darkens left-to-right yields vectors
//! pointing in `-x`. Only orientation matters to the strokes, so the sign just
//! decides which end a segment starts from.
//!
//! Border pixels have no full neighbourhood and carry no gradient.

use crate::color::IntensityMap;

const SOBEL_X: [[f32; 3]; 3] = [[1.0, 0.0, -1.0], [2.0, 0.0, -2.0], [1.0, 0.0, -1.0]];
const SOBEL_Y: [[f32; 3]; 3] = [[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]];

/// Magnitudes at or below this are rounding residue from flat regions. The
/// smallest real step in an 8-bit image gives a magnitude of about 0.004.
const FLAT_EPSILON: f32 = 1e-4;

/// Normalised gradient vectors for every interior pixel.
#[derive(Debug, Clone)]
pub struct GradientField {
    width: usize,
    height: usize,
    vectors: Vec<Option<(f32, f32)>>,
}

impl GradientField {
    pub fn compute(map: &IntensityMap) -> Self {
        let width = map.width();
        let height = map.height();
        let mut vectors = vec![None; width * height];

        if width >= 3 && height >= 3 {
            for y in 1..height - 1 {
                for x in 1..width - 1 {
                    let mut gx = 0.0f32;
                    let mut gy = 0.0f32;
                    for (ky, (row_x, row_y)) in SOBEL_X.iter().zip(SOBEL_Y.iter()).enumerate() {
                        for kx in 0..3 {
                            let v = map.get(x + kx - 1, y + ky - 1).unwrap_or(0.0);
                            gx += v * row_x[kx];
                            gy += v * row_y[kx];
                        }
                    }
                    let mag = (gx * gx + gy * gy).sqrt();
                    vectors[y * width + x] = Some(if mag > FLAT_EPSILON {
                        (gx / mag, gy / mag)
                    } else {
                        (0.0, 0.0)
                    });
                }
            }
        }

        Self {
            width,
            height,
            vectors,
        }
    }

    /// Gradient at a pixel; `None` on the border or outside the field.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> Option<(f32, f32)> {
        if x < self.width && y < self.height {
            self.vectors[y * self.width + x]
        } else {
            None
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizontal_ramp(width: usize, height: usize) -> IntensityMap {
        IntensityMap::from_fn(width, height, |x, _| x as f32 / (width - 1) as f32)
    }

    #[test]
    fn test_horizontal_ramp_points_negative_x() {
        let field = GradientField::compute(&horizontal_ramp(16, 8));
        for y in 1..7 {
            for x in 1..15 {
                let (gx, gy) = field.at(x, y).unwrap();
                assert!((gx + 1.0).abs() < 1e-6, "gx = {} at ({}, {})", gx, x, y);
                assert!(gy.abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_border_is_undefined() {
        let field = GradientField::compute(&horizontal_ramp(6, 5));
        for x in 0..6 {
            assert!(field.at(x, 0).is_none());
            assert!(field.at(x, 4).is_none());
        }
        for y in 0..5 {
            assert!(field.at(0, y).is_none());
            assert!(field.at(5, y).is_none());
        }
        assert!(field.at(99, 99).is_none());
    }

    #[test]
    fn test_unit_or_zero_magnitude() {
        let map = IntensityMap::from_fn(20, 20, |x, y| {
            (((x * 7 + y * 13) % 11) as f32 / 10.0).min(1.0)
        });
        let field = GradientField::compute(&map);
        for y in 1..19 {
            for x in 1..19 {
                let (gx, gy) = field.at(x, y).unwrap();
                let mag = (gx * gx + gy * gy).sqrt();
                assert!(mag.abs() < 1e-6 || (mag - 1.0).abs() < 1e-6, "mag = {}", mag);
            }
        }
    }

    #[test]
    fn test_flat_map_is_zero() {
        let field = GradientField::compute(&IntensityMap::uniform(5, 5, 0.4));
        assert_eq!(field.at(2, 2), Some((0.0, 0.0)));
    }

    #[test]
    fn test_flat_maps_have_no_direction() {
        for v in [0.1, 0.3, 0.4, 0.5, 0.7, 0.9, 1.0] {
            let field = GradientField::compute(&IntensityMap::uniform(7, 7, v));
            for y in 1..6 {
                for x in 1..6 {
                    assert_eq!(field.at(x, y), Some((0.0, 0.0)), "v = {} at ({}, {})", v, x, y);
                }
            }
        }
    }

    #[test]
    fn test_single_level_step_is_kept() {
        let map = IntensityMap::from_fn(5, 5, |x, _| if x < 2 { 0.4 } else { 0.4 + 1.0 / 255.0 });
        let (gx, _) = GradientField::compute(&map).at(2, 2).unwrap();
        assert!((gx + 1.0).abs() < 1e-3, "gx = {}", gx);
    }

    #[test]
    fn test_tiny_map_has_no_interior() {
        let field = GradientField::compute(&IntensityMap::uniform(2, 2, 1.0));
        assert!(field.at(0, 0).is_none());
        assert!(field.at(1, 1).is_none());
    }
}
