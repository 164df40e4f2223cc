//! Channel compositing for the on-screen preview.
//!
//! Channels are printed on top of each other, so the preview multiplies the
//! channel rasters together in the colour mode's channel order. Inks on white
//! paper darken, never lighten.

use image::RgbaImage;
use serde::{Deserialize, Serialize};

/// How a channel layer combines with what is below it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Subtractive ink mixing.
    #[default]
    Multiply,
    /// Keep the darker of the two values per component.
    Darken,
}

impl BlendMode {
    /// Blend one 8-bit component.
    #[inline]
    pub fn apply(self, base: u8, layer: u8) -> u8 {
        match self {
            BlendMode::Multiply => ((base as u16 * layer as u16 + 127) / 255) as u8,
            BlendMode::Darken => base.min(layer),
        }
    }
}

/// Composite layers onto white paper, bottom layer first.
///
/// Layers smaller than `width`×`height` only cover their own extent.
pub fn composite<'a>(
    width: u32,
    height: u32,
    layers: impl IntoIterator<Item = &'a RgbaImage>,
    mode: BlendMode,
) -> RgbaImage {
    let mut out = RgbaImage::from_pixel(width, height, image::Rgba([255, 255, 255, 255]));
    for layer in layers {
        for (x, y, px) in layer.enumerate_pixels() {
            if x >= width || y >= height {
                continue;
            }
            let base = out.get_pixel_mut(x, y);
            for c in 0..3 {
                base.0[c] = mode.apply(base.0[c], px.0[c]);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_multiply_component() {
        assert_eq!(BlendMode::Multiply.apply(255, 200), 200);
        assert_eq!(BlendMode::Multiply.apply(0, 200), 0);
        assert_eq!(BlendMode::Multiply.apply(128, 128), 64);
    }

    #[test]
    fn test_darken_component() {
        assert_eq!(BlendMode::Darken.apply(90, 200), 90);
    }

    #[test]
    fn test_cyan_over_magenta_is_blue() {
        let cyan = RgbaImage::from_pixel(2, 2, Rgba([0, 255, 255, 255]));
        let magenta = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 255, 255]));
        let out = composite(2, 2, [&cyan, &magenta], BlendMode::Multiply);
        assert_eq!(out.get_pixel(1, 1).0, [0, 0, 255, 255]);
    }

    #[test]
    fn test_no_layers_is_white() {
        let out = composite(3, 1, Vec::<&RgbaImage>::new(), BlendMode::Multiply);
        assert!(out.pixels().all(|p| p.0 == [255, 255, 255, 255]));
    }
}
