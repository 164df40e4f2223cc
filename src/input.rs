//! # Image Input
//!
//! Decodes source images into the RGBA buffer the separator expects. Anything
//! the `image` crate reads works out of the box; HEIC/HEIF needs the `heif`
//! feature (libheif).

use std::path::Path;

use image::imageops::FilterType;
use image::{DynamicImage, RgbaImage};

use crate::error::{HalftoneError, Result};

/// Read and decode an image file, shrinking it so the longest edge is at
/// most `max_size` pixels. Smaller images are never upscaled.
pub fn load_image(path: impl AsRef<Path>, max_size: Option<u32>) -> Result<RgbaImage> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let img = decode(&bytes, path)?;
    let img = match max_size {
        Some(max) => fit_within(img, max),
        None => img,
    };
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Loaded image"
    );
    Ok(img.to_rgba8())
}

fn decode(bytes: &[u8], path: &Path) -> Result<DynamicImage> {
    let named_heic = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("heic") || e.eq_ignore_ascii_case("heif"));
    if is_heic(bytes) || named_heic {
        return decode_heic(bytes);
    }
    image::load_from_memory(bytes)
        .map_err(|e| HalftoneError::Image(format!("Failed to decode {}: {}", path.display(), e)))
}

/// Downscale so neither edge exceeds `max`, keeping the aspect ratio.
pub fn fit_within(img: DynamicImage, max: u32) -> DynamicImage {
    let (width, height) = (img.width(), img.height());
    if max == 0 || (width <= max && height <= max) {
        return img;
    }
    let scale = max as f32 / width.max(height) as f32;
    let new_width = ((width as f32 * scale).round() as u32).max(1);
    let new_height = ((height as f32 * scale).round() as u32).max(1);
    img.resize_exact(new_width, new_height, FilterType::Triangle)
}

/// Check the ISO-BMFF `ftyp` box for a HEIF-family brand.
pub fn is_heic(data: &[u8]) -> bool {
    if data.len() < 12 || &data[4..8] != b"ftyp" {
        return false;
    }
    matches!(
        &data[8..12],
        b"heic" | b"heix" | b"hevc" | b"hevx" | b"heim" | b"heis" | b"hevm" | b"hevs" | b"mif1" | b"msf1"
    )
}

#[cfg(feature = "heif")]
fn decode_heic(data: &[u8]) -> Result<DynamicImage> {
    use libheif_rs::{ColorSpace, HeifContext, LibHeif, RgbChroma};

    let heif_err = |what: &str, e: libheif_rs::HeifError| HalftoneError::Image(format!("{}: {}", what, e));

    let lib_heif = LibHeif::new();
    let ctx = HeifContext::read_from_bytes(data).map_err(|e| heif_err("Failed to read HEIC", e))?;
    let handle = ctx
        .primary_image_handle()
        .map_err(|e| heif_err("Failed to get primary image", e))?;
    let image = lib_heif
        .decode(&handle, ColorSpace::Rgb(RgbChroma::Rgb), None)
        .map_err(|e| heif_err("Failed to decode HEIC image", e))?;

    let planes = image.planes();
    let interleaved = planes
        .interleaved
        .ok_or_else(|| HalftoneError::Image("No interleaved RGB data in HEIC".into()))?;

    let (width, height) = (image.width(), image.height());
    let stride = interleaved.stride;
    let mut rgb = image::RgbImage::new(width, height);
    for (x, y, px) in rgb.enumerate_pixels_mut() {
        let offset = y as usize * stride + x as usize * 3;
        if let Some(src) = interleaved.data.get(offset..offset + 3) {
            *px = image::Rgb([src[0], src[1], src[2]]);
        }
    }
    Ok(DynamicImage::ImageRgb8(rgb))
}

#[cfg(not(feature = "heif"))]
fn decode_heic(_data: &[u8]) -> Result<DynamicImage> {
    Err(HalftoneError::Image(
        "HEIC input needs halftonist built with the `heif` feature".into(),
    ))
}
