//! # Colour Separation
//!
//! Splits an RGBA pixel buffer into per-channel intensity maps. Intensity is
//! "amount of ink": 1.0 is the darkest mark a channel can make, 0.0 leaves the
//! paper blank.
//!
//! ## Modes
//!
//! | Mode | Channels (in compositing order) |
//! |------|---------------------------------|
//! | Monochrome | key |
//! | Duotone | tone1, tone2 |
//! | Tritone | shadows, midtones, highlights |
//! | CMYK | cyan, magenta, yellow, black |
//!
//! Every mode first applies the contrast curve to the normalised RGB values:
//!
//! ```text
//! v' = clamp01((v - 0.5) * contrast / 100 + 0.5)
//! ```
//!
//! Duotone and tritone are derived from the inverted luminance `i`:
//!
//! ```text
//! tone1 = sqrt(i)          tone2 = 1 - sqrt(1 - i)
//! shadows = i   midtones = sin(i * PI)   highlights = 1 - i
//! ```

use std::f32::consts::PI;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{HalftoneError, Result};

/// Clamp a value to [0.0, 1.0].
#[inline]
pub fn clamp01(v: f32) -> f32 {
    v.clamp(0.0, 1.0)
}

/// Contrast curve around the 0.5 midpoint; `contrast` is a percentage.
#[inline]
pub fn apply_contrast(value: f32, contrast: f32) -> f32 {
    clamp01((value - 0.5) * contrast / 100.0 + 0.5)
}

/// Inverted Rec. 601 luminance (1.0 = black).
#[inline]
pub fn key_intensity(r: f32, g: f32, b: f32) -> f32 {
    clamp01(1.0 - (0.299 * r + 0.587 * g + 0.114 * b))
}

/// Naive RGB → CMYK. Pure black yields `c = m = y = 0`.
pub fn rgb_to_cmyk(r: f32, g: f32, b: f32) -> [f32; 4] {
    let k = 1.0 - r.max(g).max(b);
    if k >= 1.0 {
        return [0.0, 0.0, 0.0, 1.0];
    }
    let denom = 1.0 - k;
    [
        clamp01((1.0 - r - k) / denom),
        clamp01((1.0 - g - k) / denom),
        clamp01((1.0 - b - k) / denom),
        clamp01(k),
    ]
}

/// Inverse of [`rgb_to_cmyk`].
pub fn cmyk_to_rgb(c: f32, m: f32, y: f32, k: f32) -> [f32; 3] {
    [(1.0 - c) * (1.0 - k), (1.0 - m) * (1.0 - k), (1.0 - y) * (1.0 - k)]
}

/// An 8-bit RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb`, `rrggbb` or `#rgb`.
    pub fn from_hex(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        let bad = || HalftoneError::Config(format!("Invalid hex colour '{}'", s));
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(bad());
        }
        let byte = |h: &str| u8::from_str_radix(h, 16).map_err(|_| bad());

        match hex.len() {
            6 => Ok(Self::new(byte(&hex[0..2])?, byte(&hex[2..4])?, byte(&hex[4..6])?)),
            3 => {
                let nibble = |i: usize| byte(&hex[i..i + 1]).map(|v| v * 17);
                Ok(Self::new(nibble(0)?, nibble(1)?, nibble(2)?))
            }
            _ => Err(bad()),
        }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Colour separation mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorMode {
    #[default]
    #[serde(alias = "grayscale", alias = "mono")]
    Monochrome,
    Duotone,
    Tritone,
    Cmyk,
}

impl ColorMode {
    /// Channels produced by this mode, in compositing order.
    pub fn channels(self) -> &'static [Channel] {
        match self {
            ColorMode::Monochrome => &[Channel::Key],
            ColorMode::Duotone => &[Channel::Tone1, Channel::Tone2],
            ColorMode::Tritone => &[Channel::Shadows, Channel::Midtones, Channel::Highlights],
            ColorMode::Cmyk => &[Channel::Cyan, Channel::Magenta, Channel::Yellow, Channel::Black],
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "monochrome" | "mono" | "grayscale" => Some(Self::Monochrome),
            "duotone" => Some(Self::Duotone),
            "tritone" => Some(Self::Tritone),
            "cmyk" => Some(Self::Cmyk),
            _ => None,
        }
    }
}

/// One separated ink plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Channel {
    Key,
    Tone1,
    Tone2,
    Shadows,
    Midtones,
    Highlights,
    Cyan,
    Magenta,
    Yellow,
    Black,
}

impl Channel {
    pub const ALL: [Channel; 10] = [
        Channel::Key,
        Channel::Tone1,
        Channel::Tone2,
        Channel::Shadows,
        Channel::Midtones,
        Channel::Highlights,
        Channel::Cyan,
        Channel::Magenta,
        Channel::Yellow,
        Channel::Black,
    ];

    /// Look a channel up by its lowercase name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Key => "key",
            Channel::Tone1 => "tone1",
            Channel::Tone2 => "tone2",
            Channel::Shadows => "shadows",
            Channel::Midtones => "midtones",
            Channel::Highlights => "highlights",
            Channel::Cyan => "cyan",
            Channel::Magenta => "magenta",
            Channel::Yellow => "yellow",
            Channel::Black => "black",
        }
    }

    /// Default screen angle in degrees. The CMYK values are the classic
    /// moiré-minimising set; the tone channels are spread the same way.
    pub fn default_angle(self) -> f64 {
        match self {
            Channel::Cyan => 15.0,
            Channel::Magenta => 75.0,
            Channel::Yellow => 0.0,
            Channel::Black => 45.0,
            Channel::Key | Channel::Tone1 | Channel::Shadows => 45.0,
            Channel::Tone2 | Channel::Midtones => 75.0,
            Channel::Highlights => 15.0,
        }
    }

    /// Default ink colour.
    pub fn default_color(self) -> Rgb {
        match self {
            Channel::Cyan => Rgb::new(0x00, 0xff, 0xff),
            Channel::Magenta => Rgb::new(0xff, 0x00, 0xff),
            Channel::Yellow => Rgb::new(0xff, 0xff, 0x00),
            Channel::Black | Channel::Key | Channel::Tone1 => Rgb::BLACK,
            Channel::Tone2 => Rgb::new(0xff, 0x6b, 0x35),
            Channel::Shadows => Rgb::new(0x1a, 0x1a, 0x2e),
            Channel::Midtones => Rgb::new(0xe9, 0x45, 0x60),
            Channel::Highlights => Rgb::new(0xf5, 0xa6, 0x23),
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Standard CMYK screen angles.
pub const CMYK_SCREEN_ANGLES: [(Channel, f64); 4] = [
    (Channel::Cyan, 15.0),
    (Channel::Magenta, 75.0),
    (Channel::Yellow, 0.0),
    (Channel::Black, 45.0),
];

/// Row-major per-pixel intensity in [0, 1].
#[derive(Debug, Clone, PartialEq)]
pub struct IntensityMap {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl IntensityMap {
    pub fn new(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != width * height {
            return Err(HalftoneError::InvalidInput(format!(
                "intensity map has {} values, expected {}x{}",
                data.len(),
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Map filled with a single value.
    pub fn uniform(width: usize, height: usize, value: f32) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    /// Build a map by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> f32) -> Self {
        let mut data = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Intensity at `(x, y)`, or `None` outside the map.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        if x < self.width && y < self.height {
            Some(self.data[y * self.width + x])
        } else {
            None
        }
    }

    /// Intensity under a continuous position (floor of each coordinate).
    #[inline]
    pub fn sample(&self, x: f64, y: f64) -> Option<f32> {
        if x < 0.0 || y < 0.0 {
            return None;
        }
        self.get(x.floor() as usize, y.floor() as usize)
    }
}

/// All intensity maps produced for one image, in compositing order.
#[derive(Debug, Clone)]
pub struct ChannelSet {
    width: usize,
    height: usize,
    channels: Vec<(Channel, IntensityMap)>,
}

impl ChannelSet {
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, channel: Channel) -> Option<&IntensityMap> {
        self.channels
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, m)| m)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Channel, IntensityMap)> {
        self.channels.iter()
    }

    pub fn channels(&self) -> &[(Channel, IntensityMap)] {
        &self.channels
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

/// Separate an RGBA buffer into channel intensity maps.
///
/// `pixels` must hold exactly `4 * width * height` bytes. Alpha is ignored.
pub fn separate(
    pixels: &[u8],
    width: usize,
    height: usize,
    contrast: f32,
    mode: ColorMode,
) -> Result<ChannelSet> {
    if width == 0 || height == 0 {
        return Err(HalftoneError::InvalidInput(format!(
            "image dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    let count = width
        .checked_mul(height)
        .ok_or_else(|| HalftoneError::ResourceExhausted(format!("{}x{} pixels", width, height)))?;
    if pixels.len() != count * 4 {
        return Err(HalftoneError::InvalidInput(format!(
            "pixel buffer has {} bytes, expected {} for {}x{} RGBA",
            pixels.len(),
            count * 4,
            width,
            height
        )));
    }

    let channels = mode.channels();
    let mut planes: Vec<Vec<f32>> = channels.iter().map(|_| Vec::with_capacity(count)).collect();

    for px in pixels.chunks_exact(4) {
        let r = apply_contrast(px[0] as f32 / 255.0, contrast);
        let g = apply_contrast(px[1] as f32 / 255.0, contrast);
        let b = apply_contrast(px[2] as f32 / 255.0, contrast);

        match mode {
            ColorMode::Cmyk => {
                for (plane, v) in planes.iter_mut().zip(rgb_to_cmyk(r, g, b)) {
                    plane.push(v);
                }
            }
            ColorMode::Monochrome => planes[0].push(key_intensity(r, g, b)),
            ColorMode::Duotone => {
                let i = key_intensity(r, g, b);
                planes[0].push(clamp01(i.sqrt()));
                planes[1].push(clamp01(1.0 - (1.0 - i).sqrt()));
            }
            ColorMode::Tritone => {
                let i = key_intensity(r, g, b);
                planes[0].push(i);
                planes[1].push(clamp01((i * PI).sin()));
                planes[2].push(clamp01(1.0 - i));
            }
        }
    }

    let channels = channels
        .iter()
        .zip(planes)
        .map(|(&channel, data)| {
            (
                channel,
                IntensityMap {
                    width,
                    height,
                    data,
                },
            )
        })
        .collect();

    Ok(ChannelSet {
        width,
        height,
        channels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: usize, height: usize, rgb: [u8; 3]) -> Vec<u8> {
        (0..width * height)
            .flat_map(|_| [rgb[0], rgb[1], rgb[2], 255])
            .collect()
    }

    #[test]
    fn test_mid_gray_cmyk_is_neutral() {
        let pixels = solid(4, 4, [128, 128, 128]);
        let set = separate(&pixels, 4, 4, 100.0, ColorMode::Cmyk).unwrap();
        assert_eq!(set.len(), 4);
        let k = set.get(Channel::Black).unwrap();
        for &v in k.data() {
            assert!((v - 0.498).abs() < 1e-3, "k = {}", v);
        }
        for c in [Channel::Cyan, Channel::Magenta, Channel::Yellow] {
            for &v in set.get(c).unwrap().data() {
                assert!(v.abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_pure_black_guarded() {
        assert_eq!(rgb_to_cmyk(0.0, 0.0, 0.0), [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_cmyk_round_trip() {
        let steps = [0.0f32, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0];
        for &r in &steps {
            for &g in &steps {
                for &b in &steps {
                    let [c, m, y, k] = rgb_to_cmyk(r, g, b);
                    for v in [c, m, y, k] {
                        assert!((0.0..=1.0).contains(&v));
                    }
                    let [r2, g2, b2] = cmyk_to_rgb(c, m, y, k);
                    assert!((r - r2).abs() < 1e-5);
                    assert!((g - g2).abs() < 1e-5);
                    assert!((b - b2).abs() < 1e-5);
                }
            }
        }
    }

    #[test]
    fn test_contrast_curve() {
        assert_eq!(apply_contrast(0.5, 200.0), 0.5);
        assert_eq!(apply_contrast(0.75, 200.0), 1.0);
        assert_eq!(apply_contrast(0.25, 200.0), 0.0);
        assert!((apply_contrast(0.0, 50.0) - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_monochrome_extremes() {
        let white = separate(&solid(2, 1, [255, 255, 255]), 2, 1, 100.0, ColorMode::Monochrome).unwrap();
        assert!(white.get(Channel::Key).unwrap().data().iter().all(|v| v.abs() < 1e-6));
        let black = separate(&solid(2, 1, [0, 0, 0]), 2, 1, 100.0, ColorMode::Monochrome).unwrap();
        assert!(black.get(Channel::Key).unwrap().data().iter().all(|v| (v - 1.0).abs() < 1e-6));
    }

    #[test]
    fn test_duotone_and_tritone_curves() {
        let duo = separate(&solid(1, 1, [0, 0, 0]), 1, 1, 100.0, ColorMode::Duotone).unwrap();
        assert!((duo.get(Channel::Tone1).unwrap().data()[0] - 1.0).abs() < 1e-6);
        assert!((duo.get(Channel::Tone2).unwrap().data()[0] - 1.0).abs() < 1e-6);

        let tri = separate(&solid(1, 1, [255, 255, 255]), 1, 1, 100.0, ColorMode::Tritone).unwrap();
        assert!(tri.get(Channel::Shadows).unwrap().data()[0].abs() < 1e-6);
        assert!(tri.get(Channel::Midtones).unwrap().data()[0].abs() < 1e-5);
        assert!((tri.get(Channel::Highlights).unwrap().data()[0] - 1.0).abs() < 1e-6);

        // Midtones peak at half intensity
        let peak = (0.5f32 * PI).sin();
        assert!((peak - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_channel_order() {
        let names: Vec<_> = ColorMode::Cmyk.channels().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["cyan", "magenta", "yellow", "black"]);
        let names: Vec<_> = ColorMode::Tritone.channels().iter().map(|c| c.name()).collect();
        assert_eq!(names, ["shadows", "midtones", "highlights"]);
    }

    #[test]
    fn test_wrong_buffer_length() {
        let err = separate(&[0u8; 15], 2, 2, 100.0, ColorMode::Cmyk).unwrap_err();
        assert!(matches!(err, HalftoneError::InvalidInput(_)));
        let err = separate(&[], 0, 0, 100.0, ColorMode::Cmyk).unwrap_err();
        assert!(matches!(err, HalftoneError::InvalidInput(_)));
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::from_hex("#00ffff").unwrap(), Rgb::new(0, 255, 255));
        assert_eq!(Rgb::from_hex("FF6B35").unwrap(), Rgb::new(255, 107, 53));
        assert_eq!(Rgb::from_hex("#fff").unwrap(), Rgb::WHITE);
        assert!(Rgb::from_hex("#12345").is_err());
        assert!(Rgb::from_hex("#gggggg").is_err());
        assert!(Rgb::from_hex("#+f+f+f").is_err());
    }

    #[test]
    fn test_channel_names_round_trip() {
        for channel in Channel::ALL {
            assert_eq!(Channel::from_name(channel.name()), Some(channel));
        }
        assert_eq!(Channel::from_name("cyna"), None);
        assert!(Rgb::from_hex("+ff").is_err());
        assert_eq!(Rgb::new(255, 107, 53).to_hex(), "#ff6b35");
    }

    #[test]
    fn test_screen_angles() {
        for (channel, angle) in CMYK_SCREEN_ANGLES {
            assert_eq!(channel.default_angle(), angle);
        }
    }

    #[test]
    fn test_sample_floors() {
        let map = IntensityMap::from_fn(3, 2, |x, y| (y * 3 + x) as f32);
        assert_eq!(map.sample(2.9, 1.2), Some(5.0));
        assert_eq!(map.sample(3.0, 0.0), None);
        assert_eq!(map.sample(-0.1, 0.0), None);
    }
}
