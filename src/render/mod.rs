//! # Rendering Module
//!
//! Turns one channel's intensity map into synchronised outputs. Pattern
//! generators produce [`Primitive`]s; this module hands the same list to every
//! consumer.
//!
//! ## Modules
//!
//! - [`raster`]: tiny-skia surface for previews and PNG export
//! - [`svg`]: vector document per channel
//! - [`hpgl`]: plotter program per channel
//! - [`composite`]: multiply-blend of channel rasters into one preview
//!
//! ## Usage Example
//!
//! ```
//! use halftonist::color::{Channel, IntensityMap};
//! use halftonist::patterns::PatternConfig;
//! use halftonist::random::SeededRandom;
//! use halftonist::render;
//!
//! let map = IntensityMap::uniform(24, 24, 1.0);
//! let cfg = PatternConfig { angle: 0.0, ..Default::default() };
//! let out = render::render_channel(Channel::Key, &map, &cfg, &mut SeededRandom::default()).unwrap();
//!
//! assert_eq!(out.primitives.len(), 4);
//! assert_eq!(out.surface.draw_calls(), 4);
//! assert!(out.svg.contains("<circle"));
//! ```

pub mod composite;
pub mod hpgl;
pub mod raster;
pub mod svg;

use crate::color::{Channel, IntensityMap};
use crate::error::Result;
use crate::patterns::{self, PatternConfig};
use crate::primitive::Primitive;
use crate::random::RandomSource;

use raster::Surface;

/// Everything produced for one channel.
#[derive(Debug, Clone)]
pub struct ChannelOutput {
    pub channel: Channel,
    pub config: PatternConfig,
    pub primitives: Vec<Primitive>,
    /// SVG document for the channel.
    pub svg: String,
    /// Raster preview, one draw call per primitive.
    pub surface: Surface,
}

impl ChannelOutput {
    /// HPGL program for the channel.
    pub fn hpgl(&self) -> String {
        hpgl::encode(&self.primitives, self.surface.height() as usize)
    }
}

/// Generate, rasterise and serialise one channel.
pub fn render_channel(
    channel: Channel,
    map: &IntensityMap,
    cfg: &PatternConfig,
    rng: &mut dyn RandomSource,
) -> Result<ChannelOutput> {
    let (width, height) = (map.width(), map.height());
    let primitives = patterns::generate(map, cfg, rng);

    let mut surface = Surface::new(width, height, cfg.color)?;
    for primitive in &primitives {
        surface.draw(primitive);
    }
    let svg = svg::document(width, height, &primitives, cfg.color);

    tracing::debug!(
        channel = %channel,
        pattern = %cfg.pattern,
        primitives = primitives.len(),
        "Rendered channel"
    );

    Ok(ChannelOutput {
        channel,
        config: cfg.clone(),
        primitives,
        svg,
        surface,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::{PatternType, PATTERNS};
    use crate::random::SeededRandom;

    #[test]
    fn test_draw_calls_match_svg_elements() {
        let map = IntensityMap::from_fn(48, 40, |x, y| ((x + y) as f32 / 86.0).min(1.0));
        for name in PATTERNS {
            let cfg = PatternConfig {
                pattern: PatternType::from_name(name),
                ..Default::default()
            };
            let out = render_channel(Channel::Key, &map, &cfg, &mut SeededRandom::default()).unwrap();
            let elements = out.svg.lines().filter(|l| l.starts_with('<') && !l.starts_with("</")).count();
            // svg root, background rect and group wrapper
            assert_eq!(elements - 3, out.primitives.len(), "{}", name);
            assert_eq!(out.surface.draw_calls(), out.primitives.len(), "{}", name);
        }
    }

    #[test]
    fn test_hpgl_uses_canvas_height() {
        let map = IntensityMap::uniform(24, 24, 1.0);
        let cfg = PatternConfig {
            angle: 0.0,
            ..Default::default()
        };
        let out = render_channel(Channel::Key, &map, &cfg, &mut SeededRandom::default()).unwrap();
        let program = out.hpgl();
        assert!(program.starts_with("IN;SP1;\n"));
        assert_eq!(program.matches("CI160;").count(), 4);
    }

    #[test]
    fn test_surface_takes_channel_color() {
        let map = IntensityMap::uniform(24, 24, 1.0);
        let cfg = PatternConfig {
            angle: 0.0,
            color: crate::color::Rgb::new(255, 0, 0),
            ..Default::default()
        };
        let out = render_channel(Channel::Key, &map, &cfg, &mut SeededRandom::default()).unwrap();
        assert!(out.svg.contains(r##"<g fill="#ff0000">"##));
        let center = out.surface.pixel(6, 6).unwrap();
        assert_eq!(center, [255, 0, 0, 255]);
    }
}
