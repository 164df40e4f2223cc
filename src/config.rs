//! # Job Configuration
//!
//! Everything one "process" run needs besides the pixels. Loaded from JSON
//! (every field optional) and overridden by CLI flags:
//!
//! ```json
//! {
//!   "pattern": "spiral",
//!   "dot_size": 10,
//!   "color_mode": "cmyk",
//!   "angles": { "cyan": 20 },
//!   "colors": { "black": "#222222" }
//! }
//! ```
//!
//! ## Ranges
//!
//! | Field | Range | Default |
//! |-------|-------|---------|
//! | dot_size | 2 – 20 px | 8 |
//! | spacing | 5 – 30 px | 12 |
//! | contrast | 50 – 200 % | 100 |
//! | randomness | 0 – 100 % | 30 |
//! | line_angle, angles | 0 – 180° | 0, per channel |
//! | stroke_width | 0.5 – 5 px | 1 |

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::color::{Channel, ColorMode, Rgb};
use crate::error::{HalftoneError, Result};
use crate::patterns::{PatternConfig, PatternType};
use crate::primitive::RenderStyle;
use crate::random::{RandomSourceKind, DEFAULT_SEED};

/// Settings for a whole job, shared by every channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JobConfig {
    pub pattern: PatternType,
    pub dot_size: f64,
    pub spacing: f64,
    pub contrast: f64,
    pub randomness: f64,
    pub color_mode: ColorMode,
    pub render_style: RenderStyle,
    pub stroke_width: f64,
    pub line_angle: f64,
    /// Screen angle overrides by channel name.
    pub angles: BTreeMap<String, f64>,
    /// Ink colour overrides by channel name, as hex.
    pub colors: BTreeMap<String, String>,
    pub seed: u32,
    pub stipple_source: RandomSourceKind,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            pattern: PatternType::Circle,
            dot_size: 8.0,
            spacing: 12.0,
            contrast: 100.0,
            randomness: 30.0,
            color_mode: ColorMode::Monochrome,
            render_style: RenderStyle::Fill,
            stroke_width: 1.0,
            line_angle: 0.0,
            angles: BTreeMap::new(),
            colors: BTreeMap::new(),
            seed: DEFAULT_SEED,
            stipple_source: RandomSourceKind::Seeded,
        }
    }
}

fn check_range(name: &str, value: f64, min: f64, max: f64) -> Result<()> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(HalftoneError::Config(format!(
            "{} must be between {} and {}, got {}",
            name, min, max, value
        )))
    }
}

impl JobConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Reject out-of-range values and unparseable colours.
    ///
    /// Overrides for channels the colour mode does not produce are allowed
    /// and ignored, so one config file can serve every mode. Keys that name
    /// no channel at all are logged as warnings.
    pub fn validate(&self) -> Result<()> {
        check_range("dot_size", self.dot_size, 2.0, 20.0)?;
        check_range("spacing", self.spacing, 5.0, 30.0)?;
        check_range("contrast", self.contrast, 50.0, 200.0)?;
        check_range("randomness", self.randomness, 0.0, 100.0)?;
        check_range("line_angle", self.line_angle, 0.0, 180.0)?;
        check_range("stroke_width", self.stroke_width, 0.5, 5.0)?;
        for (channel, angle) in &self.angles {
            check_range(&format!("angle for {}", channel), *angle, 0.0, 180.0)?;
        }
        for hex in self.colors.values() {
            Rgb::from_hex(hex)?;
        }
        for key in self.unknown_channel_keys() {
            tracing::warn!(channel = %key, "Override for unknown channel is ignored");
        }
        Ok(())
    }

    /// Override keys in `angles` or `colors` that name no channel.
    pub fn unknown_channel_keys(&self) -> Vec<&str> {
        self.angles
            .keys()
            .chain(self.colors.keys())
            .map(String::as_str)
            .filter(|key| Channel::from_name(key).is_none())
            .collect()
    }

    /// Screen angle for a channel: override, else the channel default.
    pub fn angle_for(&self, channel: Channel) -> f64 {
        self.angles
            .get(channel.name())
            .copied()
            .unwrap_or_else(|| channel.default_angle())
    }

    /// Ink colour for a channel: override, else the channel default.
    pub fn color_for(&self, channel: Channel) -> Result<Rgb> {
        match self.colors.get(channel.name()) {
            Some(hex) => Rgb::from_hex(hex),
            None => Ok(channel.default_color()),
        }
    }

    /// Resolve the per-channel render settings.
    pub fn pattern_config(&self, channel: Channel) -> Result<PatternConfig> {
        Ok(PatternConfig {
            pattern: self.pattern,
            dot_size: self.dot_size,
            spacing: self.spacing,
            randomness: self.randomness,
            angle: self.angle_for(channel),
            line_angle: self.line_angle,
            style: self.render_style,
            stroke_width: self.stroke_width,
            color: self.color_for(channel)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults_are_valid() {
        JobConfig::default().validate().unwrap();
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = JobConfig::from_json_str(
            r##"{"pattern": "flow-field", "color_mode": "cmyk", "angles": {"cyan": 20}, "colors": {"black": "#222"}}"##,
        )
        .unwrap();
        assert_eq!(cfg.pattern, PatternType::FlowField);
        assert_eq!(cfg.color_mode, ColorMode::Cmyk);
        assert_eq!(cfg.dot_size, 8.0);
        assert_eq!(cfg.seed, DEFAULT_SEED);
        assert_eq!(cfg.angle_for(Channel::Cyan), 20.0);
        assert_eq!(cfg.angle_for(Channel::Magenta), 75.0);
        assert_eq!(cfg.color_for(Channel::Black).unwrap(), Rgb::new(0x22, 0x22, 0x22));
    }

    #[test]
    fn test_out_of_range_rejected() {
        let cases = [
            JobConfig { dot_size: 1.0, ..Default::default() },
            JobConfig { spacing: 31.0, ..Default::default() },
            JobConfig { contrast: 49.0, ..Default::default() },
            JobConfig { randomness: -1.0, ..Default::default() },
            JobConfig { line_angle: 181.0, ..Default::default() },
            JobConfig { stroke_width: 0.1, ..Default::default() },
            JobConfig { dot_size: f64::NAN, ..Default::default() },
        ];
        for cfg in cases {
            assert!(matches!(cfg.validate(), Err(HalftoneError::Config(_))), "{:?}", cfg);
        }
    }

    #[test]
    fn test_bad_channel_overrides_rejected() {
        let mut cfg = JobConfig::default();
        cfg.angles.insert("cyan".into(), 200.0);
        assert!(cfg.validate().is_err());

        let mut cfg = JobConfig::default();
        cfg.colors.insert("key".into(), "#zzzzzz".into());
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_misspelled_channel_keys_are_reported() {
        let cfg = JobConfig::from_json_str(
            r##"{"angles": {"cyna": 20, "cyan": 25}, "colors": {"blak": "#111111", "key": "#222222"}}"##,
        )
        .unwrap();
        cfg.validate().unwrap();
        assert_eq!(cfg.unknown_channel_keys(), ["cyna", "blak"]);
        assert_eq!(JobConfig::default().unknown_channel_keys(), Vec::<&str>::new());
    }

    #[test]
    fn test_pattern_config_resolves_channel() {
        let cfg = JobConfig {
            render_style: RenderStyle::Stroke,
            line_angle: 30.0,
            ..Default::default()
        };
        let pc = cfg.pattern_config(Channel::Magenta).unwrap();
        assert_eq!(pc.angle, 75.0);
        assert_eq!(pc.color, Rgb::new(0xff, 0x00, 0xff));
        assert_eq!(pc.line_angle, 30.0);
        assert_eq!(pc.style, RenderStyle::Stroke);
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(JobConfig::from_json_str("{"), Err(HalftoneError::Json(_))));
        assert!(matches!(
            JobConfig::from_json_file("/nonexistent/halftonist.json"),
            Err(HalftoneError::Io(_))
        ));
    }
}
