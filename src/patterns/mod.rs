//! # Halftone Patterns
//!
//! Shape generators for each halftone screen. Each pattern lives in its own
//! module and turns intensity into [`Primitive`] descriptors.
//!
//! Grid patterns (circle, square, diamond, concentric, spiral, hexagonal, wave,
//! flowfield) expose a `shape()` function that [`generate`] feeds through the
//! shared rotated lattice in [`crate::grid`]. Patterns that need their own
//! spacing, randomness or cell construction (line, crosshatch, stochastic,
//! stipple, voronoi) expose a `generate()` with a bespoke sampling loop.
//!
//! | Pattern | Mark | Drawn when |
//! |---------|------|------------|
//! | circle | dot, r = dot/2 · i | r > 0.5 |
//! | square | square, side = dot · i | side > 0.5 |
//! | diamond | square turned 45° | side > 0.5 |
//! | line | segment along line angle | width > 0.2 |
//! | crosshatch | 1..5 hatch strokes per cell | i > 0.1 |
//! | stochastic | jittered dot | random < i |
//! | stipple | dot plus satellite | random < i |
//! | voronoi | jittered hexagonal cell | i > 0.05 |
//! | concentric | rings | i > 0.1 |
//! | spiral | open spiral path | i > 0.1 |
//! | hexagonal | hexagon | i > 0.05 |
//! | wave | dot displaced by a sine | i > 0.1 |
//! | flowfield | stroke along the image gradient | i > 0.1 |

pub mod cells;
pub mod circle;
pub mod concentric;
pub mod crosshatch;
pub mod diamond;
pub mod flowfield;
pub mod hexagonal;
pub mod line;
pub mod spiral;
pub mod square;
pub mod stipple;
pub mod stochastic;
pub mod wave;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{IntensityMap, Rgb};
use crate::gradient::GradientField;
use crate::grid;
use crate::primitive::{Paint, Primitive, RenderStyle};
use crate::random::RandomSource;

/// All available patterns, in display order.
pub const PATTERNS: &[&str] = &[
    "circle",
    "square",
    "diamond",
    "line",
    "crosshatch",
    "stochastic",
    "stipple",
    "voronoi",
    "concentric",
    "spiral",
    "hexagonal",
    "wave",
    "flowfield",
];

/// Halftone screen type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PatternType {
    #[default]
    Circle,
    Square,
    Diamond,
    Line,
    Crosshatch,
    Stochastic,
    Stipple,
    /// Jittered polygon cells. Named after the look, not a real tessellation.
    Voronoi,
    Concentric,
    Spiral,
    Hexagonal,
    Wave,
    FlowField,
}

impl PatternType {
    /// Look a pattern up by name (case insensitive).
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "circle" | "dot" | "dots" => Some(Self::Circle),
            "square" => Some(Self::Square),
            "diamond" => Some(Self::Diamond),
            "line" | "lines" => Some(Self::Line),
            "crosshatch" => Some(Self::Crosshatch),
            "stochastic" => Some(Self::Stochastic),
            "stipple" => Some(Self::Stipple),
            "voronoi" | "cells" => Some(Self::Voronoi),
            "concentric" => Some(Self::Concentric),
            "spiral" => Some(Self::Spiral),
            "hexagonal" | "hex" => Some(Self::Hexagonal),
            "wave" | "waves" => Some(Self::Wave),
            "flowfield" | "flow-field" | "flow_field" => Some(Self::FlowField),
            _ => None,
        }
    }

    /// Like [`parse`](Self::parse), but unknown names fall back to circle.
    pub fn from_name(name: &str) -> Self {
        Self::parse(name).unwrap_or_else(|| {
            tracing::warn!(pattern = %name, "Unknown pattern, falling back to circle");
            Self::Circle
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Diamond => "diamond",
            Self::Line => "line",
            Self::Crosshatch => "crosshatch",
            Self::Stochastic => "stochastic",
            Self::Stipple => "stipple",
            Self::Voronoi => "voronoi",
            Self::Concentric => "concentric",
            Self::Spiral => "spiral",
            Self::Hexagonal => "hexagonal",
            Self::Wave => "wave",
            Self::FlowField => "flowfield",
        }
    }

    /// Whether the pattern samples through the shared rotated lattice.
    pub fn uses_grid(self) -> bool {
        !matches!(
            self,
            Self::Line | Self::Crosshatch | Self::Stochastic | Self::Stipple | Self::Voronoi
        )
    }
}

impl From<String> for PatternType {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<PatternType> for String {
    fn from(pattern: PatternType) -> Self {
        pattern.name().to_string()
    }
}

impl fmt::Display for PatternType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Settings for one channel's render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternConfig {
    pub pattern: PatternType,
    /// Largest mark size in pixels.
    pub dot_size: f64,
    /// Lattice step in pixels.
    pub spacing: f64,
    /// Jitter amount, percent.
    pub randomness: f64,
    /// Screen angle (rotates the lattice), degrees.
    pub angle: f64,
    /// Mark angle for line, crosshatch and wave, degrees.
    pub line_angle: f64,
    pub style: RenderStyle,
    pub stroke_width: f64,
    pub color: Rgb,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            pattern: PatternType::Circle,
            dot_size: 8.0,
            spacing: 12.0,
            randomness: 30.0,
            angle: 45.0,
            line_angle: 0.0,
            style: RenderStyle::Fill,
            stroke_width: 1.0,
            color: Rgb::BLACK,
        }
    }
}

impl PatternConfig {
    /// Paint for closed shapes under the configured style.
    #[inline]
    pub fn paint(&self) -> Paint {
        Paint::for_style(self.style, self.stroke_width)
    }
}

/// Render one intensity map as the configured pattern.
pub fn generate(
    map: &IntensityMap,
    cfg: &PatternConfig,
    rng: &mut dyn RandomSource,
) -> Vec<Primitive> {
    let (angle, spacing) = (cfg.angle, cfg.spacing);
    match cfg.pattern {
        PatternType::Circle => grid::sample(map, angle, spacing, |s, out| circle::shape(s, cfg, out)),
        PatternType::Square => grid::sample(map, angle, spacing, |s, out| square::shape(s, cfg, out)),
        PatternType::Diamond => grid::sample(map, angle, spacing, |s, out| diamond::shape(s, cfg, out)),
        PatternType::Concentric => {
            grid::sample(map, angle, spacing, |s, out| concentric::shape(s, cfg, out))
        }
        PatternType::Spiral => grid::sample(map, angle, spacing, |s, out| spiral::shape(s, cfg, out)),
        PatternType::Hexagonal => {
            grid::sample(map, angle, spacing, |s, out| hexagonal::shape(s, cfg, out))
        }
        PatternType::Wave => grid::sample(map, angle, spacing, |s, out| wave::shape(s, cfg, out)),
        PatternType::FlowField => {
            let field = GradientField::compute(map);
            grid::sample(map, angle, spacing, |s, out| flowfield::shape(s, &field, cfg, out))
        }
        PatternType::Line => line::generate(map, cfg),
        PatternType::Crosshatch => crosshatch::generate(map, cfg),
        PatternType::Stochastic => stochastic::generate(map, cfg, rng),
        PatternType::Stipple => stipple::generate(map, cfg, rng),
        PatternType::Voronoi => cells::generate(map, cfg, rng),
    }
}
